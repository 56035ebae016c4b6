//! Arena-backed binary tree whose links may form cycles.

use anyhow::{anyhow, bail, ensure};

/// Index of a node inside its [`BinaryTree`].
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

impl TryFrom<char> for Turn {
    type Error = anyhow::Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'L' => Ok(Turn::Left),
            'R' => Ok(Turn::Right),
            other => Err(anyhow!("unknown turn '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TreeNode<T> {
    pub data: T,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct BinaryTree<T> {
    nodes: Vec<TreeNode<T>>,
}

impl<T> BinaryTree<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add an unlinked node and return its id.
    pub fn push(&mut self, data: T) -> NodeId {
        self.nodes.push(TreeNode {
            data,
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }

    pub fn link(&mut self, node: NodeId, left: NodeId, right: NodeId) {
        let node = &mut self.nodes[node];
        node.left = Some(left);
        node.right = Some(right);
    }

    pub fn node(&self, id: NodeId) -> &TreeNode<T> {
        &self.nodes[id]
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        0..self.nodes.len()
    }

    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<NodeId> {
        self.nodes.iter().position(|node| predicate(&node.data))
    }

    /// Walk from `source`, cycling through `instructions`, and count the steps
    /// taken until `target_check` accepts the current node.
    ///
    /// Fails on an empty instruction list (when `source` is not a target),
    /// when a walk reaches a missing child, and once every (node, instruction)
    /// state has been visited without meeting a target.
    pub fn traverse_with_instructions(
        &self,
        instructions: &[Turn],
        source: NodeId,
        mut target_check: impl FnMut(&TreeNode<T>) -> bool,
    ) -> anyhow::Result<u64> {
        let mut current = source;
        let mut steps = 0;
        let states = self.nodes.len() as u64 * instructions.len() as u64;

        for turn in instructions.iter().cycle() {
            let node = &self.nodes[current];
            if target_check(node) {
                return Ok(steps);
            }
            ensure!(steps < states, "target unreachable, walk cycles after {} steps", steps);
            current = match turn {
                Turn::Left => node.left,
                Turn::Right => node.right,
            }
            .ok_or_else(|| anyhow!("dead end after {} steps", steps))?;
            steps += 1;
        }

        if target_check(&self.nodes[current]) {
            return Ok(steps);
        }
        bail!("no instructions to follow")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> BinaryTree<&'static str> {
        let mut tree = BinaryTree::new();
        let a = tree.push("a");
        let b = tree.push("b");
        let c = tree.push("c");
        tree.link(a, b, c);
        tree.link(b, a, c);
        tree.link(c, c, c);
        tree
    }

    #[test]
    fn counts_steps_until_target() {
        let tree = triangle();
        let steps = tree
            .traverse_with_instructions(&[Turn::Left, Turn::Left, Turn::Right], 0, |n| n.data == "c")
            .unwrap();
        assert_eq!(steps, 3);
    }

    #[test]
    fn source_that_is_target_takes_zero_steps() {
        let tree = triangle();
        assert_eq!(
            tree.traverse_with_instructions(&[], 2, |n| n.data == "c").unwrap(),
            0
        );
    }

    #[test]
    fn missing_child_is_an_error() {
        let mut tree = BinaryTree::new();
        tree.push("lonely");
        assert!(
            tree.traverse_with_instructions(&[Turn::Left], 0, |n| n.data == "x")
                .is_err()
        );
    }

    #[test]
    fn unreachable_target_is_an_error() {
        // `c` only links to itself, so `a` is never reached again
        let tree = triangle();
        assert!(
            tree.traverse_with_instructions(&[Turn::Left, Turn::Right], 2, |n| n.data == "a")
                .is_err()
        );
    }

    #[test]
    fn empty_instructions_without_target_fail() {
        let tree = triangle();
        assert!(tree.traverse_with_instructions(&[], 0, |n| n.data == "c").is_err());
    }
}
