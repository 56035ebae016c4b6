use std::collections::BTreeSet;

/// Numeric domain of every almanac category.
pub type Value = i64;

/// Closing bound of every breakpoint set.
pub const MAX_VALUE: Value = Value::MAX;

/// One `destination source length` line of an almanac map.
///
/// The source interval is matched inclusively on both ends, so a rule covers
/// `length + 1` values. Adjacent rules therefore share a boundary value; the
/// first rule in list order wins it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftRule {
    source_start: Value,
    destination_start: Value,
    length: Value,
}

impl ShiftRule {
    pub fn new(destination_start: Value, source_start: Value, length: Value) -> Self {
        Self {
            source_start,
            destination_start,
            length,
        }
    }

    pub fn source_start(&self) -> Value {
        self.source_start
    }

    pub fn source_end(&self) -> Value {
        self.source_start.saturating_add(self.length)
    }

    pub fn destination_start(&self) -> Value {
        self.destination_start
    }

    pub fn destination_end(&self) -> Value {
        self.destination_start.saturating_add(self.length)
    }

    pub fn offset(&self) -> Value {
        self.destination_start - self.source_start
    }

    fn covers_source(&self, value: Value) -> bool {
        (self.source_start..=self.source_end()).contains(&value)
    }

    fn covers_destination(&self, value: Value) -> bool {
        (self.destination_start..=self.destination_end()).contains(&value)
    }
}

/// A `<source>-to-<target>` translation stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeMap {
    source: String,
    target: String,
    rules: Vec<ShiftRule>,
}

impl RangeMap {
    pub fn new(source: impl Into<String>, target: impl Into<String>, rules: Vec<ShiftRule>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            rules,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn rules(&self) -> &[ShiftRule] {
        &self.rules
    }

    /// Translate a source value; unmatched values pass through unchanged.
    pub fn convert_forward(&self, value: Value) -> Value {
        self.rules
            .iter()
            .find(|rule| rule.covers_source(value))
            .map_or(value, |rule| value + rule.offset())
    }

    /// Translate a destination value back through the first rule whose
    /// destination interval holds it; identity otherwise.
    pub fn convert_backward(&self, value: Value) -> Value {
        self.rules
            .iter()
            .find(|rule| rule.covers_destination(value))
            .map_or(value, |rule| rule.source_start + (value - rule.destination_start))
    }

    fn offset_at(&self, value: Value) -> Value {
        self.rules
            .iter()
            .find(|rule| rule.covers_source(value))
            .map_or(0, ShiftRule::offset)
    }

    /// Starts of the input intervals on which this map applies one fixed
    /// offset. A new interval begins wherever the set of matching rules
    /// changes: at each rule's start and right after its inclusive end.
    fn piece_starts(&self) -> BTreeSet<Value> {
        let mut starts: BTreeSet<Value> = self
            .rules
            .iter()
            .flat_map(|rule| [Some(rule.source_start), rule.source_end().checked_add(1)])
            .flatten()
            .filter(|&start| start >= 0)
            .collect();
        starts.insert(0);
        starts
    }

    /// Pull breakpoints of this map's output domain back into its input
    /// domain.
    ///
    /// The result holds this map's own piece boundaries, `0` and
    /// [`MAX_VALUE`], and every pre-image of `output_breakpoints`. Between two
    /// adjacent results this map followed by anything that is affine between
    /// adjacent `output_breakpoints` is itself affine with slope 1.
    pub fn invert_breakpoints(&self, output_breakpoints: &BTreeSet<Value>) -> BTreeSet<Value> {
        let starts = self.piece_starts();
        let ends = starts.iter().skip(1).copied().map(Some).chain([None]);

        let mut breakpoints = starts.clone();
        breakpoints.insert(MAX_VALUE);

        for (start, end) in starts.iter().copied().zip(ends) {
            let offset = self.offset_at(start);
            let low = start.saturating_add(offset);
            let images = match end {
                Some(end) => output_breakpoints.range(low..end.saturating_add(offset)),
                None => output_breakpoints.range(low..),
            };
            breakpoints.extend(images.filter_map(|image| image.checked_sub(offset)));
        }

        breakpoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_to_soil() -> RangeMap {
        RangeMap::new(
            "seed",
            "soil",
            vec![ShiftRule::new(50, 98, 2), ShiftRule::new(52, 50, 48)],
        )
    }

    #[test]
    fn forward_applies_first_matching_rule() {
        let map = RangeMap::new("seed", "soil", vec![ShiftRule::new(50, 98, 2)]);
        assert_eq!(map.convert_forward(98), 50);
        assert_eq!(map.convert_forward(99), 51);
        assert_eq!(map.convert_forward(97), 97);
    }

    #[test]
    fn source_end_is_matched_inclusively() {
        let map = RangeMap::new("seed", "soil", vec![ShiftRule::new(50, 98, 2)]);
        assert_eq!(map.convert_forward(100), 52);
        assert_eq!(map.convert_forward(101), 101);
    }

    #[test]
    fn shared_boundary_goes_to_first_rule_in_list() {
        // 98 is both the inclusive end of the second rule and the start of the first
        let map = seed_to_soil();
        assert_eq!(map.convert_forward(98), 50);

        let reordered = RangeMap::new(
            "seed",
            "soil",
            vec![ShiftRule::new(52, 50, 48), ShiftRule::new(50, 98, 2)],
        );
        assert_eq!(reordered.convert_forward(98), 100);
    }

    #[test]
    fn backward_inverts_destination_interval() {
        let map = seed_to_soil();
        assert_eq!(map.convert_backward(50), 98);
        assert_eq!(map.convert_backward(51), 99);
        assert_eq!(map.convert_backward(60), 58);
        assert_eq!(map.convert_backward(10), 10);
    }

    #[test]
    fn rule_derived_bounds() {
        let rule = ShiftRule::new(52, 50, 48);
        assert_eq!(rule.source_end(), 98);
        assert_eq!(rule.destination_end(), 100);
        assert_eq!(rule.offset(), 2);
    }

    #[test]
    fn breakpoints_of_identity_map_are_sentinels_and_inputs() {
        let map = RangeMap::new("a", "b", Vec::new());
        let output = BTreeSet::from([0, 7, MAX_VALUE]);
        assert_eq!(map.invert_breakpoints(&output), BTreeSet::from([0, 7, MAX_VALUE]));
    }

    #[test]
    fn breakpoints_include_every_preimage() {
        // 50 is reached both from 98 (shifted) and from 50 itself (identity)
        let map = RangeMap::new("a", "b", vec![ShiftRule::new(50, 98, 2)]);
        let output = BTreeSet::from([0, 50, MAX_VALUE]);
        let breakpoints = map.invert_breakpoints(&output);

        assert!(breakpoints.contains(&98));
        assert!(breakpoints.contains(&50));
        assert!(breakpoints.contains(&101));
        assert!(breakpoints.contains(&0));
        assert!(breakpoints.contains(&MAX_VALUE));
    }
}
