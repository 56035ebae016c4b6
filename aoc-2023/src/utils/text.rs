/// Split input into blocks of consecutive non-blank lines.
///
/// Works for both `\n` and `\r\n` line endings; blank runs of any length
/// separate blocks.
pub fn paragraphs(input: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for line in input.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// Parse every whitespace-separated token as a number.
pub fn numbers<T>(text: &str) -> anyhow::Result<Vec<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    text.split_whitespace()
        .map(|token| {
            token
                .parse()
                .map_err(|e| anyhow::anyhow!("'{}' is not a number: {}", token, e))
        })
        .collect()
}
