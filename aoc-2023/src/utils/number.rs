/// Greatest common divisor; `gcd(0, 0) == 0`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple of all values, `None` for an empty input.
///
/// Returns `None` as well when the result does not fit in a `u64`.
pub fn lcm<I>(values: I) -> Option<u64>
where
    I: IntoIterator<Item = u64>,
{
    values.into_iter().try_fold(None, |acc: Option<u64>, value| {
        let Some(acc) = acc else {
            return Some(Some(value));
        };
        if acc == 0 || value == 0 {
            return Some(Some(0));
        }
        (acc / gcd(acc, value)).checked_mul(value).map(Some)
    })?
}
