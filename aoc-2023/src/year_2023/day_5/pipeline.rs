use super::range_map::{MAX_VALUE, RangeMap, Value};
use anyhow::ensure;
use std::collections::BTreeSet;

/// Half-open interval `[start, start + length)` of seed numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedRange {
    pub start: Value,
    pub length: Value,
}

impl SeedRange {
    pub fn end(&self) -> Value {
        self.start.saturating_add(self.length)
    }

    pub fn contains(&self, value: Value) -> bool {
        (self.start..self.end()).contains(&value)
    }
}

/// How the `seeds:` line is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedMode {
    /// Every number is a seed.
    Flat,
    /// Numbers pair up as `start length`.
    Ranged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seeds {
    Flat(Vec<Value>),
    Ranged(Vec<SeedRange>),
}

/// Category-chained composition of range maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<RangeMap>,
}

impl Pipeline {
    /// Fails when a stage's source category is not the previous stage's target.
    pub fn new(stages: Vec<RangeMap>) -> anyhow::Result<Self> {
        for (previous, next) in stages.iter().zip(stages.iter().skip(1)) {
            ensure!(
                previous.target() == next.source(),
                "map '{}-to-{}' does not continue from '{}'",
                next.source(),
                next.target(),
                previous.target()
            );
        }
        Ok(Self { stages })
    }

    pub fn stages(&self) -> &[RangeMap] {
        &self.stages
    }

    pub fn map_value(&self, value: Value) -> Value {
        self.stages
            .iter()
            .fold(value, |value, stage| stage.convert_forward(value))
    }

    pub fn map_forward(&self, values: &[Value]) -> Vec<Value> {
        values.iter().map(|&value| self.map_value(value)).collect()
    }

    /// Seed values at which the composed mapping may change its offset.
    ///
    /// Between two consecutive breakpoints the whole pipeline is `x + c` for a
    /// single constant `c`.
    pub fn compute_breakpoints(&self) -> BTreeSet<Value> {
        self.stages
            .iter()
            .rev()
            .fold(BTreeSet::from([0, MAX_VALUE]), |breakpoints, stage| {
                stage.invert_breakpoints(&breakpoints)
            })
    }

    /// Lowest final-category value reachable from the declared seeds.
    ///
    /// `None` when no seed is declared.
    pub fn lowest_output(&self, seeds: &Seeds) -> Option<Value> {
        match seeds {
            Seeds::Flat(values) => self.map_forward(values).into_iter().min(),
            Seeds::Ranged(ranges) => self.lowest_output_in_ranges(ranges),
        }
    }

    fn lowest_output_in_ranges(&self, ranges: &[SeedRange]) -> Option<Value> {
        let breakpoints = self.compute_breakpoints();

        // Every piece is increasing, so a range's minimum sits at its start or
        // at a breakpoint inside it.
        let candidates: BTreeSet<Value> = breakpoints
            .iter()
            .copied()
            .filter(|&breakpoint| ranges.iter().any(|range| range.contains(breakpoint)))
            .chain(
                ranges
                    .iter()
                    .filter(|range| range.length > 0)
                    .map(|range| range.start),
            )
            .collect();

        tracing::debug!(
            breakpoints = breakpoints.len(),
            candidates = candidates.len(),
            "almanac breakpoint scan"
        );

        candidates
            .into_iter()
            .map(|seed| self.map_value(seed))
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::super::range_map::ShiftRule;
    use super::*;

    fn two_stage() -> Pipeline {
        Pipeline::new(vec![
            RangeMap::new("seed", "soil", vec![ShiftRule::new(50, 98, 2)]),
            RangeMap::new("soil", "location", vec![ShiftRule::new(0, 40, 20)]),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_broken_category_chain() {
        let result = Pipeline::new(vec![
            RangeMap::new("seed", "soil", Vec::new()),
            RangeMap::new("water", "light", Vec::new()),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn forward_threads_every_stage() {
        let pipeline = two_stage();
        assert_eq!(pipeline.map_forward(&[98, 45, 10]), vec![10, 5, 10]);
    }

    #[test]
    fn breakpoints_are_closed_by_sentinels() {
        let breakpoints = two_stage().compute_breakpoints();
        assert_eq!(breakpoints.first(), Some(&0));
        assert_eq!(breakpoints.last(), Some(&MAX_VALUE));
    }

    #[test]
    fn empty_seed_declarations_have_no_minimum() {
        let pipeline = two_stage();
        assert_eq!(pipeline.lowest_output(&Seeds::Flat(Vec::new())), None);
        assert_eq!(pipeline.lowest_output(&Seeds::Ranged(Vec::new())), None);
    }

    #[test]
    fn range_minimum_uses_range_start() {
        // Identity pipeline: the minimum is the lowest range start
        let pipeline = Pipeline::new(vec![RangeMap::new("seed", "location", Vec::new())]).unwrap();
        let seeds = Seeds::Ranged(vec![
            SeedRange { start: 30, length: 5 },
            SeedRange { start: 12, length: 3 },
        ]);
        assert_eq!(pipeline.lowest_output(&seeds), Some(12));
    }

    #[test]
    fn seed_range_is_half_open() {
        let range = SeedRange { start: 79, length: 14 };
        assert!(range.contains(79));
        assert!(range.contains(92));
        assert!(!range.contains(93));
    }
}
