use itertools::Itertools;
use tracing::debug;

use crate::error::RangeError;

/// Decimal digits of a number, least significant first.
///
/// Zero has no digits, so every scan over it is empty.
#[derive(Debug, Clone, Copy)]
pub struct Digits {
    n: u32,
}

impl Digits {
    pub fn new(n: u32) -> Self {
        Digits { n }
    }
}

impl Iterator for Digits {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.n == 0 {
            return None;
        }

        let digit = self.n % 10;
        self.n /= 10;
        Some(digit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdjacencyRule {
    /// Any two equal neighbouring digits, however long the run they sit in.
    AnyPair,
    /// A run of equal digits that is exactly two long.
    #[default]
    ExactPair,
}

impl AdjacencyRule {
    pub fn matches(self, n: u32) -> bool {
        match self {
            AdjacencyRule::AnyPair => has_any_adjacent_pair(n),
            AdjacencyRule::ExactPair => has_adjacent_pair(n),
        }
    }
}

/// True if some maximal run of equal digits in `n` has length exactly 2.
/// "444" doesn't count, but "22" next to "111" does.
pub fn has_adjacent_pair(n: u32) -> bool {
    Digits::new(n).dedup_with_count().any(|(run, _)| run == 2)
}

pub fn has_any_adjacent_pair(n: u32) -> bool {
    Digits::new(n).tuple_windows().any(|(lower, higher)| lower == higher)
}

/// True if no digit is greater than the one to its right, i.e. reading from
/// the ones place upward every digit is <= the one before it.
pub fn is_non_increasing(n: u32) -> bool {
    Digits::new(n)
        .tuple_windows()
        .all(|(lower, higher)| higher <= lower)
}

pub fn is_valid(n: u32, rule: AdjacencyRule) -> bool {
    rule.matches(n) && is_non_increasing(n)
}

/// Inclusive range of candidate passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRange {
    start: u32,
    end: u32,
}

impl PasswordRange {
    pub fn new(start: u32, end: u32) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }

        Ok(PasswordRange { start, end })
    }

    pub fn count(&self, rule: AdjacencyRule) -> usize {
        debug!(start = self.start, end = self.end, ?rule, "scanning range");

        let mut ok = 0;
        for i in self.start..=self.end {
            if is_valid(i, rule) {
                ok += 1;
            }
        }

        debug!(count = ok, "scan done");
        ok
    }
}

pub fn count_in_range(start: u32, end: u32, rule: AdjacencyRule) -> Result<usize, RangeError> {
    Ok(PasswordRange::new(start, end)?.count(rule))
}
