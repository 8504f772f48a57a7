use std::collections::VecDeque;

use crate::env::RngOracle;

/// Scripted RNG: yields the given raw values in order and counts draws.
///
/// Panics on an unscripted draw so tests notice unexpected RNG use.
pub(crate) struct SequenceRng {
    values: VecDeque<u32>,
    draws: usize,
}

impl SequenceRng {
    pub(crate) fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            draws: 0,
        }
    }

    /// A generator that must never be drawn from.
    pub(crate) fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub(crate) fn draws(&self) -> usize {
        self.draws
    }
}

impl RngOracle for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.values
            .pop_front()
            .unwrap_or_else(|| panic!("unscripted RNG draw #{}", self.draws))
    }
}
