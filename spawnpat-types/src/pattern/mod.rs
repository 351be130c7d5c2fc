//! Patterns: stacks of phases.
//!
//! A pattern is stored in stack order. The last stored phase plays next and
//! stored index 0 plays last, so playback is a sequence of O(1) pops from the
//! end. Anything that has phases in authored (playback) order builds the
//! pattern with [`Pattern::from_playback_order`], which appends and then
//! reverses once instead of inserting at the front.

mod codec;
mod phase;

pub use codec::{ParseReport, ParseSkip};
pub use phase::Phase;

use serde::{Deserialize, Serialize};

/// An ordered stack of phases.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pattern {
    phases: Vec<Phase>,
}

impl Pattern {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pattern from phases listed first-to-play first.
    pub fn from_playback_order<I>(phases: I) -> Self
    where
        I: IntoIterator<Item = Phase>,
    {
        let mut phases: Vec<Phase> = phases.into_iter().collect();
        phases.reverse();
        Self { phases }
    }

    /// Build a pattern from phases already in stack order (last plays first).
    pub fn from_stack(phases: Vec<Phase>) -> Self {
        Self { phases }
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Phases in storage order: index 0 is the last to play.
    pub fn as_stack(&self) -> &[Phase] {
        &self.phases
    }

    /// Phases in the order they will fire.
    pub fn playback_order(&self) -> std::iter::Rev<std::slice::Iter<'_, Phase>> {
        self.phases.iter().rev()
    }

    /// The phase that fires next, if any.
    pub fn next_phase(&self) -> Option<&Phase> {
        self.phases.last()
    }

    /// Remove and return the phase that fires next. Playback consumes the
    /// pattern; reload it to play again.
    pub fn pop_next(&mut self) -> Option<Phase> {
        self.phases.pop()
    }

    /// Number of emitters needed to play this pattern: one past the highest
    /// spawn index, or 0 when no phase spawns anything. Saturates at
    /// `usize::MAX`.
    pub fn count_emitters(&self) -> usize {
        self.phases
            .iter()
            .filter_map(Phase::max_spawn)
            .max()
            .map_or(0, |max| max.saturating_add(1))
    }

    /// Sum of all phase intervals, i.e. the time from the first phase firing
    /// until the schedule after the last one would elapse.
    pub fn total_duration(&self) -> f64 {
        self.phases.iter().map(|p| p.time_interval).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_phase() -> Pattern {
        Pattern::from_playback_order(vec![
            Phase::with_spawns(1.0, vec![0, 3]),
            Phase::with_spawns(0.5, vec![1]),
        ])
    }

    #[test]
    fn count_emitters_is_one_past_max() {
        assert_eq!(two_phase().count_emitters(), 4);
    }

    #[test]
    fn count_emitters_empty_is_zero() {
        assert_eq!(Pattern::new().count_emitters(), 0);
        let silent = Pattern::from_playback_order(vec![Phase::new(0.1), Phase::new(0.2)]);
        assert_eq!(silent.count_emitters(), 0);
    }

    #[test]
    fn count_emitters_saturates_at_max_index() {
        let pattern = Pattern::from_playback_order(vec![Phase::with_spawns(1.0, vec![usize::MAX])]);
        assert_eq!(pattern.count_emitters(), usize::MAX);
    }

    #[test]
    fn playback_order_reverses_storage() {
        let pattern = two_phase();
        let stack: Vec<f64> = pattern.as_stack().iter().map(|p| p.time_interval).collect();
        assert_eq!(stack, vec![0.5, 1.0]);
        let order: Vec<f64> = pattern.playback_order().map(|p| p.time_interval).collect();
        assert_eq!(order, vec![1.0, 0.5]);
    }

    #[test]
    fn pop_next_consumes_in_playback_order() {
        let mut pattern = two_phase();
        assert_eq!(pattern.next_phase().map(|p| p.time_interval), Some(1.0));
        assert_eq!(pattern.pop_next(), Some(Phase::with_spawns(1.0, vec![0, 3])));
        assert_eq!(pattern.pop_next(), Some(Phase::with_spawns(0.5, vec![1])));
        assert_eq!(pattern.pop_next(), None);
        assert!(pattern.is_empty());
    }

    #[test]
    fn from_stack_keeps_storage_order() {
        let pattern = Pattern::from_stack(vec![Phase::new(2.0), Phase::new(1.0)]);
        assert_eq!(pattern.next_phase().map(|p| p.time_interval), Some(1.0));
    }

    #[test]
    fn total_duration_sums_intervals() {
        assert!((two_phase().total_duration() - 1.5).abs() < f64::EPSILON);
        assert_eq!(Pattern::new().total_duration(), 0.0);
    }
}
