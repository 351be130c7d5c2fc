//! Editor grid state.
//!
//! A `phases x emitters` matrix of check states plus one time interval shared
//! by every phase the grid produces. Row `y` is a phase (row 0 plays first),
//! column `x` is an emitter.

use serde::{Deserialize, Serialize};

use super::settings::{EditorSettings, MAX_EMITTERS};
use crate::pattern::{Pattern, Phase};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorGrid {
    phases: usize,
    emitters: usize,
    time_interval: f64,
    cells: Vec<Vec<bool>>, // [phases][emitters]
}

impl EditorGrid {
    /// `emitters` is clamped to [`MAX_EMITTERS`].
    pub fn new(phases: usize, emitters: usize, time_interval: f64) -> Self {
        let emitters = emitters.min(MAX_EMITTERS);
        Self {
            phases,
            emitters,
            time_interval,
            cells: blank_cells(phases, emitters),
        }
    }

    pub fn from_settings(settings: &EditorSettings) -> Self {
        Self::new(settings.phases, settings.emitters, settings.time_interval)
    }

    pub fn phases(&self) -> usize {
        self.phases
    }

    pub fn emitters(&self) -> usize {
        self.emitters
    }

    pub fn time_interval(&self) -> f64 {
        self.time_interval
    }

    /// Set the interval shared by every phase. Negative or non-finite values
    /// are ignored; returns whether the value was applied.
    pub fn set_time_interval(&mut self, time_interval: f64) -> bool {
        if !time_interval.is_finite() || time_interval < 0.0 {
            return false;
        }
        self.time_interval = time_interval;
        true
    }

    /// Check state at emitter `x`, phase `y`. False outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> bool {
        self.cells
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    /// Set the cell at emitter `x`, phase `y`. Out-of-range coordinates are
    /// ignored.
    pub fn set_cell(&mut self, x: usize, y: usize, checked: bool) {
        if let Some(cell) = self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = checked;
        }
    }

    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        if let Some(cell) = self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = !*cell;
        }
    }

    pub fn row(&self, y: usize) -> Option<&[bool]> {
        self.cells.get(y).map(Vec::as_slice)
    }

    pub fn checked_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c).count()
    }

    /// Rebuild the grid at new dimensions.
    ///
    /// Destructive: if either dimension changes, every cell comes back
    /// unchecked. Same dimensions leave the grid untouched. `emitters` is
    /// clamped to [`MAX_EMITTERS`].
    pub fn resize(&mut self, phases: usize, emitters: usize) {
        let emitters = emitters.min(MAX_EMITTERS);
        if phases == self.phases && emitters == self.emitters {
            return;
        }
        self.phases = phases;
        self.emitters = emitters;
        self.cells = blank_cells(phases, emitters);
    }

    /// Change the phase count. Clears the grid if the count changes.
    pub fn set_phase_count(&mut self, phases: usize) {
        self.resize(phases, self.emitters);
    }

    /// Change the emitter count. Clears the grid if the count changes.
    pub fn set_emitter_count(&mut self, emitters: usize) {
        self.resize(self.phases, emitters);
    }

    /// Uncheck every cell, keeping the dimensions.
    pub fn reset_all(&mut self) {
        for row in &mut self.cells {
            row.fill(false);
        }
    }

    /// Build the pattern this grid describes. Row 0 plays first.
    pub fn to_pattern(&self) -> Pattern {
        Pattern::from_playback_order(self.cells.iter().map(|row| {
            let spawns = row
                .iter()
                .enumerate()
                .filter(|(_, &checked)| checked)
                .map(|(x, _)| x)
                .collect();
            Phase::with_spawns(self.time_interval, spawns)
        }))
    }

    /// Replace the grid contents with `pattern`.
    ///
    /// The grid is sized to the pattern, the shared interval comes from the
    /// first phase to play, and each phase's spawns are checked on its row.
    /// Any previous check state is discarded, even when the size is unchanged.
    ///
    /// A first interval that [`set_time_interval`](Self::set_time_interval)
    /// rejects (negative or non-finite, only possible for patterns built
    /// without the parser) leaves the current interval in place. Returns
    /// whether the interval was taken from the pattern.
    pub fn load_from(&mut self, pattern: &Pattern) -> bool {
        self.resize(pattern.len(), pattern.count_emitters());
        self.reset_all();

        let interval_applied = pattern
            .next_phase()
            .is_some_and(|first| self.set_time_interval(first.time_interval));

        for (y, phase) in pattern.playback_order().enumerate() {
            for &x in &phase.spawn_positions {
                self.set_cell(x, y, true);
            }
        }
        interval_applied
    }
}

impl Default for EditorGrid {
    fn default() -> Self {
        Self::from_settings(&EditorSettings::default())
    }
}

fn blank_cells(phases: usize, emitters: usize) -> Vec<Vec<bool>> {
    vec![vec![false; emitters]; phases]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_matches_settings() {
        let grid = EditorGrid::default();
        assert_eq!(grid.phases(), 10);
        assert_eq!(grid.emitters(), 5);
        assert_eq!(grid.time_interval(), 0.1);
        assert_eq!(grid.checked_count(), 0);
    }

    #[test]
    fn set_cell_out_of_range_is_ignored() {
        let mut grid = EditorGrid::new(2, 3, 0.1);
        grid.set_cell(3, 0, true);
        grid.set_cell(0, 2, true);
        grid.toggle_cell(9, 9);
        assert_eq!(grid.checked_count(), 0);
        assert!(!grid.cell(3, 0));
    }

    #[test]
    fn toggle_cell_flips() {
        let mut grid = EditorGrid::new(2, 3, 0.1);
        grid.toggle_cell(1, 1);
        assert!(grid.cell(1, 1));
        grid.toggle_cell(1, 1);
        assert!(!grid.cell(1, 1));
    }

    #[test]
    fn resize_clears_cells() {
        let mut grid = EditorGrid::new(2, 3, 0.1);
        grid.set_cell(0, 0, true);
        grid.set_cell(2, 1, true);
        grid.resize(3, 3);
        assert_eq!(grid.phases(), 3);
        assert_eq!(grid.checked_count(), 0);
        assert_eq!(grid.row(2).map(<[bool]>::len), Some(3));
    }

    #[test]
    fn resize_same_dimensions_keeps_cells() {
        let mut grid = EditorGrid::new(2, 3, 0.1);
        grid.set_cell(2, 1, true);
        grid.resize(2, 3);
        assert!(grid.cell(2, 1));
        grid.set_phase_count(2);
        grid.set_emitter_count(3);
        assert!(grid.cell(2, 1));
    }

    #[test]
    fn single_dimension_setters_rebuild() {
        let mut grid = EditorGrid::new(2, 3, 0.1);
        grid.set_cell(0, 0, true);
        grid.set_emitter_count(4);
        assert_eq!(grid.emitters(), 4);
        assert_eq!(grid.checked_count(), 0);
        grid.set_cell(3, 1, true);
        grid.set_phase_count(1);
        assert_eq!(grid.phases(), 1);
        assert_eq!(grid.checked_count(), 0);
    }

    #[test]
    fn reset_all_keeps_dimensions() {
        let mut grid = EditorGrid::new(2, 3, 0.1);
        grid.set_cell(1, 0, true);
        grid.reset_all();
        assert_eq!((grid.phases(), grid.emitters()), (2, 3));
        assert_eq!(grid.checked_count(), 0);
    }

    #[test]
    fn set_time_interval_rejects_invalid() {
        let mut grid = EditorGrid::new(1, 1, 0.1);
        assert!(!grid.set_time_interval(-0.5));
        assert!(!grid.set_time_interval(f64::NAN));
        assert!(grid.set_time_interval(0.0));
        assert_eq!(grid.time_interval(), 0.0);
    }

    #[test]
    fn fresh_grid_to_pattern_has_empty_phases() {
        let mut grid = EditorGrid::new(10, 5, 0.2);
        grid.resize(2, 3);
        let pattern = grid.to_pattern();
        assert_eq!(pattern.len(), 2);
        for phase in pattern.playback_order() {
            assert_eq!(phase.time_interval, 0.2);
            assert!(phase.spawn_positions.is_empty());
        }
    }

    #[test]
    fn to_pattern_plays_top_row_first() {
        let mut grid = EditorGrid::new(3, 4, 0.5);
        grid.set_cell(0, 0, true);
        grid.set_cell(3, 0, true);
        grid.set_cell(2, 2, true);
        let mut pattern = grid.to_pattern();
        assert_eq!(pattern.pop_next(), Some(Phase::with_spawns(0.5, vec![0, 3])));
        assert_eq!(pattern.pop_next(), Some(Phase::with_spawns(0.5, vec![])));
        assert_eq!(pattern.pop_next(), Some(Phase::with_spawns(0.5, vec![2])));
    }

    #[test]
    fn load_from_sizes_and_checks() {
        let pattern = Pattern::parse("0.3:0:2|0.3|0.3:1");
        let mut grid = EditorGrid::default();
        grid.load_from(&pattern);
        assert_eq!((grid.phases(), grid.emitters()), (3, 3));
        assert_eq!(grid.time_interval(), 0.3);
        assert_eq!(grid.row(0), Some(&[true, false, true][..]));
        assert_eq!(grid.row(1), Some(&[false, false, false][..]));
        assert_eq!(grid.row(2), Some(&[false, true, false][..]));
    }

    #[test]
    fn load_from_clears_stale_checks_at_same_size() {
        let mut grid = EditorGrid::new(2, 2, 0.1);
        grid.set_cell(0, 1, true);
        grid.load_from(&Pattern::parse("0.1:1|0.1:0"));
        assert!(!grid.cell(0, 0));
        assert!(grid.cell(1, 0));
        assert!(grid.cell(0, 1));
        assert_eq!(grid.checked_count(), 2);
    }

    #[test]
    fn load_from_then_to_pattern_round_trips_uniform_interval() {
        let pattern = Pattern::parse("0.25:0:4|0.25:2|0.25:1:3");
        let mut grid = EditorGrid::default();
        grid.load_from(&pattern);
        assert_eq!(grid.to_pattern(), pattern);
    }

    #[test]
    fn emitter_count_is_clamped() {
        let mut grid = EditorGrid::new(2, usize::MAX, 0.1);
        assert_eq!(grid.emitters(), MAX_EMITTERS);
        grid.resize(1, 3);
        grid.set_emitter_count(MAX_EMITTERS + 1);
        assert_eq!(grid.emitters(), MAX_EMITTERS);
        assert_eq!(grid.row(0).map(<[bool]>::len), Some(MAX_EMITTERS));
    }

    #[test]
    fn load_from_out_of_range_spawn_keeps_grid_bounded() {
        let pattern = Pattern::from_stack(vec![Phase::with_spawns(0.2, vec![0, usize::MAX])]);
        let mut grid = EditorGrid::default();
        assert!(grid.load_from(&pattern));
        assert_eq!(grid.emitters(), MAX_EMITTERS);
        assert!(grid.cell(0, 0));
        assert_eq!(grid.checked_count(), 1);
    }

    #[test]
    fn load_from_keeps_interval_it_cannot_use() {
        let pattern = Pattern::from_stack(vec![Phase::with_spawns(-1.0, vec![1])]);
        let mut grid = EditorGrid::new(2, 2, 0.3);
        assert!(!grid.load_from(&pattern));
        assert_eq!(grid.time_interval(), 0.3);
        assert!(grid.cell(1, 0));
    }

    #[test]
    fn load_from_empty_pattern_gives_empty_grid() {
        let mut grid = EditorGrid::default();
        assert!(!grid.load_from(&Pattern::new()));
        assert_eq!((grid.phases(), grid.emitters()), (0, 0));
        assert_eq!(grid.time_interval(), 0.1);
        assert!(grid.to_pattern().is_empty());
    }
}
