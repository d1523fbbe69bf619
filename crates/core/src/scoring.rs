//! Scoring module - classic line-clear points and level progression
//!
//! - Points: `LINE_SCORES[min(lines, 4)] * level`, using the level in force
//!   before the clear.
//! - Level: `total_lines / 10 + 1` (levels start at 1).
//! - Gravity: `BASE_DROP_MS / level`.

use crate::types::{BASE_DROP_MS, LINES_PER_LEVEL, LINE_SCORES};

/// Outcome of scoring one lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub points: u32,
    /// Total lines after this lock
    pub lines: u32,
    /// Level after this lock
    pub level: u32,
    pub level_up: bool,
}

/// Calculate line clear points
/// lines: number of lines cleared (more than 4 scores as 4)
/// level: current level (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    LINE_SCORES[lines.min(4)].saturating_mul(level)
}

/// Level reached after clearing `total_lines`
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level in milliseconds
pub fn get_drop_interval_ms(level: u32) -> u32 {
    (BASE_DROP_MS / level.max(1)).max(1)
}

/// Score a lock that cleared `cleared` rows
pub fn calculate_score(cleared: usize, level: u32, total_lines: u32) -> ScoreResult {
    let points = calculate_line_score(cleared, level);
    let lines = total_lines + cleared as u32;
    let new_level = level_for_lines(lines);
    ScoreResult {
        points,
        lines,
        level: new_level,
        level_up: new_level > level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores_at_level_three() {
        assert_eq!(calculate_line_score(1, 3), 120);
        assert_eq!(calculate_line_score(2, 3), 300);
        assert_eq!(calculate_line_score(3, 3), 900);
        assert_eq!(calculate_line_score(4, 3), 3600);
    }

    #[test]
    fn test_no_lines_no_points() {
        assert_eq!(calculate_line_score(0, 5), 0);
    }

    #[test]
    fn test_more_than_four_lines_scores_as_tetris() {
        assert_eq!(calculate_line_score(6, 1), 1200);
    }

    #[test]
    fn test_level_progression() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(25), 3);
    }

    #[test]
    fn test_drop_interval() {
        assert_eq!(get_drop_interval_ms(1), 1000);
        assert_eq!(get_drop_interval_ms(2), 500);
        assert_eq!(get_drop_interval_ms(4), 250);
        assert_eq!(get_drop_interval_ms(0), 1000);
        assert_eq!(get_drop_interval_ms(5000), 1);
    }

    #[test]
    fn test_calculate_score_level_up() {
        let result = calculate_score(2, 1, 9);
        assert_eq!(result.points, 100);
        assert_eq!(result.lines, 11);
        assert_eq!(result.level, 2);
        assert!(result.level_up);

        let result = calculate_score(1, 1, 0);
        assert!(!result.level_up);
        assert_eq!(result.level, 1);
    }
}
