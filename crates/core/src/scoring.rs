//! Scoring module - line clear points, level progression and gravity speed
//!
//! - A clear of `n` rows in one tick is worth `100 * 2^n`.
//! - The level is the number of completed groups of ten cleared lines.
//! - The gravity interval shrinks by a fixed step per level down to a floor.

use crate::types::{BASE_DROP_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_CLEAR_BASE_SCORE, MIN_DROP_MS};

/// Points for clearing `rows` rows at once (0 when nothing was cleared)
pub fn line_clear_score(rows: usize) -> u64 {
    if rows == 0 {
        return 0;
    }
    u32::try_from(rows)
        .ok()
        .and_then(|shift| 1u64.checked_shl(shift))
        .map_or(u64::MAX, |factor| LINE_CLEAR_BASE_SCORE.saturating_mul(factor))
}

/// Level reached after clearing `lines` lines in total
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL
}

/// Gravity interval in milliseconds for `level`
///
/// `1000 - 100 * level`, clamped to [`MIN_DROP_MS`]. From level 10 on this
/// departs from the plain formula, which would give zero or a negative
/// interval (no wait between ticks at all).
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_mul(DROP_STEP_MS))
        .max(MIN_DROP_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score_doubles_per_row() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 200);
        assert_eq!(line_clear_score(2), 400);
        assert_eq!(line_clear_score(3), 800);
        assert_eq!(line_clear_score(4), 1600);
        assert_eq!(line_clear_score(19), 100u64 << 19);
    }

    #[test]
    fn test_line_clear_score_saturates() {
        assert_eq!(line_clear_score(64), u64::MAX);
        assert_eq!(line_clear_score(63), u64::MAX);
        assert_eq!(line_clear_score(1000), u64::MAX);
    }

    #[test]
    fn test_level_for_lines() {
        assert_eq!(level_for_lines(0), 0);
        assert_eq!(level_for_lines(9), 0);
        assert_eq!(level_for_lines(10), 1);
        assert_eq!(level_for_lines(19), 1);
        assert_eq!(level_for_lines(95), 9);
    }

    #[test]
    fn test_drop_interval_decreases_then_floors() {
        assert_eq!(drop_interval_ms(0), 1000);
        assert_eq!(drop_interval_ms(1), 900);
        assert_eq!(drop_interval_ms(5), 500);
        assert_eq!(drop_interval_ms(9), 100);
        // The unclamped formula gives 0 and -100 here.
        assert_eq!(drop_interval_ms(10), 100);
        assert_eq!(drop_interval_ms(11), 100);
        assert_eq!(drop_interval_ms(u32::MAX), 100);

        for level in 0..20 {
            assert!(drop_interval_ms(level + 1) <= drop_interval_ms(level));
        }
    }
}
