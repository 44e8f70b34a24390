use crate::settings::{MAX_LEVEL, MIN_LEVEL};
use tables_core::LevelSegment;
use tracing::trace;

/// Select the segment that applies at `level`.
///
/// The level is clamped into the legal range first. Segments are checked in
/// definition order and the first match wins, so overlapping definitions
/// resolve to the earlier one. `None` means "no items at this level".
pub fn select_segment(levels: &[LevelSegment], level: i64) -> Option<&LevelSegment> {
    let clamped = level.clamp(MIN_LEVEL, MAX_LEVEL);
    let segment = levels.iter().find(|segment| segment.contains(clamped));
    if segment.is_none() {
        trace!(level = clamped, "no level segment matches");
    }
    segment
}
