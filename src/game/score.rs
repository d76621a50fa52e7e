//! Round score calculation
//!
//! A win is worth more the fewer attempts it took. Attempts are decremented
//! before evaluation, so a first-try win sees four attempts remaining and
//! earns the maximum five points.

/// Points earned for a winning guess with `attempts_left` attempts remaining.
///
/// | attempts left | points |
/// |---------------|--------|
/// | 4             | 5      |
/// | 3             | 4      |
/// | 2             | 3      |
/// | 1             | 2      |
/// | 0             | 1      |
///
/// Anything outside the playable range yields zero.
#[must_use]
pub const fn calculate_score(attempts_left: i32) -> u32 {
    match attempts_left {
        0..=4 => (attempts_left + 1) as u32,
        _ => 0,
    }
}
