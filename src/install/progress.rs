use crate::constants::bar::{BACKSPACE, EMPTY, FILLED};

/// Quantized progress level and whether it moved since the last render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressBarState {
    /// Number of filled cells, in `0..=bar_length`.
    pub done: usize,
    /// Set when `done` differs from the previously rendered level.
    pub redraw: bool,
}

/// Text fragments needed to redraw the bar in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarTexts {
    /// Backspaces retracting the previously drawn bar.
    pub erase: String,
    pub filled: String,
    pub empty: String,
}

/// Computes the bar level for `finished` out of `total` dependencies.
///
/// The level is `barLength * finished / total` rounded half up, so it never
/// decreases while `finished` grows. `total` must be non-zero.
pub fn calculate_state(
    bar_length: usize,
    previous: usize,
    finished: usize,
    total: usize,
) -> ProgressBarState {
    debug_assert!(total > 0, "progress requires at least one dependency");
    let finished = finished.min(total);
    // floor(x + 1/2) in integers: (2 * b * f + t) / (2 * t)
    let current = (2 * bar_length * finished + total) / (2 * total);

    ProgressBarState { done: current, redraw: current != previous }
}

/// Builds the erase, filled and empty fragments of a bar `done` cells full.
pub fn build_bar_texts(bar_length: usize, done: usize) -> BarTexts {
    debug_assert!(done <= bar_length, "bar level {done} exceeds length {bar_length}");
    let done = done.min(bar_length);

    BarTexts {
        erase: BACKSPACE.to_string().repeat(bar_length),
        filled: FILLED.to_string().repeat(done),
        empty: EMPTY.to_string().repeat(bar_length - done),
    }
}
