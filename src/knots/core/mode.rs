//! Parameterization mode of a flex-knot.
//!
//! - [`KnotMode`] says whether theta carries a leading node count.
//!
//! Notes
//! -----
//! - The mode is a strategy value passed to the evaluator, geometry helpers,
//!   likelihood, and codec; adaptive behavior is "reduce, then delegate",
//!   never a separate evaluator.

/// How a theta vector is laid out.
///
/// - `Fixed`: `[y0, x1, y1, …, x_(N-2), y_(N-2), y_(N-1)]`
/// - `Adaptive`: `[count, y0, x1, y1, …, x_(Nmax-2), y_(Nmax-2), y_(Nmax-1)]`,
///   where `floor(count)` nodes are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KnotMode {
    /// Every slot of theta is active.
    #[default]
    Fixed,
    /// Leading count selects how many slots are active.
    Adaptive,
}

impl KnotMode {
    /// Map the `adaptive` flag used by the Python-facing API onto a mode.
    pub const fn from_adaptive(adaptive: bool) -> Self {
        if adaptive { KnotMode::Adaptive } else { KnotMode::Fixed }
    }

    /// `true` for [`KnotMode::Adaptive`].
    pub const fn is_adaptive(self) -> bool {
        matches!(self, KnotMode::Adaptive)
    }
}
