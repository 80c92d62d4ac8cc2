//! Defines the `Depth` type and its related constants.


/// Search depth in half-moves.
///
/// A value of this type can be interpreted in two ways:
///
/// *  **Remaining search depth.**
///
///    The remaining search depth tells how many half-moves should be
///    added to the current line of play before a leaf is reached.
///    This number is decreased when a move is tried, and the search
///    routine is called recursively. When it reaches zero the state
///    is evaluated statically.
///
/// *  **Completed search depth.**
///
///    The completed search depth tells to which depth a root state
///    has been analyzed by a finished deepening iteration.
///
/// # Constants:
///
/// * `DEPTH_MAX` is the maximum allowed search depth.
///
/// * `DEPTH_MIN` is the minimum allowed search depth. Iterative
///   deepening always completes at least one iteration at this depth,
///   so that a result exists even for aborted searches.
///
/// Searches are driven at even depths only, so that both players'
/// replies weigh on every completed iteration.
pub type Depth = i16;

pub const DEPTH_MAX: Depth = 254;
pub const DEPTH_MIN: Depth = 2;
