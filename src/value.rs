//! Defines the `Value` type and its related constants.


/// Evaluation score for a game state.
///
/// Values are always interpreted relative to a point of view. An
/// *absolute* value is positive when the position favors SOUTH, and
/// negative when it favors NORTH. A *side-to-move* value is positive
/// when the position favors the player that has the move. Multiplying
/// an absolute value by the side-to-move sign converts between the
/// two conventions.
///
/// # Constants:
///
/// * `DRAW_SCORE` is the absolute value of a drawn position.
///
/// * `VALUE_MAX` is the default "infinity" -- no game state may be
///   evaluated to a value greater than or equal to it.
///
/// * `VALUE_MIN` is the symmetric negative of `VALUE_MAX`, so that
///   negating a value never overflows.
pub type Value = i32;

pub const DRAW_SCORE: Value = 0;
pub const VALUE_MAX: Value = ::std::i32::MAX;
pub const VALUE_MIN: Value = -VALUE_MAX;
