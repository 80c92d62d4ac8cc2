//! Defines the `Move` type and its related constants.


/// Encodes a move in a game.
///
/// The encoding is entirely owned by the `Game` implementation -- the
/// framework treats moves as opaque identifiers, only comparing them
/// for equality and against `NULL_MOVE`. Implementations are free to
/// pack origin, destination, and auxiliary data into the available
/// bits however they see fit, as long as two distinct legal moves of
/// the same state never compare equal.
///
/// # Constants:
///
/// * `NULL_MOVE` is a sentinel that no game may use for a real move.
///   It is returned by move enumerators when they are exhausted, and
///   by engines when the root state is already decided.
pub type Move = i32;

pub const NULL_MOVE: Move = -1;
