//! Defines the `Game` trait.

use crate::moves::*;
use crate::value::*;


/// `SOUTH` or `NORTH`.
///
/// The player to move is encoded as a sign multiplier: `SOUTH` is
/// `+1` and `NORTH` is `-1`. Multiplying an absolute score by the
/// turn converts it to the side-to-move perspective, and multiplying
/// it again converts it back. This makes negamax bookkeeping a matter
/// of plain integer arithmetic.
pub type Turn = i32;

pub const SOUTH: Turn = 1;
pub const NORTH: Turn = -1;


/// A trait for mutable game states.
///
/// A game object encapsulates the rules of a two-player, zero-sum,
/// perfect-information game: which moves are legal, when the game is
/// over, who won, and how promising a state looks. Search engines
/// drive the game object up and down the tree of possible lines of
/// play with `make_move` and `unmake_move`, and never inspect the
/// board themselves. To plug your game into the framework, you must
/// define a type that implements the `Game` trait.
///
/// Game objects keep a stack of performed moves. `make_move` pushes a
/// move on the stack, `unmake_move` pops the most recent one and
/// restores the previous state exactly. The engine guarantees that
/// every `make_move` it performs is matched by an `unmake_move`
/// before the search returns.
///
/// Move enumeration is stateful: `next_move` returns a different
/// legal move on each call until it returns `NULL_MOVE`, and the
/// enumeration cursor must be maintained *per ply*, so that an
/// enumeration in progress is not disturbed by deeper `make_move` /
/// `unmake_move` pairs.
pub trait Game {
    /// Returns the number of half-moves played from the start state.
    fn length(&self) -> usize;

    /// Returns the player to move.
    fn turn(&self) -> Turn;

    /// Returns a stable fingerprint of the current state.
    ///
    /// Two equal states must return equal hashes. Distinct states
    /// should return distinct hashes with overwhelming probability --
    /// rare collisions are tolerated by the framework. See
    /// `utils::ZobristArrays` for a way to implement this.
    fn hash(&self) -> u64;

    /// Returns `true` if the current state is terminal.
    fn has_ended(&self) -> bool;

    /// Returns the final absolute score of a terminal state.
    ///
    /// The result is `DRAW_SCORE` if and only if the game is drawn.
    /// A win is reported with the winning side's sign and a magnitude
    /// of `infinity()`.
    fn outcome(&self) -> Value;

    /// Returns a heuristic absolute score of the current state.
    ///
    /// The magnitude of the returned value must be smaller than
    /// `infinity()`.
    fn score(&self) -> Value;

    /// Returns the recommended score for drawn states.
    fn contempt(&self) -> Value {
        DRAW_SCORE
    }

    /// Returns the maximum absolute score this game evaluates to.
    ///
    /// Feeding this value to an engine's `set_infinity` tightens its
    /// pruning windows.
    fn infinity(&self) -> Value;

    /// Plays a move on the current state.
    ///
    /// The move must be legal for the current state.
    fn make_move(&mut self, m: Move);

    /// Takes back the most recently played move.
    ///
    /// Calling this method without a matching `make_move` is a
    /// programming error.
    fn unmake_move(&mut self);

    /// Returns the next legal move of the current state, or
    /// `NULL_MOVE` when the enumeration is exhausted.
    fn next_move(&mut self) -> Move;

    /// Returns the enumeration cursor for the current state.
    fn cursor(&self) -> Move;

    /// Restores a previously obtained enumeration cursor.
    fn set_cursor(&mut self, cursor: Move);

    /// Rewinds the enumeration cursor for the current state.
    fn reset_cursor(&mut self);

    /// Grows the internal move stack so that it can hold at least
    /// `size` half-moves.
    fn ensure_capacity(&mut self, size: usize);

    /// Returns all legal moves of the current state.
    ///
    /// The default implementation drains `next_move` and then puts
    /// the enumeration cursor back where it was, so that an
    /// enumeration in progress is not disturbed.
    fn legal_moves(&mut self) -> Vec<Move> {
        let cursor = self.cursor();
        let mut moves = Vec::new();
        self.reset_cursor();
        loop {
            let m = self.next_move();
            if m == NULL_MOVE {
                break;
            }
            moves.push(m);
        }
        self.set_cursor(cursor);
        moves
    }
}
