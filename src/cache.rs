//! Defines types and traits related to transposition tables.

use crate::depth::*;
use crate::game::Game;
use crate::moves::*;
use crate::value::*;


/// `BOUND_EXACT`, `BOUND_LOWER`, `BOUND_UPPER`, or `BOUND_EMPTY`.
///
/// For the majority of game states the score a search computes is a
/// bound rather than an exact value, because alpha-beta pruning cuts
/// lines short as soon as they are proven irrelevant. `BoundType`
/// records the direction of such **known inaccuracies**.
///
/// # Constants:
///
/// * `BOUND_EXACT` means that the stored score is exact for the
///   stored depth.
///
/// * `BOUND_UPPER` marks entries written by a beta cutoff -- the true
///   value is at least the stored score, which becomes an upper bound
///   once negated into the parent node.
///
/// * `BOUND_LOWER` marks entries written by a fail-low node -- the
///   true value is at most the stored score.
///
/// * `BOUND_EMPTY` means that no information is available.
///
/// Note that `BOUND_UPPER`/`BOUND_LOWER` are named from the parent's
/// point of view, which is inverted relative to some textbooks. The
/// probing logic and the storing logic agree on this convention, and
/// any cache shared between engines must preserve it.
pub type BoundType = u8;

pub const BOUND_EMPTY: BoundType = 0;
pub const BOUND_LOWER: BoundType = 0b01;
pub const BOUND_UPPER: BoundType = 0b10;
pub const BOUND_EXACT: BoundType = BOUND_LOWER | BOUND_UPPER;


/// A trait for transposition tables.
///
/// Game engines, during their brute-force search, encounter the same
/// states again and again, but from different sequences of moves,
/// which is called a "transposition". When the search encounters a
/// transposition, it is beneficial to "remember" what was determined
/// last time the state was examined, rather than redoing the entire
/// work. A transposition table stores the score of the state, how
/// deeply it was searched, the direction of the score's inaccuracy,
/// and the best move that was found.
///
/// Lookups follow a find-then-read protocol: `find` locates the entry
/// for a state and stages it, and the getters read the staged entry.
/// To implement your own transposition table, you must define a type
/// that implements the `Cache` trait.
pub trait Cache<G: Game> {
    /// Returns the number of entries the cache can hold.
    fn size(&self) -> usize;

    /// Locates and stages the entry for a game state.
    ///
    /// Returns `true` if an entry was found. The staged entry remains
    /// readable through the getters until the next call to `find`.
    fn find(&mut self, game: &G) -> bool;

    /// Returns the score of the staged entry.
    fn score(&self) -> Value;

    /// Returns the best move of the staged entry, or `NULL_MOVE` if
    /// no move is available.
    fn best_move(&self) -> Move;

    /// Returns the search depth of the staged entry.
    fn depth(&self) -> Depth;

    /// Returns the accuracy of the staged entry's score.
    fn flag(&self) -> BoundType;

    /// Stores an entry for a game state.
    ///
    /// After being stored, the entry can be retrieved by `find`. This
    /// is not guaranteed though, because the entry might have been
    /// evicted in the meantime.
    fn store(&mut self, game: &G, score: Value, m: Move, depth: Depth, flag: BoundType);

    /// Signals that a new search is about to begin, so that the cache
    /// can age its entries.
    fn discharge(&mut self);

    /// Resizes the cache to use at most `memory` bytes.
    fn resize(&mut self, memory: usize);

    /// Removes all entries from the cache.
    fn clear(&mut self);
}
