//! Defines the `Leaves` trait.

use crate::cache::BoundType;
use crate::game::Game;
use crate::value::*;


/// A trait for endgame databases.
///
/// Many games can be solved exactly once few enough pieces remain on
/// the board. An endgame database holds precomputed final scores for
/// such states. The search consults the database before evaluating a
/// state heuristically, turning the corresponding subtrees into exact
/// leaves.
///
/// Lookups follow the same find-then-read protocol as `Cache`: `find`
/// stages the entry for a state and the getters read it.
pub trait Leaves<G: Game> {
    /// Locates and stages the entry for a game state.
    ///
    /// Returns `true` if the state is resolved by the database.
    fn find(&mut self, game: &G) -> bool;

    /// Returns the absolute score of the staged entry.
    ///
    /// The result is `DRAW_SCORE` if and only if the state is a
    /// proven draw.
    fn score(&self) -> Value;

    /// Returns the accuracy of the staged entry's score.
    fn flag(&self) -> BoundType;
}
