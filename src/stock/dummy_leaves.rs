//! Implements `DummyLeaves`.

use crate::cache::{BoundType, BOUND_EMPTY};
use crate::game::Game;
use crate::leaves::Leaves;
use crate::value::*;


/// Implements an endgame database that does not contain any entries.
///
/// Installing an instance of this type removes the need for a "no
/// database" branch on every node of the search.
pub struct DummyLeaves;

impl DummyLeaves {
    /// Creates a new instance.
    pub fn new() -> DummyLeaves {
        DummyLeaves
    }
}

impl<G: Game> Leaves<G> for DummyLeaves {
    /// Returns `false`.
    #[inline]
    fn find(&mut self, _: &G) -> bool {
        false
    }

    /// Returns `DRAW_SCORE`.
    #[inline]
    fn score(&self) -> Value {
        DRAW_SCORE
    }

    /// Returns `BOUND_EMPTY`.
    #[inline]
    fn flag(&self) -> BoundType {
        BOUND_EMPTY
    }
}
