//! Implements `DummyCache`.

use crate::cache::*;
use crate::depth::*;
use crate::game::Game;
use crate::moves::*;
use crate::value::*;


/// Implements a transposition table that never stores or returns any
/// entries.
///
/// Installing an instance of this type removes the need for a "no
/// cache" branch on every node of the search.
pub struct DummyCache;

impl DummyCache {
    /// Creates a new instance.
    pub fn new() -> DummyCache {
        DummyCache
    }
}

impl<G: Game> Cache<G> for DummyCache {
    /// Returns `0`.
    fn size(&self) -> usize {
        0
    }

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

    /// Returns `NULL_MOVE`.
    #[inline]
    fn best_move(&self) -> Move {
        NULL_MOVE
    }

    /// Returns `0`.
    #[inline]
    fn depth(&self) -> Depth {
        0
    }

    /// Returns `BOUND_EMPTY`.
    #[inline]
    fn flag(&self) -> BoundType {
        BOUND_EMPTY
    }

    /// Does nothing.
    #[inline]
    fn store(&mut self, _: &G, _: Value, _: Move, _: Depth, _: BoundType) {}

    /// Does nothing.
    fn discharge(&mut self) {}

    /// Does nothing.
    fn resize(&mut self, _: usize) {}

    /// Does nothing.
    fn clear(&mut self) {}
}
