//! Defines search progress reports and their consumers.

use crate::depth::*;
use crate::game::Game;
use crate::moves::*;
use crate::value::*;


/// A progress report from a search.
///
/// Reports are immutable snapshots taken at the root state, after a
/// deepening iteration improved on the previous one and when the
/// search finishes. Consumers receive the report by shared reference
/// and must not attempt to mutate the game through it.
#[derive(Clone, Copy, Debug)]
pub struct Report<'a, G: Game> {
    /// The game at its root state.
    pub game: &'a G,

    /// The best move found so far, from the root state.
    pub best_move: Move,

    /// The score of `best_move`, from the perspective of the player
    /// that is *not* to move at the root.
    pub score: Value,

    /// The depth of the deepest fully completed iteration.
    pub depth: Depth,
}


/// A sink for search progress reports.
///
/// Consumers are plain closures. A consumer that panics is logged and
/// skipped; it cannot corrupt the search.
pub type ReportConsumer<G> = Box<dyn FnMut(&Report<G>)>;


/// Identifies an attached consumer, so that it can be detached later.
///
/// Tokens are unique per engine instance and are never reused.
pub type ConsumerId = usize;
