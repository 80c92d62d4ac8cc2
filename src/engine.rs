//! Defines the `Engine` trait.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::depth::*;
use crate::errors::Result;
use crate::game::Game;
use crate::moves::*;
use crate::report::{ConsumerId, ReportConsumer};
use crate::value::*;


/// The default maximum time for a move computation, in milliseconds.
pub const DEFAULT_MOVETIME: u64 = 3600;

/// The score in a report is exact.
pub const SCORE_EXACT: u8 = 0;

/// The score in a report may be heuristic.
///
/// Reserved for consumers that relay scores to an outer protocol; the
/// search core itself never produces this value.
pub const SCORE_FUZZY: u8 = 1;


/// A trait for move computation engines.
///
/// An engine computes, within configurable depth and time bounds, the
/// strongest move for the current state of a game. Engines own their
/// configuration and report search progress to attached consumers;
/// the game rules, the transposition table, and the endgame database
/// are capabilities supplied from outside.
///
/// A single engine runs a single computation at a time. All methods
/// that take `&mut self` are thereby serialized with an in-flight
/// search by the borrow rules; the one operation that must reach a
/// *running* search -- aborting it -- goes through a shared flag
/// instead (see `abort_computation` and [`AbortHandle`]).
pub trait Engine<G: Game> {
    /// Returns the maximum depth allowed for a search.
    fn depth(&self) -> Depth;

    /// Returns the maximum time allowed for a move computation, in
    /// milliseconds.
    fn move_time(&self) -> u64;

    /// Returns the score the engine assigns to drawn states.
    fn contempt(&self) -> Value;

    /// Returns the current infinity score of the engine.
    fn infinity(&self) -> Value;

    /// Returns the depth of the last fully completed deepening
    /// iteration.
    fn score_depth(&self) -> Depth;

    /// Sets the maximum depth for subsequent computations.
    ///
    /// The depth is clamped into `[DEPTH_MIN, DEPTH_MAX]` and rounded
    /// up to the next even number, so that both players' replies are
    /// weighed by every completed iteration. An odd maximum would
    /// asymmetrically bias the root score.
    fn set_depth(&mut self, depth: Depth);

    /// Sets the maximum time for subsequent computations, in
    /// milliseconds.
    ///
    /// Fails with `Error::InvalidArgument` if `delay` is zero.
    fn set_move_time(&mut self, delay: u64) -> Result<()>;

    /// Sets the contempt factor. That is the score to which drawn
    /// states will be evaluated.
    fn set_contempt(&mut self, score: Value);

    /// Sets the infinity score. Setting this value to the maximum
    /// score a game object can possibly be evaluated to improves the
    /// engine performance by producing more cutoffs.
    ///
    /// Fails with `Error::InvalidArgument` if `score` is not
    /// positive.
    fn set_infinity(&mut self, score: Value) -> Result<()>;

    /// Attaches a consumer of progress reports, returning a token
    /// that identifies it.
    fn attach_consumer(&mut self, consumer: ReportConsumer<G>) -> ConsumerId;

    /// Detaches a previously attached consumer.
    ///
    /// Unknown tokens are ignored.
    fn detach_consumer(&mut self, consumer_id: ConsumerId);

    /// Tells the engine that the next states are going to be from a
    /// different match.
    fn new_match(&mut self);

    /// Requests that the current computation terminates.
    ///
    /// The running search unwinds cooperatively and returns the best
    /// result of its last fully completed iteration. The request flag
    /// is cleared by the search itself, so the engine is always found
    /// un-aborted at rest.
    fn abort_computation(&self);

    /// Computes a best move for the current state of a game.
    ///
    /// The search is performed on the provided game object, so the
    /// game object will change during the computation and its
    /// capacity may be increased. The game is restored to its current
    /// state before the method returns. The provided game object must
    /// not be manipulated by the caller while a computation is
    /// ongoing.
    ///
    /// Returns the best move found, or `NULL_MOVE` if the game has
    /// already ended on the given state.
    fn compute_best_move(&mut self, game: &mut G) -> Move;

    /// Computes a best move for the current state of a game and
    /// returns its score. A positive score means an advantage for the
    /// player to move.
    fn compute_best_score(&mut self, game: &mut G) -> Value;

    /// Returns the move the engine would expect the opponent to
    /// ponder on for the current state of a game, or `NULL_MOVE` if
    /// no reliable move is known.
    fn ponder_move(&mut self, game: &G) -> Move;
}


/// Requests termination of an ongoing computation from another
/// thread.
///
/// A running search holds an exclusive borrow of its engine, so no
/// other thread can reach `abort_computation` while it runs. An
/// `AbortHandle` is a cloneable stand-in: it shares the engine's
/// abort flag and may be triggered from anywhere at any time.
/// Triggering it while no search is running has no lasting effect --
/// the next search starts with a fresh flag.
#[derive(Clone)]
pub struct AbortHandle {
    aborted: Arc<AtomicBool>,
}

impl AbortHandle {
    /// Creates a new handle around a shared abort flag.
    pub(crate) fn new(aborted: Arc<AtomicBool>) -> AbortHandle {
        AbortHandle { aborted: aborted }
    }

    /// Requests that the current computation terminates.
    pub fn abort(&self) {
        self.aborted.store(true, Ordering::Relaxed);
    }
}
