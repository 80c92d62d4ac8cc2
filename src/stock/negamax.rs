//! Implements `Negamax`.

use std::cmp::min;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cache::*;
use crate::depth::*;
use crate::engine::*;
use crate::errors::{Error, Result};
use crate::game::Game;
use crate::leaves::Leaves;
use crate::moves::*;
use crate::report::{ConsumerId, Report, ReportConsumer};
use crate::stock::{DummyCache, DummyLeaves};
use crate::utils::Timer;
use crate::value::*;


/// Implements the `Engine` trait with a negamax search.
///
/// The engine searches by iterative deepening: a full-width
/// alpha-beta search is executed at depth two, then the depth is
/// incremented by two and the search is executed again, until the
/// maximum depth is reached or the allotted time runs out. The
/// earlier iterations are cheap and seed the transposition table, so
/// that the later iterations try the most promising moves first; and
/// in case of a terminated search, the engine can always fall back to
/// the move selected in the last fully completed iteration.
///
/// Within an iteration, each node consults the endgame database and
/// the transposition table before expanding, tries the best move
/// remembered by the table first, and stores what it concluded on the
/// way out. The root keeps a shrinking upper window instead: every
/// root move is searched with the full lower bound, and the window
/// tightens as better moves are found.
///
/// The transposition table and the endgame database are injected
/// capabilities and default to null objects, so an engine works out
/// of the box for any game.
///
/// # Example
///
/// ```rust,ignore
/// let mut engine: Negamax<MyGame> = Negamax::new();
/// engine.set_cache(Some(Box::new(StdCache::new(Some(32)))));
/// engine.set_move_time(1000)?;
/// engine.set_infinity(MyGame::MAX_SCORE)?;
/// let m = engine.compute_best_move(&mut game);
/// ```
pub struct Negamax<G: Game> {
    /// The transposition table.
    cache: Box<dyn Cache<G>>,

    /// The endgame database.
    leaves: Box<dyn Leaves<G>>,

    /// The attached consumers of progress reports.
    consumers: Vec<(ConsumerId, ReportConsumer<G>)>,

    /// The token for the next attached consumer.
    next_consumer: ConsumerId,

    /// Schedules the countdown that bounds a computation in time.
    timer: Timer,

    /// The maximum depth allowed for the current search.
    max_depth: Depth,

    /// The maximum time allowed for the current search, in
    /// milliseconds.
    move_time: u64,

    /// The maximum possible score value.
    max_score: Value,

    /// The minimum possible score value.
    min_score: Value,

    /// Contempt factor used to evaluate draws.
    contempt: Value,

    /// Holds the best score found so far.
    best_score: Value,

    /// Depth of the last completed search iteration.
    score_depth: Depth,

    /// This flag is raised to abort a computation.
    aborted: Arc<AtomicBool>,
}

impl<G: Game> Negamax<G> {
    /// Creates a new instance with default settings and null-object
    /// capabilities.
    pub fn new() -> Negamax<G> {
        Negamax {
            cache: Box::new(DummyCache::new()),
            leaves: Box::new(DummyLeaves::new()),
            consumers: Vec::new(),
            next_consumer: 0,
            timer: Timer::new(),
            max_depth: DEPTH_MAX,
            move_time: DEFAULT_MOVETIME,
            max_score: VALUE_MAX,
            min_score: VALUE_MIN,
            contempt: DRAW_SCORE,
            best_score: VALUE_MAX,
            score_depth: 0,
            aborted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Sets the transposition table to use.
    ///
    /// Passing `None` installs a table that stores nothing.
    pub fn set_cache(&mut self, cache: Option<Box<dyn Cache<G>>>) {
        self.cache = cache.unwrap_or_else(|| Box::new(DummyCache::new()));
    }

    /// Sets the endgame database to use.
    ///
    /// Passing `None` installs a database that resolves nothing.
    pub fn set_leaves(&mut self, leaves: Option<Box<dyn Leaves<G>>>) {
        self.leaves = leaves.unwrap_or_else(|| Box::new(DummyLeaves::new()));
    }

    /// Returns a handle that can abort this engine's computations
    /// from another thread.
    pub fn abort_handle(&self) -> AbortHandle {
        AbortHandle::new(self.aborted.clone())
    }

    /// Returns `true` if an abort request is pending.
    ///
    /// The read is relaxed: finishing a few extra nodes after the
    /// request was issued is acceptable.
    #[inline]
    fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::Relaxed)
    }

    /// Performs a recursive search for a best move.
    ///
    /// `alpha` and `beta` together give the window within which an as
    /// precise as possible score is required. If the exact score
    /// falls outside the window, a value on its correct side is
    /// returned instead. `depth` defines the maximum number of
    /// recursive calls that can be made for the node. The returned
    /// score is from the perspective of the player to move at the
    /// node.
    fn search(&mut self, game: &mut G, mut alpha: Value, beta: Value, depth: Depth) -> Value {
        // Let the shallowest nodes finish after an abort, so that at
        // least a complete minimum-depth result always exists.
        if self.is_aborted() && depth > DEPTH_MIN {
            return self.min_score;
        }

        // Return the utility score of the node.
        if game.has_ended() {
            let score = game.outcome();
            return if score == DRAW_SCORE {
                self.contempt * game.turn()
            } else {
                score * game.turn()
            };
        }

        // Return an endgame score if possible.
        if self.leaves.find(game) {
            let score = self.leaves.score();
            return if score == DRAW_SCORE {
                self.contempt * game.turn()
            } else {
                score * game.turn()
            };
        }

        // Return the heuristic score of the node.
        if depth == 0 {
            return game.score() * game.turn();
        }

        // Transposition table lookup. Probing the pre-frontier nodes
        // costs more than it saves.
        let mut hash_move = NULL_MOVE;

        if depth > 2 && self.cache.find(game) {
            if self.cache.depth() >= depth {
                match self.cache.flag() {
                    BOUND_UPPER => {
                        if self.cache.score() >= beta {
                            return beta;
                        }
                    }
                    BOUND_LOWER => {
                        if self.cache.score() <= alpha {
                            return alpha;
                        }
                    }
                    BOUND_EXACT => {
                        return self.cache.score();
                    }
                    _ => (),
                }
            }
            hash_move = self.cache.best_move();
        }

        let mut score;
        let mut flag = BOUND_LOWER;

        // Try the remembered best move first. It is the most likely
        // to produce the cutoff without enumerating its siblings.
        if hash_move != NULL_MOVE {
            game.make_move(hash_move);
            score = -self.search(game, -beta, -alpha, depth - 1);
            game.unmake_move();

            if score >= beta && !self.is_aborted() {
                self.cache.store(game, score, hash_move, depth, BOUND_UPPER);
                return beta;
            }

            if score > alpha {
                alpha = score;
                flag = BOUND_EXACT;
            }
        }

        // Iterate through the generated moves.
        loop {
            let m = game.next_move();
            if m == NULL_MOVE {
                break;
            }
            if m == hash_move {
                continue;
            }

            game.make_move(m);
            score = -self.search(game, -beta, -alpha, depth - 1);
            game.unmake_move();

            if score >= beta {
                alpha = beta;
                hash_move = m;
                flag = BOUND_UPPER;
                break;
            }

            if score > alpha {
                alpha = score;
                hash_move = m;
                flag = BOUND_EXACT;
            }
        }

        // Store the conclusion, ignoring pre-frontier subtrees and
        // scores polluted by an abort.
        if depth > 2 && !self.is_aborted() {
            self.cache.store(game, alpha, hash_move, depth, flag);
        }

        alpha
    }

    /// Creates a report of the current search results and delivers it
    /// to every attached consumer.
    ///
    /// A panicking consumer is logged and skipped.
    fn invoke_consumers(&mut self, game: &G, best_move: Move) {
        let report = Report {
            game: game,
            best_move: best_move,
            score: self.best_score,
            depth: self.score_depth,
        };
        for &mut (id, ref mut consumer) in self.consumers.iter_mut() {
            if panic::catch_unwind(AssertUnwindSafe(|| consumer(&report))).is_err() {
                warn!("report consumer {} panicked", id);
            }
        }
    }
}

impl<G: Game> Engine<G> for Negamax<G> {
    fn depth(&self) -> Depth {
        self.max_depth
    }

    fn move_time(&self) -> u64 {
        self.move_time
    }

    fn contempt(&self) -> Value {
        self.contempt
    }

    fn infinity(&self) -> Value {
        self.max_score
    }

    fn score_depth(&self) -> Depth {
        self.score_depth
    }

    fn set_depth(&mut self, depth: Depth) {
        // Store the new depth as an even value.
        self.max_depth = if depth > DEPTH_MAX {
            DEPTH_MAX
        } else if depth < DEPTH_MIN {
            DEPTH_MIN
        } else {
            depth + depth % 2
        };
    }

    fn set_move_time(&mut self, delay: u64) -> Result<()> {
        if delay > 0 {
            self.move_time = delay;
            Ok(())
        } else {
            Err(Error::InvalidArgument(
                "move time must be a positive number".to_string(),
            ))
        }
    }

    fn set_contempt(&mut self, score: Value) {
        self.contempt = score;
    }

    fn set_infinity(&mut self, score: Value) -> Result<()> {
        if score > 0 {
            self.max_score = score;
            self.min_score = -score;
            Ok(())
        } else {
            Err(Error::InvalidArgument(
                "infinity must be a positive number".to_string(),
            ))
        }
    }

    fn attach_consumer(&mut self, consumer: ReportConsumer<G>) -> ConsumerId {
        let id = self.next_consumer;
        self.next_consumer += 1;
        self.consumers.push((id, consumer));
        id
    }

    fn detach_consumer(&mut self, consumer_id: ConsumerId) {
        self.consumers.retain(|&(id, _)| id != consumer_id);
    }

    fn new_match(&mut self) {
        self.cache.clear();
        self.timer.purge();
    }

    fn abort_computation(&self) {
        self.aborted.store(true, Ordering::Relaxed);
    }

    fn compute_best_move(&mut self, game: &mut G) -> Move {
        // If the game ended on that state, return a null move and set
        // the best score accordingly.
        if game.has_ended() {
            self.best_score = -(game.outcome() * game.turn());
            return NULL_MOVE;
        }

        // Abort requests issued while the engine was idle are void.
        self.aborted.store(false, Ordering::Relaxed);

        // Start the countdown.
        self.timer.schedule(self.move_time, self.aborted.clone());

        // Get ready for the move computation.
        let start_length = game.length();
        game.ensure_capacity(DEPTH_MAX as usize + start_length);
        self.cache.discharge();

        // Compute all the legal moves for the game.
        let mut root_moves = game.legal_moves();
        debug_assert!(!root_moves.is_empty());

        // Check for a remembered best move and reorder the root moves
        // accordingly. The scan is capped to bound its overhead.
        if self.cache.find(game) && self.cache.best_move() != NULL_MOVE {
            let hash_move = self.cache.best_move();
            let scan = min(6, root_moves.len());
            if let Some(index) = root_moves[..scan].iter().position(|&m| m == hash_move) {
                root_moves[..=index].rotate_right(1);
            }
        }

        // Iterative deepening search for a best move.
        let mut beta = self.max_score;
        let mut depth = DEPTH_MIN;
        let mut last_score = self.max_score;
        let mut last_move = NULL_MOVE;
        let mut best_move = root_moves[0];

        self.best_score = DRAW_SCORE;
        self.score_depth = 0;

        while !self.is_aborted() || depth == DEPTH_MIN {
            for &m in root_moves.iter() {
                game.make_move(m);
                let score = self.search(game, self.min_score, beta, depth);
                game.unmake_move();

                // A deepening iteration cut short by an abort must
                // not override the last completed one.
                if self.is_aborted() && depth > DEPTH_MIN {
                    best_move = last_move;
                    self.best_score = last_score;
                    break;
                }

                if score < beta {
                    best_move = m;
                    self.best_score = score;
                    beta = score;
                } else if score == beta {
                    self.best_score = score;
                }
            }

            if !self.is_aborted() || depth == DEPTH_MIN {
                self.score_depth = depth;
            }

            // Stop if an exact score was found.
            if self.best_score.abs() == self.max_score {
                break;
            }

            // Stop on timeout elapse or maximum recursion.
            if self.is_aborted() || depth >= self.max_depth {
                break;
            }

            // Report the current search results if they changed.
            if depth > DEPTH_MIN && (best_move != last_move || self.best_score != last_score) {
                self.invoke_consumers(game, best_move);
            }

            debug!(
                "completed depth {} with best move {} and score {}",
                depth, best_move, self.best_score
            );

            beta = self.max_score;
            last_move = best_move;
            last_score = self.best_score;
            depth += 2;
        }

        debug_assert_eq!(game.length(), start_length);
        self.invoke_consumers(game, best_move);
        self.timer.cancel();
        self.aborted.store(false, Ordering::Relaxed);

        best_move
    }

    fn compute_best_score(&mut self, game: &mut G) -> Value {
        self.compute_best_move(game);
        -self.best_score
    }

    fn ponder_move(&mut self, game: &G) -> Move {
        let mut m = NULL_MOVE;
        if self.cache.find(game) && self.cache.flag() == BOUND_EXACT {
            m = self.cache.best_move();
        }
        m
    }
}
