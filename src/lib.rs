//! This crate provides a framework for writing game engines.
//!
//! # Why a framework?
//!
//! There is lots of knowledge out there about how to write a strong
//! engine for two-player, zero-sum, perfect-information games, and
//! there is a lot of room for innovation also. Writing an engine is
//! fun, but even for the simplest game a lot of complex (and boring)
//! things have to be implemented first: the search driver, the
//! transposition table, the time control, and many more. Thousands of
//! programmers have been re-implementing those things over and over
//! again.
//!
//! This crate separates the two concerns. The rules of the game live
//! behind the [`Game`](trait.Game.html) trait; everything that makes
//! an engine strong -- iterative deepening, alpha-beta pruning,
//! transposition tables, endgame databases, time management -- is
//! provided here and works for any game you plug in.
//!
//! # Usage
//!
//! Here is how simple it is to create an engine using this crate:
//!
//! ```rust,ignore
//! use lysander::*;
//! use lysander::stock::{Negamax, StdCache};
//!
//! let mut engine: Negamax<MyGame> = Negamax::new();
//! engine.set_cache(Some(Box::new(StdCache::new(Some(32)))));
//! engine.set_infinity(MyGame::MAX_SCORE).unwrap();
//! engine.set_move_time(1000).unwrap();
//!
//! let mut game = MyGame::new();
//! let best_move = engine.compute_best_move(&mut game);
//! ```
//!
//! This engine is assembled from the "in stock" implementations of
//! the framework traits. In reality, you will probably want to write
//! your own implementations for some of them -- a cache with a
//! different replacement policy, an endgame database for your game --
//! and the engine will consume them through the same trait seams.

#[macro_use]
extern crate log;

pub mod stock;
pub mod utils;
mod cache;
mod depth;
mod engine;
mod errors;
mod game;
mod leaves;
mod moves;
mod report;
mod value;

pub use crate::cache::*;
pub use crate::depth::*;
pub use crate::engine::*;
pub use crate::errors::*;
pub use crate::game::*;
pub use crate::leaves::*;
pub use crate::moves::*;
pub use crate::report::*;
pub use crate::value::*;
