//! Shared test fixtures.
//!
//! `TreeGame` is a game over an explicitly specified tree: each state
//! is a tree node, moves are child ordinals, and a state is terminal
//! when its node has no children. This gives the tests full control
//! over outcomes, heuristic scores, and the cost of evaluating them.

use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::Rng;

use lysander::utils::ZobristArrays;
use lysander::*;


/// The maximum absolute score of `TreeGame` states.
pub const TREE_SCORE: Value = 1000;


/// Specifies a game tree.
pub enum Node {
    /// A terminal state with its absolute outcome.
    Leaf(Value),

    /// An internal state with its absolute heuristic score and its
    /// successor states, in move order.
    Branch(Value, Vec<Node>),
}


/// A game played over an explicit tree.
pub struct TreeGame {
    values: Vec<Value>,
    children: Vec<Vec<usize>>,
    path: Vec<usize>,
    moves: Vec<Move>,
    cursors: Vec<Move>,
    start_turn: Turn,
    zobrist: ZobristArrays,
    capacity: usize,

    /// Every move played, in play order.
    pub made_log: Vec<Move>,

    /// Sleep for the given milliseconds in `score()` once the state
    /// is at least the given number of half-moves deep.
    pub eval_delay: Option<(usize, u64)>,
}

impl TreeGame {
    pub fn new(root: &Node, start_turn: Turn) -> TreeGame {
        let mut game = TreeGame {
            values: Vec::new(),
            children: Vec::new(),
            path: Vec::new(),
            moves: Vec::new(),
            cursors: vec![0],
            start_turn: start_turn,
            zobrist: ZobristArrays::new(16, 16),
            capacity: 0,
            made_log: Vec::new(),
            eval_delay: None,
        };
        let root_index = game.add(root);
        game.path.push(root_index);
        game
    }

    /// Flattens a node specification into the arena and returns its
    /// index.
    fn add(&mut self, node: &Node) -> usize {
        let index = self.values.len();
        self.values.push(0);
        self.children.push(Vec::new());
        match *node {
            Node::Leaf(value) => {
                self.values[index] = value;
            }
            Node::Branch(value, ref successors) => {
                self.values[index] = value;
                let successors: Vec<usize> = successors.iter().map(|n| self.add(n)).collect();
                self.children[index] = successors;
            }
        }
        index
    }

    fn here(&self) -> usize {
        *self.path.last().unwrap()
    }

    /// Returns the capacity requested through `ensure_capacity`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Game for TreeGame {
    fn length(&self) -> usize {
        self.moves.len()
    }

    fn turn(&self) -> Turn {
        if self.moves.len() % 2 == 0 {
            self.start_turn
        } else {
            -self.start_turn
        }
    }

    fn hash(&self) -> u64 {
        let mut hash = 0x51E5;
        for (ply, &m) in self.moves.iter().enumerate() {
            hash ^= self.zobrist.key(ply, m as usize);
        }
        if self.turn() == NORTH {
            hash ^= self.zobrist.to_move;
        }
        hash
    }

    fn has_ended(&self) -> bool {
        self.children[self.here()].is_empty()
    }

    fn outcome(&self) -> Value {
        self.values[self.here()]
    }

    fn score(&self) -> Value {
        if let Some((min_ply, millis)) = self.eval_delay {
            if self.moves.len() >= min_ply {
                thread::sleep(Duration::from_millis(millis));
            }
        }
        self.values[self.here()]
    }

    fn infinity(&self) -> Value {
        TREE_SCORE
    }

    fn make_move(&mut self, m: Move) {
        let successor = self.children[self.here()][m as usize];
        self.path.push(successor);
        self.moves.push(m);
        self.cursors.push(0);
        self.made_log.push(m);
    }

    fn unmake_move(&mut self) {
        assert!(!self.moves.is_empty());
        self.path.pop();
        self.moves.pop();
        self.cursors.pop();
    }

    fn next_move(&mut self) -> Move {
        let count = self.children[self.here()].len() as Move;
        let cursor = *self.cursors.last().unwrap();
        if cursor < count {
            *self.cursors.last_mut().unwrap() = cursor + 1;
            cursor
        } else {
            NULL_MOVE
        }
    }

    fn cursor(&self) -> Move {
        *self.cursors.last().unwrap()
    }

    fn set_cursor(&mut self, cursor: Move) {
        *self.cursors.last_mut().unwrap() = cursor;
    }

    fn reset_cursor(&mut self) {
        *self.cursors.last_mut().unwrap() = 0;
    }

    fn ensure_capacity(&mut self, size: usize) {
        if size > self.capacity {
            self.capacity = size;
        }
    }
}


/// Builds a uniform tree with the given branching factor and depth,
/// with all values drawn from `rng` within `±amplitude`.
pub fn uniform_tree(branching: usize, depth: usize, rng: &mut StdRng, amplitude: Value) -> Node {
    let value = rng.gen_range(-amplitude..=amplitude);
    if depth == 0 {
        Node::Leaf(value)
    } else {
        let successors = (0..branching)
            .map(|_| uniform_tree(branching, depth - 1, rng, amplitude))
            .collect();
        Node::Branch(value, successors)
    }
}


/// Computes the exact game value of a tree from the side-to-move
/// perspective, by plain negamax over the terminal outcomes.
pub fn reference_score(node: &Node, turn: Turn, contempt: Value) -> Value {
    match *node {
        Node::Leaf(value) => {
            if value == DRAW_SCORE {
                contempt * turn
            } else {
                value * turn
            }
        }
        Node::Branch(_, ref successors) => successors
            .iter()
            .map(|n| -reference_score(n, -turn, contempt))
            .max()
            .unwrap(),
    }
}
