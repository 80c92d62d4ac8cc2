//! Implements `ZobristArrays`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};


/// Tables for calculating Zobrist hashes.
///
/// Zobrist hashing is a technique to transform a game state into a
/// number of a fixed length, with an equal distribution over all
/// possible numbers, invented by Albert Zobrist. The key property of
/// this method is that two similar states generate entirely different
/// hash numbers. A state's hash is the XOR of the keys of all the
/// features present in it, which makes the hash cheap to maintain
/// incrementally as moves are made and unmade.
///
/// The tables are filled from a fixed-seed random number generator,
/// so every instance with the same dimensions holds the same keys.
pub struct ZobristArrays {
    /// The constant with which the hash value should be XOR-ed when
    /// the side to move changes.
    pub to_move: u64,

    /// Constants with which the hash value should be XOR-ed when a
    /// given move is played on a given ply: `keys[ply][move]`.
    pub keys: Vec<Vec<u64>>,
}

impl ZobristArrays {
    /// Creates and initializes a new instance.
    ///
    /// `plies` is the maximum game length to support, and `moves` is
    /// the number of distinct move encodings per ply.
    pub fn new(plies: usize, moves: usize) -> ZobristArrays {
        let mut rng = StdRng::seed_from_u64(0x5A1AD);
        let to_move = rng.gen();
        let keys = (0..plies)
            .map(|_| (0..moves).map(|_| rng.gen()).collect())
            .collect();

        ZobristArrays {
            to_move: to_move,
            keys: keys,
        }
    }

    /// Returns the key for a given move on a given ply.
    #[inline]
    pub fn key(&self, ply: usize, m: usize) -> u64 {
        self.keys[ply][m]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instances_agree() {
        let a = ZobristArrays::new(4, 8);
        let b = ZobristArrays::new(4, 8);
        assert_eq!(a.to_move, b.to_move);
        assert_eq!(a.keys, b.keys);
    }

    #[test]
    fn keys_differ() {
        let tables = ZobristArrays::new(16, 16);
        let mut seen = Vec::new();
        for ply in 0..16 {
            for m in 0..16 {
                let key = tables.key(ply, m);
                assert!(!seen.contains(&key));
                seen.push(key);
            }
        }
    }
}
