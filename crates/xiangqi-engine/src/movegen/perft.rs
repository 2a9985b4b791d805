//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.

use super::generate_moves;
use crate::Position;
use xiangqi_core::Side;

/// Counts the number of leaf nodes at the given depth, `side` moving first.
///
/// Moves are applied and rolled back in place, so `position` is unchanged
/// when this returns.
pub fn perft(position: &mut Position, side: Side, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_moves(position, side);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in &moves {
        if let Some(undo) = position.apply(m.from(), m.to()) {
            nodes += perft(position, side.opposite(), depth - 1);
            position.rollback(undo);
        }
    }
    nodes
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(position: &mut Position, side: Side, depth: u32) -> Vec<(String, u64)> {
    let moves = generate_moves(position, side);
    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        if let Some(undo) = position.apply(m.from(), m.to()) {
            let nodes = if depth > 1 {
                perft(position, side.opposite(), depth - 1)
            } else {
                1
            };
            position.rollback(undo);
            results.push((m.to_string(), nodes));
        }
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_startpos_depth_1() {
        let mut position = Position::startpos();
        assert_eq!(perft(&mut position, Side::Red, 1), 44);
    }

    #[test]
    fn perft_startpos_depth_2() {
        let mut position = Position::startpos();
        assert_eq!(perft(&mut position, Side::Red, 2), 1920);
        assert_eq!(position, Position::startpos());
    }

    #[test]
    #[ignore]
    fn perft_startpos_depth_3() {
        let mut position = Position::startpos();
        assert_eq!(perft(&mut position, Side::Red, 3), 79666);
    }

    #[test]
    fn perft_lone_generals() {
        // Generals on different files, each with its palace to itself.
        let mut position = Position::from_fen("3k5/9/9/9/9/9/9/9/9/4K4 w").unwrap();
        // Red: (1,5) -> (2,5), (1,6); (1,4) would face the black general.
        assert_eq!(perft(&mut position, Side::Red, 1), 2);
    }

    #[test]
    fn perft_divide_works() {
        let mut position = Position::startpos();
        let results = perft_divide(&mut position, Side::Red, 1);
        assert_eq!(results.len(), 44);
        let total: u64 = results.iter().map(|(_, n)| n).sum();
        assert_eq!(total, 44);
    }
}
