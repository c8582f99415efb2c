//! Line transform - slides and merges a single row or column
//!
//! A line is an ordered `[Tile; N]` taken from the board along one axis.
//! Tiles slide toward the start (index 0) or the end (index N-1); equal
//! neighbours merge once, first pair wins, scanning from the side the tiles
//! move toward.
//!
//! ```
//! use tui_2048_core::line::transform;
//!
//! let out = transform([2, 2, 2, 0], true);
//! assert_eq!(out.line, [4, 2, 0, 0]);
//! assert_eq!(out.score, 4);
//! ```

use arrayvec::ArrayVec;

use crate::types::Tile;

/// Result of transforming one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineResult<const N: usize> {
    pub line: [Tile; N],
    /// Sum of the merged (resulting) tile values
    pub score: u32,
}

/// Slide and merge one line.
///
/// `toward_start == true` pushes tiles toward index 0 (Up/Left), otherwise
/// toward index N-1 (Down/Right). Runs without heap allocation.
pub fn transform<const N: usize>(line: [Tile; N], toward_start: bool) -> LineResult<N> {
    let mut tiles: ArrayVec<Tile, N> = line.iter().copied().filter(|&t| t != 0).collect();
    if !toward_start {
        tiles.reverse();
    }

    let mut out = [0; N];
    let mut score = 0u32;
    let mut write = 0usize;
    let mut read = 0usize;

    while read < tiles.len() {
        let tile = tiles[read];
        if read + 1 < tiles.len() && tiles[read + 1] == tile {
            // A merged tile is never compared against its new neighbour.
            let merged = tile * 2;
            out[write] = merged;
            score += merged;
            read += 2;
        } else {
            out[write] = tile;
            read += 1;
        }
        write += 1;
    }

    if !toward_start {
        out.reverse();
    }

    LineResult { line: out, score }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_stays_empty() {
        let out = transform([0, 0, 0, 0], true);
        assert_eq!(out.line, [0, 0, 0, 0]);
        assert_eq!(out.score, 0);

        let out = transform([0, 0, 0, 0], false);
        assert_eq!(out.line, [0, 0, 0, 0]);
        assert_eq!(out.score, 0);
    }

    #[test]
    fn test_single_tile_slides() {
        assert_eq!(transform([0, 0, 8, 0], true).line, [8, 0, 0, 0]);
        assert_eq!(transform([0, 8, 0, 0], false).line, [0, 0, 0, 8]);
        assert_eq!(transform([8, 0, 0, 0], true).line, [8, 0, 0, 0]);
    }

    #[test]
    fn test_pair_then_other_tile() {
        let out = transform([2, 2, 4, 0], true);
        assert_eq!(out.line, [4, 4, 0, 0]);
        assert_eq!(out.score, 4);
    }

    #[test]
    fn test_four_equal_tiles_merge_as_two_pairs() {
        let out = transform([2, 2, 2, 2], true);
        assert_eq!(out.line, [4, 4, 0, 0]);
        assert_eq!(out.score, 8);

        let out = transform([2, 2, 2, 2], false);
        assert_eq!(out.line, [0, 0, 4, 4]);
        assert_eq!(out.score, 8);
    }

    #[test]
    fn test_toward_end_merges_at_far_side() {
        let out = transform([0, 0, 2, 2], false);
        assert_eq!(out.line, [0, 0, 0, 4]);
        assert_eq!(out.score, 4);
    }

    #[test]
    fn test_three_equal_first_pair_wins() {
        let out = transform([2, 2, 2, 0], true);
        assert_eq!(out.line, [4, 2, 0, 0]);
        assert_eq!(out.score, 4);

        // Moving toward the end, the pair nearest the end merges.
        let out = transform([0, 2, 2, 2], false);
        assert_eq!(out.line, [0, 0, 2, 4]);
        assert_eq!(out.score, 4);
    }

    #[test]
    fn test_merged_tile_does_not_merge_again() {
        let out = transform([4, 2, 2, 0], true);
        assert_eq!(out.line, [4, 4, 0, 0]);
        assert_eq!(out.score, 4);

        let out = transform([2, 2, 4, 8], true);
        assert_eq!(out.line, [4, 4, 8, 0]);
        assert_eq!(out.score, 4);
    }

    #[test]
    fn test_gaps_are_closed_before_merging() {
        let out = transform([2, 0, 0, 2], true);
        assert_eq!(out.line, [4, 0, 0, 0]);
        assert_eq!(out.score, 4);
    }

    #[test]
    fn test_no_merge_for_distinct_tiles() {
        let out = transform([2, 4, 8, 16], true);
        assert_eq!(out.line, [2, 4, 8, 16]);
        assert_eq!(out.score, 0);
    }

    #[test]
    fn test_same_direction_twice_is_idempotent() {
        let lines: [[Tile; 4]; 6] = [
            [2, 2, 4, 0],
            [2, 2, 2, 2],
            [0, 0, 2, 2],
            [4, 0, 4, 8],
            [2, 4, 2, 4],
            [16, 16, 0, 32],
        ];
        for line in lines {
            for toward_start in [true, false] {
                let once = transform(line, toward_start);
                let twice = transform(once.line, toward_start);
                assert_eq!(twice.line, once.line, "line {line:?} start={toward_start}");
                assert_eq!(twice.score, 0);
            }
        }
    }

    #[test]
    fn test_other_dimensions() {
        let out = transform([2, 2, 0], true);
        assert_eq!(out.line, [4, 0, 0]);

        let out = transform([0, 4, 4, 2, 2, 0], false);
        assert_eq!(out.line, [0, 0, 0, 0, 8, 4]);
        assert_eq!(out.score, 12);
    }

    #[test]
    fn test_merges_preserve_sum() {
        let line = [8, 8, 4, 4];
        let out = transform(line, false);
        assert_eq!(out.line.iter().sum::<Tile>(), line.iter().sum::<Tile>());
        assert_eq!(out.line, [0, 0, 16, 8]);
        assert_eq!(out.score, 24);
    }
}
