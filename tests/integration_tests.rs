//! Integration tests for carat-rust
//!
//! These drive the public API the way a front end would: build a board, place
//! tiles, read chip snapshots and credit the resolved chips to players.

use std::collections::BTreeSet;

use carat_rust::Color::{self, Blue, Green, Red, Yellow};
use carat_rust::board::Board;
use carat_rust::chip::{ChipRegistry, ChipResolution};
use carat_rust::game::{Game, GameConfig};
use carat_rust::player::PlayerManager;
use carat_rust::{Chip, GameError, PlacementRejection, Tile, create_board};

// =============================================================================
// Helper functions for setting up boards
// =============================================================================

/// A board where every chip is worth `value`.
fn flat_board(size: usize, value: u8) -> Board {
    let side = size + 1;
    Board::with_chips(ChipRegistry::with_values(size, &vec![value; side * side]).unwrap())
}

fn tile(corners: [Color; 4], value: u8) -> Tile {
    Tile::new(corners, value).unwrap()
}

/// Place a sequence of `(row, col, tile)` and return the last placement's resolutions.
fn play(board: &mut Board, moves: &[(usize, usize, Tile)]) -> Vec<ChipResolution> {
    let mut last = Vec::new();
    for &(r, c, t) in moves {
        last = board.place(t, r, c).unwrap().resolved;
    }
    last
}

fn resolution_at(resolved: &[ChipResolution], pos: (usize, usize)) -> ChipResolution {
    *resolved
        .iter()
        .find(|r| r.position == pos)
        .unwrap_or_else(|| panic!("chip {pos:?} did not resolve"))
}

// =============================================================================
// Placement rules
// =============================================================================

#[test]
fn test_first_placement_must_be_interior() {
    let b = flat_board(7, 1);
    assert!(!b.can_place(0, 0));
    assert!(b.can_place(3, 3));
    for (r, c) in b.valid_positions() {
        assert!((1..6).contains(&r) && (1..6).contains(&c));
    }
}

#[test]
fn test_later_placements_need_orthogonal_neighbor() {
    let mut b = flat_board(7, 1);
    b.place(tile([Red, Blue, Green, Yellow], 1), 3, 3).unwrap();
    b.place(tile([Red, Blue, Green, Yellow], 1), 3, 4).unwrap();

    for r in 0..7 {
        for c in 0..7 {
            let occupied = b.get(r, c).is_some();
            let touching = [(0isize, 1isize), (0, -1), (1, 0), (-1, 0)]
                .iter()
                .filter_map(|&(dr, dc)| Some((r.checked_add_signed(dr)?, c.checked_add_signed(dc)?)))
                .any(|(nr, nc)| b.get(nr, nc).is_some());
            assert_eq!(b.can_place(r, c), !occupied && touching, "cell ({r},{c})");
        }
    }
    assert!(!b.can_place(2, 2), "diagonal contact is not enough");
    assert!(!b.can_place(7, 3));
}

#[test]
fn test_rejections_are_typed() {
    let mut b = flat_board(7, 1);
    assert_eq!(
        b.place(tile([Red, Blue, Green, Yellow], 1), 0, 3).unwrap_err(),
        GameError::IllegalPlacement {
            row: 0,
            col: 3,
            reason: PlacementRejection::OpeningOnBorder
        }
    );
    b.place(tile([Red, Blue, Green, Yellow], 1), 3, 3).unwrap();
    assert_eq!(
        b.place(tile([Red, Blue, Green, Yellow], 1), 5, 5).unwrap_err(),
        GameError::IllegalPlacement {
            row: 5,
            col: 5,
            reason: PlacementRejection::NotAdjacent
        }
    );
    assert!(matches!(
        b.place(tile([Red, Blue, Green, Yellow], 1), 3, 30),
        Err(GameError::InvalidPosition { .. })
    ));
}

#[test]
fn test_rejected_placement_is_atomic() {
    let mut b = flat_board(5, 2);
    b.place(tile([Red, Blue, Green, Yellow], 3), 2, 2).unwrap();
    let chips_before = b.chips().clone();
    let valid_before = b.valid_positions();

    assert!(b.place(tile([Blue, Red, Green, Yellow], 6), 2, 2).is_err());
    assert!(b.place(tile([Blue, Red, Green, Yellow], 6), 0, 0).is_err());

    assert_eq!(b.chips(), &chips_before);
    assert_eq!(b.valid_positions(), valid_before);
    assert_eq!(b.placed_count(), 1);
}

// =============================================================================
// Accumulation
// =============================================================================

#[test]
fn test_accumulation_is_order_independent() {
    let a_tile = tile([Red, Blue, Green, Yellow], 4);
    let b_tile = tile([Green, Yellow, Red, Blue], 2);

    let mut first = flat_board(7, 1);
    first.place(a_tile, 3, 3).unwrap();
    first.place(b_tile, 3, 4).unwrap();

    let mut second = flat_board(7, 1);
    second.place(b_tile, 3, 4).unwrap();
    second.place(a_tile, 3, 3).unwrap();

    for pos in [(3, 4), (4, 4)] {
        let x = first.chip(pos.0, pos.1).unwrap().snapshot();
        let y = second.chip(pos.0, pos.1).unwrap().snapshot();
        assert_eq!(x.distribution, y.distribution, "chip {pos:?}");
        assert_eq!(x.placed_adjacent, 2);
    }
}

#[test]
fn test_preview_never_mutates() {
    let mut b = flat_board(7, 3);
    b.place(tile([Red, Blue, Green, Yellow], 5), 3, 3).unwrap();
    let before: Vec<_> = b.chips().iter().map(Chip::snapshot).collect();

    let probe = tile([Yellow, Red, Blue, Green], 2);
    for (r, c) in b.valid_positions() {
        for turns in 0..4 {
            let preview = b.preview(&probe.with_rotation(turns), r, c).unwrap();
            assert_eq!(preview.len(), 4);
            for shares in preview.values() {
                let total: f64 = shares.values().sum();
                assert!((total - 100.0).abs() < 1e-9);
            }
        }
    }

    let after: Vec<_> = b.chips().iter().map(Chip::snapshot).collect();
    assert_eq!(before, after);
}

// =============================================================================
// Resolution through real placements (all chips worth 4)
// =============================================================================

#[test]
fn test_single_color_corner_chip_scores() {
    let mut b = flat_board(3, 4);
    let mut players = PlayerManager::new(2).unwrap();
    let resolved = play(
        &mut b,
        &[
            (1, 1, tile([Red, Blue, Green, Yellow], 1)),
            (0, 1, tile([Red, Blue, Green, Yellow], 1)),
            (0, 0, tile([Red, Blue, Green, Yellow], 4)),
        ],
    );
    let corner = resolution_at(&resolved, (0, 0));
    assert_eq!(corner.owner, Some(Red));
    assert_eq!(corner.points, 4);

    assert!(players.credit(Red, corner.position, corner.points));
    assert_eq!(players.player_for(Red).unwrap().score, 4);
    assert_eq!(b.chip(0, 0).unwrap().collected_by(), Some(Red));
}

#[test]
fn test_two_color_tie_scores_nobody() {
    let mut b = flat_board(3, 4);
    let resolved = play(
        &mut b,
        &[
            (1, 1, tile([Red, Blue, Green, Yellow], 1)),
            (0, 1, tile([Red, Blue, Green, Yellow], 3)),
            (0, 0, tile([Red, Blue, Green, Yellow], 3)),
        ],
    );
    let border = resolution_at(&resolved, (0, 1));
    assert_eq!(border.owner, None);
    let snap = b.chip(0, 1).unwrap().snapshot();
    assert!(snap.collected);
    assert_eq!(snap.collected_by, None);
    assert_eq!(snap.distribution.weight(Red), 3);
    assert_eq!(snap.distribution.weight(Blue), 3);
}

#[test]
fn test_two_top_colors_hand_chip_to_heavier_remainder() {
    // Interior chip (1,1) collects red 5, green 5, blue 3, yellow 2.
    let mut b = flat_board(3, 4);
    let resolved = play(
        &mut b,
        &[
            (1, 1, tile([Red, Blue, Green, Yellow], 5)),
            (0, 1, tile([Red, Blue, Yellow, Green], 5)),
            (1, 0, tile([Red, Blue, Green, Yellow], 3)),
            (0, 0, tile([Red, Blue, Yellow, Green], 2)),
        ],
    );
    let center = resolution_at(&resolved, (1, 1));
    assert_eq!(center.owner, Some(Blue));
    assert_eq!(center.points, 4);

    let owners: Vec<_> = resolved.iter().map(|r| (r.position, r.owner)).collect();
    assert_eq!(
        owners,
        vec![
            ((0, 0), Some(Red)),
            ((0, 1), Some(Red)),
            ((1, 1), Some(Blue)),
            ((1, 0), Some(Red)),
        ]
    );
}

#[test]
fn test_four_way_tie_scores_nobody() {
    let mut b = flat_board(3, 4);
    let resolved = play(
        &mut b,
        &[
            (1, 1, tile([Red, Blue, Green, Yellow], 2)),
            (0, 1, tile([Red, Green, Yellow, Blue], 2)),
            (1, 0, tile([Red, Green, Blue, Yellow], 2)),
            (0, 0, tile([Red, Blue, Yellow, Green], 2)),
        ],
    );
    assert_eq!(resolution_at(&resolved, (1, 1)).owner, None);
    assert_eq!(b.chip(1, 1).unwrap().distribution().contributors(), 4);
}

#[test]
fn test_resolved_chip_is_frozen() {
    let mut b = flat_board(3, 4);
    play(
        &mut b,
        &[
            (1, 1, tile([Red, Blue, Green, Yellow], 1)),
            (0, 1, tile([Red, Blue, Green, Yellow], 1)),
            (0, 0, tile([Red, Blue, Green, Yellow], 4)),
        ],
    );
    let frozen = b.chip(0, 0).unwrap().snapshot();
    // Filling the rest of the board never touches (0,0) again.
    play(
        &mut b,
        &[
            (1, 0, tile([Blue, Red, Green, Yellow], 6)),
            (2, 0, tile([Blue, Red, Green, Yellow], 6)),
        ],
    );
    assert_eq!(b.chip(0, 0).unwrap().snapshot(), frozen);
}

#[test]
fn test_full_board_resolves_every_chip() {
    let mut b = flat_board(3, 1);
    let order = [(1, 1), (0, 1), (0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2)];
    let mut count = 0;
    for (r, c) in order {
        count += b
            .place(tile([Red, Blue, Green, Yellow], 1), r, c)
            .unwrap()
            .resolved
            .len();
    }
    assert!(b.is_full());
    assert_eq!(count, 16);
    assert!(b.chips().iter().all(Chip::is_collected));
    assert!(b.valid_positions().is_empty());
}

// =============================================================================
// Full games
// =============================================================================

#[test]
fn test_seeded_game_runs_to_completion() {
    for players in 2..=4 {
        let mut game = Game::new(GameConfig {
            board_size: 7,
            player_count: players,
            seed: 1234,
        })
        .unwrap();
        let turns = game.play_out().unwrap();
        assert!(game.is_over());
        assert_eq!(turns.len(), 49 / players * players);
        assert!(game.players().players().iter().all(|p| p.hand.is_empty()));

        let credited: u32 = turns
            .iter()
            .flat_map(|t| &t.credits)
            .map(|c| u32::from(c.points))
            .sum();
        let scored: u32 = game.players().players().iter().map(|p| p.score).sum();
        assert_eq!(credited, scored);
        assert!(scored <= game.board().chips().total_value());
        assert_eq!(game.place_selected(3, 3).unwrap_err(), GameError::GameOver);
    }
}

#[test]
fn test_credits_only_seated_colors() {
    let mut game = Game::new(GameConfig {
        board_size: 5,
        player_count: 2,
        seed: 99,
    })
    .unwrap();
    let turns = game.play_out().unwrap();
    for turn in &turns {
        for credit in &turn.credits {
            assert!(matches!(credit.color, Red | Blue));
        }
    }
}

#[test]
fn test_create_board_is_seed_stable() {
    let a = create_board(7, &mut fastrand::Rng::with_seed(21)).unwrap();
    let b = create_board(7, &mut fastrand::Rng::with_seed(21)).unwrap();
    assert_eq!(a.chips(), b.chips());
    let expected: BTreeSet<_> = (1..6).flat_map(|r| (1..6).map(move |c| (r, c))).collect();
    assert_eq!(a.valid_positions(), expected);
}
