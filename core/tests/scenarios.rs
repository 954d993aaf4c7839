use mineboard_core::*;
use rand::{SeedableRng, rngs::SmallRng};

/// 2x2 board with a single mine in the top-left corner.
fn corner_mine_board() -> Board {
    Board::from_mine_coords(2, &[(0, 0)]).unwrap()
}

fn status_grid(board: &Board) -> Vec<Vec<TileStatus>> {
    board
        .rows()
        .map(|row| row.map(|tile| tile.status).collect())
        .collect()
}

#[test]
fn clean_board_is_hidden_and_empty() {
    let board = Board::blank(2).unwrap();

    let expected = [(0, 0), (1, 0), (0, 1), (1, 1)].map(Tile::new);
    let tiles: Vec<Tile> = board.iter_tiles().copied().collect();
    assert_eq!(tiles, expected);
    assert_eq!(board.mine_count(), 0);
}

#[test]
fn cascading_open_wins_small_board() {
    let board = corner_mine_board().with_cascade(Cascade::Always);

    let board = open_tile(board, (1, 1)).unwrap();

    for coords in [(1, 0), (0, 1), (1, 1)] {
        assert_eq!(board[coords].status, TileStatus::Opened);
        assert_eq!(board[coords].content, TileContent::Count(1));
    }
    assert_eq!(board[(0, 0)].status, TileStatus::Hidden);
    assert_eq!(count_opened_tiles(&board), 3);
    assert_eq!(
        count_opened_tiles(&board),
        board.total_tiles() - board.mine_count()
    );
    assert!(board.is_won());
}

#[test]
fn zero_count_rule_stops_on_numbered_start() {
    let board = open_tile(corner_mine_board(), (1, 1)).unwrap();

    assert_eq!(count_opened_tiles(&board), 1);
    assert!(!board.is_won());
}

#[test]
fn opening_the_mine_then_revealing_all() {
    let board = corner_mine_board();
    assert!(is_mine(&board, (0, 0)).unwrap());

    let board = open_tile(board, (0, 0)).unwrap();
    assert_eq!(board[(0, 0)].status, TileStatus::Hidden);
    assert_eq!(count_opened_tiles(&board), 0);

    let board = open_all_tiles(board);
    assert_eq!(
        status_grid(&board),
        [
            [TileStatus::Mine, TileStatus::Opened],
            [TileStatus::Opened, TileStatus::Opened],
        ]
    );
    for coords in [(1, 0), (0, 1), (1, 1)] {
        assert_eq!(board[coords].visible_count(), Some(1));
    }
    assert_eq!(board[(0, 0)].content, TileContent::Mine);
}

#[test]
fn in_place_open_reports_hit_mine() {
    let mut board = corner_mine_board();

    assert_eq!(board.open((0, 0)).unwrap(), OpenOutcome::HitMine);
    assert_eq!(
        board.with_cascade(Cascade::Always).open((1, 0)).unwrap(),
        OpenOutcome::Won
    );
}

#[test]
fn marking_is_idempotent() {
    let once = mark_tile(corner_mine_board(), (1, 0)).unwrap();
    let twice = mark_tile(once.clone(), (1, 0)).unwrap();

    assert_eq!(once, twice);
    assert!(is_marked(&twice, (1, 0)).unwrap());
}

#[test]
fn unmarking_hidden_tile_changes_nothing() {
    let board = corner_mine_board();
    let unmarked = unmark_tile(board.clone(), (1, 0)).unwrap();
    assert_eq!(unmarked, board);

    let marked = mark_tile(board.clone(), (1, 0)).unwrap();
    let unmarked = unmark_tile(marked, (1, 0)).unwrap();
    assert_eq!(unmarked[(1, 0)].status, TileStatus::Hidden);
    assert_eq!(unmarked, board);
}

#[test]
fn opened_tile_ignores_secondary_actions() {
    let board = open_tile(corner_mine_board(), (1, 1)).unwrap();

    let board = toggle_mark(board, (1, 1)).unwrap();
    let board = mark_tile(board, (1, 1)).unwrap();
    let board = toggle_mark(board, (1, 1)).unwrap();

    assert_eq!(board[(1, 1)].status, TileStatus::Opened);
}

#[test]
fn marked_tile_blocks_opening() {
    let board = mark_tile(corner_mine_board(), (1, 1)).unwrap();
    let opened = open_tile(board.clone(), (1, 1)).unwrap();

    assert_eq!(opened, board);
}

#[test]
fn flood_fill_matches_reachable_zero_region() {
    let mut rng = SmallRng::seed_from_u64(0xb0a7d);

    for _ in 0..50 {
        let board = create_board(10, 12, &mut rng).unwrap();
        let Some(start) = board
            .iter_tiles()
            .find(|tile| !tile.is_mine() && board.count_mines_around(tile.position) == Ok(0))
            .map(|tile| tile.position)
        else {
            continue;
        };

        let opened = open_tile(board.clone(), start).unwrap();

        for tile in opened.iter_tiles() {
            let (x, y) = tile.position;
            let zero_neighbor_opened = [(-1i16, 0i16), (1, 0), (0, -1), (0, 1)]
                .iter()
                .filter_map(|&(dx, dy)| {
                    let nx = u8::try_from(i16::from(x) + dx).ok()?;
                    let ny = u8::try_from(i16::from(y) + dy).ok()?;
                    opened.tile((nx, ny)).ok()
                })
                .any(|neighbor| neighbor.visible_count() == Some(0));

            if tile.is_mine() {
                assert_eq!(tile.status, TileStatus::Hidden);
            } else if tile.position == start || zero_neighbor_opened {
                // everything next to an opened zero gets opened, numbered tiles included
                assert_eq!(tile.status, TileStatus::Opened, "{:?}", tile.position);
                assert_eq!(
                    tile.visible_count(),
                    Some(opened.count_mines_around(tile.position).unwrap())
                );
            } else {
                assert_eq!(tile.status, TileStatus::Hidden, "{:?}", tile.position);
            }
        }
    }
}

#[test]
fn count_mines_around_is_bounded() {
    let mut rng = SmallRng::seed_from_u64(11);
    let board = create_board(6, 30, &mut rng).unwrap();

    for tile in board.iter_tiles() {
        let count = count_mines_around(&board, tile.position).unwrap();
        assert!(count <= 8);
    }
}

#[test]
fn open_all_leaves_no_hidden_or_marked() {
    let mut rng = SmallRng::seed_from_u64(5);
    let board = create_board(7, 9, &mut rng).unwrap();
    let board = mark_tile(board, (3, 3)).unwrap();

    let board = open_all_tiles(board);

    assert!(
        board
            .iter_tiles()
            .all(|tile| !tile.status.is_unopened())
    );
    assert_eq!(
        board
            .iter_tiles()
            .filter(|tile| tile.status == TileStatus::Mine)
            .count(),
        9
    );
}

#[test]
fn out_of_bounds_positions_are_rejected() {
    let board = corner_mine_board();

    assert_eq!(
        open_tile(board.clone(), (2, 0)).unwrap_err(),
        BoardError::InvalidCoords
    );
    assert_eq!(
        mark_tile(board.clone(), (0, 2)).unwrap_err(),
        BoardError::InvalidCoords
    );
    assert_eq!(is_opened(&board, (9, 9)), Err(BoardError::InvalidCoords));
}

#[test]
fn board_survives_serde() {
    let board = open_tile(corner_mine_board().with_cascade(Cascade::Always), (1, 0)).unwrap();

    let json = serde_json::to_string(&board).unwrap();
    let restored: Board = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, board);
    assert_eq!(restored.cascade(), Cascade::Always);
}

#[test]
fn tampered_snapshot_is_rejected() {
    let board = corner_mine_board();
    let json = serde_json::to_string(&board).unwrap();

    let moved_tile = json.replacen("\"position\":[0,0]", "\"position\":[1,1]", 1);
    assert_ne!(moved_tile, json);
    let err = serde_json::from_str::<Board>(&moved_tile).unwrap_err();
    assert!(err.to_string().contains("Board shape does not match declared size"));

    let reshaped = json.replacen("\"dim\":[2,2]", "\"dim\":[1,4]", 1);
    assert_ne!(reshaped, json);
    let err = serde_json::from_str::<Board>(&reshaped).unwrap_err();
    assert!(err.to_string().contains("Board shape does not match declared size"));
}

#[test]
fn restored_board_recounts_mines() {
    let mut board = corner_mine_board();
    board.mark((1, 1)).unwrap();

    let json = serde_json::to_string(&board).unwrap();
    let with_extra_mine = json.replacen(
        "\"position\":[1,1],\"status\":\"Marked\",\"content\":{\"Count\":0}",
        "\"position\":[1,1],\"status\":\"Marked\",\"content\":\"Mine\"",
        1,
    );
    assert_ne!(with_extra_mine, json);

    let mut restored: Board = serde_json::from_str(&with_extra_mine).unwrap();
    assert_eq!(restored.mine_count(), 2);
    assert_eq!(restored.safe_tiles(), 2);

    restored.open((1, 0)).unwrap();
    assert_eq!(restored.open((0, 1)).unwrap(), OpenOutcome::Won);
}

#[test]
fn hand_built_grid_reaches_win() {
    let tiles = ndarray::Array2::from_shape_fn((2, 2), |(y, x)| {
        let mut tile = Tile::new((x as Coord, y as Coord));
        if x == y {
            tile.content = TileContent::Mine;
        }
        tile
    });
    let mut board = Board::from_tiles(tiles).unwrap();

    assert_eq!(board.mine_count(), 2);
    assert_eq!(board.open((1, 0)).unwrap(), OpenOutcome::Opened);
    assert_eq!(board.open((0, 1)).unwrap(), OpenOutcome::Won);
}
