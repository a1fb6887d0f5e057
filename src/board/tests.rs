use super::*;
use crate::error::BoardError;

#[test]
fn test_color_opponent() {
    assert_eq!(Color::White.opponent(), Color::Black);
    assert_eq!(Color::Black.opponent(), Color::White);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 4);
    assert_eq!(pos.to_index(5), 19);

    let pos2 = Pos::from_index(19, 5);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(11), 0);
    assert_eq!(Pos::new(0, 10).to_index(11), 10);
    assert_eq!(Pos::new(10, 0).to_index(11), 110);
    assert_eq!(Pos::new(10, 10).to_index(11), 120);
}

#[test]
fn test_index_mapping_is_bijective() {
    let size = 7;
    for idx in 0..size * size {
        assert_eq!(Pos::from_index(idx, size).to_index(size), idx);
    }
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0, 5));
    assert!(Pos::is_valid(4, 4, 5));
    assert!(!Pos::is_valid(-1, 0, 5));
    assert!(!Pos::is_valid(0, -1, 5));
    assert!(!Pos::is_valid(5, 0, 5));
    assert!(!Pos::is_valid(0, 5, 5));
}

#[test]
fn test_neighbors_interior() {
    let mut n: Vec<Pos> = Pos::new(2, 2).neighbors(5).collect();
    n.sort();
    assert_eq!(
        n,
        vec![
            Pos::new(1, 1),
            Pos::new(1, 2),
            Pos::new(2, 1),
            Pos::new(2, 3),
            Pos::new(3, 2),
            Pos::new(3, 3),
        ]
    );
}

#[test]
fn test_neighbors_corners() {
    // Top-left only reaches right, below and the SE diagonal
    let mut n: Vec<Pos> = Pos::new(0, 0).neighbors(5).collect();
    n.sort();
    assert_eq!(n, vec![Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]);

    // Top-right: (1, 3) is not adjacent
    let mut n: Vec<Pos> = Pos::new(0, 4).neighbors(5).collect();
    n.sort();
    assert_eq!(n, vec![Pos::new(0, 3), Pos::new(1, 4)]);
}

#[test]
fn test_board_check_bounds() {
    let board = Board::new(5);
    assert_eq!(board.check(4, 0), Ok(Pos::new(4, 0)));
    assert_eq!(
        board.check(5, 5),
        Err(BoardError::OutOfRange { row: 5, col: 5, size: 5 })
    );
    assert!(board.check(-1, 2).is_err());
}

#[test]
fn test_board_reserve_then_set() {
    let mut board = Board::new(3);
    let pos = Pos::new(1, 1);
    assert!(board.reserve(pos));
    assert_eq!(board.get(pos), Cell::Reserved);
    assert!(!board.reserve(pos));

    board.set(pos, Color::Black);
    assert_eq!(board.get(pos), Cell::Stone(Color::Black));
    assert_eq!(board.get(pos).color(), Some(Color::Black));
    assert_eq!(board.stone_count(), 1);
    assert!(!board.is_full());
}

#[test]
#[should_panic(expected = "board size must be positive")]
fn test_zero_size_board_panics() {
    let _ = Board::new(0);
}
