use broadside::{
    AttackResult, Board, BoardError, Cell, Coordinate, Orientation, PlacementPolicy, ShipDef,
    ShipId, FLEET,
};

fn cruiser() -> ShipDef {
    ShipDef::new("Cruiser", 3)
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.size(), 10);
    assert_eq!(board.policy(), PlacementPolicy::NoTouching);
    assert_eq!(board.ship_count(), 0);
    for y in 0..10 {
        for x in 0..10 {
            assert_eq!(board.cell(x, y), Some(Cell::Empty));
        }
    }
    assert_eq!(board.cell(10, 0), None);
}

#[test]
fn test_custom_size() {
    let board = Board::with_size(8);
    assert_eq!(board.size(), 8);
    assert_eq!(board.cell(7, 7), Some(Cell::Empty));
    assert_eq!(board.cell(8, 7), None);
}

#[test]
fn test_place_horizontal_marks_exact_cells() {
    let mut board = Board::new();
    let id = board.place_ship(&cruiser(), 2, 3, Orientation::Horizontal).unwrap();
    for y in 0..10 {
        for x in 0..10 {
            let expected = if y == 3 && (2..5).contains(&x) {
                Cell::Occupied(id)
            } else {
                Cell::Empty
            };
            assert_eq!(board.cell(x, y), Some(expected), "cell ({}, {})", x, y);
        }
    }
    let ship = board.ship(id).unwrap();
    assert_eq!(ship.name(), Some("Cruiser"));
    assert_eq!(
        ship.cells(),
        &[Coordinate::new(2, 3), Coordinate::new(3, 3), Coordinate::new(4, 3)]
    );
}

#[test]
fn test_place_vertical_extends_down() {
    let mut board = Board::new();
    let id = board.place_ship(&cruiser(), 0, 0, Orientation::Vertical).unwrap();
    assert_eq!(board.cell(0, 2), Some(Cell::Occupied(id)));
    assert_eq!(board.cell(1, 0), Some(Cell::Empty));
    assert_eq!(board.cell(0, 3), Some(Cell::Empty));
}

#[test]
fn test_out_of_bounds_placement_rejected() {
    let mut board = Board::new();
    assert!(!board.can_place_ship(&cruiser(), 8, 0, Orientation::Horizontal));
    assert!(!board.can_place_ship(&cruiser(), 0, 8, Orientation::Vertical));
    assert!(!board.can_place_ship(&cruiser(), 10, 0, Orientation::Vertical));
    assert!(board.can_place_ship(&cruiser(), 7, 0, Orientation::Horizontal));
    assert!(board.place_ship(&cruiser(), 8, 0, Orientation::Horizontal).is_none());
    assert_eq!(board.ship_count(), 0);
    assert_eq!(
        board.check_placement(&cruiser(), usize::MAX, 0, Orientation::Horizontal),
        Err(BoardError::ShipOutOfBounds)
    );
}

#[test]
fn test_overlap_rejected() {
    let mut board = Board::new();
    board.place_ship(&cruiser(), 0, 0, Orientation::Horizontal).unwrap();
    assert_eq!(
        board.check_placement(&cruiser(), 1, 0, Orientation::Vertical),
        Err(BoardError::ShipOverlaps)
    );
    assert!(board.place_ship(&cruiser(), 1, 0, Orientation::Vertical).is_none());
    assert_eq!(board.ship_count(), 1);
}

#[test]
fn test_diagonal_adjacency_rejected() {
    let mut board = Board::new();
    let battleship = ShipDef::new("Battleship", 4);
    board.place_ship(&battleship, 2, 3, Orientation::Horizontal).unwrap();

    let snapshot = board.clone();
    assert!(!board.can_place_ship(&cruiser(), 1, 2, Orientation::Vertical));
    assert!(board.place_ship(&cruiser(), 1, 2, Orientation::Vertical).is_none());
    assert_eq!(board.ship_count(), 1);
    assert_eq!(board, snapshot);
    assert_eq!(
        board.check_placement(&cruiser(), 1, 2, Orientation::Vertical),
        Err(BoardError::ShipAdjacent)
    );
}

#[test]
fn test_one_cell_gap_is_allowed() {
    let mut board = Board::new();
    board.place_ship(&cruiser(), 0, 0, Orientation::Horizontal).unwrap();
    assert!(!board.can_place_ship(&cruiser(), 0, 1, Orientation::Horizontal));
    assert!(!board.can_place_ship(&cruiser(), 3, 0, Orientation::Vertical));
    assert!(board.place_ship(&cruiser(), 0, 2, Orientation::Horizontal).is_some());
    assert!(board.place_ship(&cruiser(), 4, 0, Orientation::Vertical).is_some());
}

#[test]
fn test_overlap_only_policy_allows_touching() {
    let mut board = Board::with_policy(10, PlacementPolicy::OverlapOnly);
    board.deploy(4, 2, 3, Orientation::Horizontal).unwrap();
    assert!(board.can_place_ship(&cruiser(), 1, 2, Orientation::Vertical));
    assert!(board.place_ship(&cruiser(), 2, 4, Orientation::Horizontal).is_some());
    assert_eq!(
        board.deploy(3, 3, 2, Orientation::Vertical),
        Err(BoardError::ShipOverlaps)
    );
    assert_eq!(board.ship_count(), 2);
}

#[test]
fn test_deploy_reports_errors() {
    let mut board = Board::new();
    let id = board.deploy(3, 0, 0, Orientation::Horizontal).unwrap();
    assert_eq!(id, ShipId(0));
    assert_eq!(board.ship(id).unwrap().name(), None);
    assert_eq!(
        board.deploy(3, 1, 0, Orientation::Horizontal),
        Err(BoardError::ShipOverlaps)
    );
    assert_eq!(
        board.deploy(2, 9, 9, Orientation::Horizontal),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        board.deploy(0, 5, 5, Orientation::Horizontal),
        Err(BoardError::InvalidLength)
    );
    let second = board.deploy(2, 4, 4, Orientation::Vertical).unwrap();
    assert_eq!(second, ShipId(1));
}

#[test]
fn test_scenario_sink_single_ship() {
    let mut board = Board::new();
    let id = board.place_ship(&cruiser(), 2, 3, Orientation::Horizontal).unwrap();

    assert_eq!(
        board.receive_attack(2, 3).unwrap(),
        AttackResult::Hit { ship: id, sunk: false }
    );
    assert_eq!(
        board.receive_attack(3, 3).unwrap(),
        AttackResult::Hit { ship: id, sunk: false }
    );
    assert!(!board.all_ships_sunk());
    let last = board.receive_attack(4, 3).unwrap();
    assert!(last.is_hit());
    assert!(last.is_sunk());
    assert_eq!(last.ship(), Some(id));
    assert!(board.all_ships_sunk());
    assert_eq!(board.remaining_ships(), 0);
}

#[test]
fn test_miss_is_marked_and_idempotent() {
    let mut board = Board::new();
    let id = board.place_ship(&cruiser(), 0, 0, Orientation::Horizontal).unwrap();
    assert_eq!(board.receive_attack(5, 5).unwrap(), AttackResult::Miss);
    assert_eq!(board.cell(5, 5), Some(Cell::Miss));
    assert!(board.is_attacked(5, 5));
    assert_eq!(board.receive_attack(5, 5).unwrap(), AttackResult::Miss);
    assert_eq!(board.ship(id).unwrap().hits(), 0);
}

#[test]
fn test_repeat_hit_does_not_double_count() {
    let mut board = Board::new();
    let id = board.place_ship(&cruiser(), 0, 0, Orientation::Horizontal).unwrap();
    board.receive_attack(0, 0).unwrap();
    assert_eq!(board.cell(0, 0), Some(Cell::Hit(id)));
    assert_eq!(
        board.receive_attack(0, 0).unwrap(),
        AttackResult::Hit { ship: id, sunk: false }
    );
    assert_eq!(board.ship(id).unwrap().hits(), 1);
}

#[test]
fn test_out_of_bounds_attack_is_error() {
    let mut board = Board::new();
    assert_eq!(
        board.receive_attack(10, 3).unwrap_err(),
        BoardError::OutOfBounds { x: 10, y: 3 }
    );
    assert_eq!(
        board.receive_attack(0, 42).unwrap_err(),
        BoardError::OutOfBounds { x: 0, y: 42 }
    );
    assert_eq!(board.attacked_count(), 0);
}

#[test]
fn test_all_ships_sunk_requires_every_ship() {
    let mut board = Board::new();
    assert!(board.all_ships_sunk());
    board.deploy(2, 0, 0, Orientation::Horizontal).unwrap();
    board.deploy(3, 4, 4, Orientation::Horizontal).unwrap();
    board.receive_attack(0, 0).unwrap();
    board.receive_attack(1, 0).unwrap();
    assert!(!board.all_ships_sunk());
    assert_eq!(board.remaining_ships(), 1);
    for x in 4..7 {
        board.receive_attack(x, 4).unwrap();
    }
    assert!(board.all_ships_sunk());
}

#[test]
fn test_legal_placements_on_tiny_board() {
    let board = Board::with_size(3);
    let placements = board.legal_placements(&ShipDef::anonymous(3));
    assert_eq!(placements.len(), 6);
    assert!(placements.contains(&(Coordinate::new(0, 2), Orientation::Horizontal)));
    assert!(placements.contains(&(Coordinate::new(2, 0), Orientation::Vertical)));
}

#[test]
fn test_full_fleet_fits_by_hand() {
    let mut board = Board::new();
    let origins = [(0, 0), (0, 2), (0, 4), (0, 6), (0, 8)];
    for (def, (x, y)) in FLEET.iter().zip(origins) {
        assert!(board.place_ship(def, x, y, Orientation::Horizontal).is_some());
    }
    assert_eq!(board.ship_count(), 5);
}

#[test]
fn test_render_hides_unstruck_ships() {
    let mut board = Board::with_size(3);
    board.deploy(2, 0, 0, Orientation::Horizontal).unwrap();
    board.receive_attack(0, 0).unwrap();
    board.receive_attack(2, 2).unwrap();
    let hidden = board.render(false).to_string();
    let shown = board.render(true).to_string();
    assert_eq!(hidden, "    A B C\n 1  X . .\n 2  . . .\n 3  . . o\n");
    assert_eq!(shown, "    A B C\n 1  X S .\n 2  . . .\n 3  . . o\n");
    assert_eq!(board.to_string(), shown);
}
