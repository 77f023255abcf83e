//! Move and build legality, and applying them to a board.
//!
//! Validation and application are separate. The `validate_*` functions are
//! pure predicates over a [`Board`]; the `apply_*` functions mutate and trust
//! that the caller validated first. Human input, the immobilization check and
//! the heuristic search all query legality without touching the live board.

use crate::board::{Board, Coord, Direction, WorkerId};
use crate::constants::MAX_CLIMB;
use crate::error::{BuildError, MoveError};

/// The cell one step from `from` in `dir`. No bounds checking.
#[inline]
pub fn target_position(from: Coord, dir: Direction) -> Coord {
    from.step(dir)
}

/// Check whether `worker` may move one step in `dir`.
///
/// # Errors
/// - [`MoveError::OutOfBounds`] - target is off the grid
/// - [`MoveError::Occupied`] - another worker stands there
/// - [`MoveError::Blocked`] - target is domed
/// - [`MoveError::TooHigh`] - target is two or more levels above the worker
pub fn validate_move(
    board: &Board,
    worker: WorkerId,
    dir: Direction,
) -> Result<Direction, MoveError> {
    let to = target_position(board.position(worker), dir);
    let target = board.cell(to).ok_or(MoveError::OutOfBounds)?;

    if target.occupant.is_some() {
        return Err(MoveError::Occupied);
    }
    if target.is_capped() {
        return Err(MoveError::Blocked);
    }
    if target.height > board.worker_height(worker) + MAX_CLIMB {
        return Err(MoveError::TooHigh);
    }
    Ok(dir)
}

/// Check whether `worker` may build one step away in `dir`.
///
/// Height difference does not matter for building, and a level-3 tower may
/// be capped.
pub fn validate_build(
    board: &Board,
    worker: WorkerId,
    dir: Direction,
) -> Result<Direction, BuildError> {
    let to = target_position(board.position(worker), dir);
    let target = board.cell(to).ok_or(BuildError::OutOfBounds)?;

    if target.occupant.is_some() {
        return Err(BuildError::Occupied);
    }
    if target.is_capped() {
        return Err(BuildError::Blocked);
    }
    Ok(dir)
}

/// Move `worker` one step in `dir`. Must follow a successful [`validate_move`].
pub fn apply_move(board: &mut Board, worker: WorkerId, dir: Direction) -> Coord {
    debug_assert!(validate_move(board, worker, dir).is_ok());
    let to = target_position(board.position(worker), dir);
    board.place(worker, to);
    to
}

/// Add one level to the cell in `dir` from `from`. Must follow a successful
/// [`validate_build`]. Building on a level-3 tower caps it.
pub fn apply_build(board: &mut Board, dir: Direction, from: Coord) -> Coord {
    let to = target_position(from, dir);
    board.grid.raise(to);
    to
}

/// Directions in which `worker` can currently move.
pub fn legal_moves(board: &Board, worker: WorkerId) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&d| validate_move(board, worker, d).is_ok())
        .collect()
}

/// Directions in which `worker` can currently build.
pub fn legal_builds(board: &Board, worker: WorkerId) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&d| validate_build(board, worker, d).is_ok())
        .collect()
}

/// True iff at least one direction passes [`validate_move`].
pub fn can_worker_move(board: &Board, worker: WorkerId) -> bool {
    Direction::ALL
        .into_iter()
        .any(|d| validate_move(board, worker, d).is_ok())
}

/// True iff `worker` has a legal move followed by a legal build from where it
/// lands. Evaluated on a trial copy; `board` is untouched.
pub fn has_legal_turn(board: &Board, worker: WorkerId) -> bool {
    Direction::ALL.into_iter().any(|mv| {
        if validate_move(board, worker, mv).is_err() {
            return false;
        }
        let mut trial = *board;
        apply_move(&mut trial, worker, mv);
        Direction::ALL
            .into_iter()
            .any(|b| validate_build(&trial, worker, b).is_ok())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DOME, N};

    fn board_with(heights: &[((i8, i8), u8)]) -> Board {
        let mut board = Board::new();
        for &(at, h) in heights {
            board.grid.set_height(at.into(), h);
        }
        board
    }

    #[test]
    fn test_target_position_inverse() {
        for r in -1..=N as i8 {
            for c in -1..=N as i8 {
                let p = Coord::new(r, c);
                for d in Direction::ALL {
                    let there = target_position(p, d);
                    assert_eq!(target_position(there, d.opposite()), p);
                }
            }
        }
    }

    #[test]
    fn test_move_out_of_bounds() {
        let mut board = Board::new();
        board.place(WorkerId::A, Coord::new(4, 0));
        assert_eq!(
            validate_move(&board, WorkerId::A, Direction::S),
            Err(MoveError::OutOfBounds)
        );
        assert_eq!(
            validate_move(&board, WorkerId::A, Direction::W),
            Err(MoveError::OutOfBounds)
        );
        assert_eq!(
            validate_move(&board, WorkerId::A, Direction::N),
            Ok(Direction::N)
        );
    }

    #[test]
    fn test_move_occupied() {
        // A at (3,1), Y at (1,1): put A at (2,1) so Y is directly north.
        let mut board = Board::new();
        board.place(WorkerId::A, Coord::new(2, 1));
        assert_eq!(
            validate_move(&board, WorkerId::A, Direction::N),
            Err(MoveError::Occupied)
        );
    }

    #[test]
    fn test_move_height_rules() {
        // A stands at (3,1) on level 0.
        let board = board_with(&[((2, 1), 1), ((2, 0), 2), ((2, 2), 4)]);
        assert_eq!(
            validate_move(&board, WorkerId::A, Direction::N),
            Ok(Direction::N)
        );
        assert_eq!(
            validate_move(&board, WorkerId::A, Direction::NW),
            Err(MoveError::TooHigh)
        );
        assert_eq!(
            validate_move(&board, WorkerId::A, Direction::NE),
            Err(MoveError::Blocked)
        );
    }

    #[test]
    fn test_move_down_any_distance() {
        let mut board = board_with(&[((3, 1), 3)]);
        board.grid.set_height(Coord::new(4, 1), 0);
        assert_eq!(
            validate_move(&board, WorkerId::A, Direction::S),
            Ok(Direction::S)
        );
    }

    #[test]
    fn test_climb_exhaustive() {
        // For every start height h and target height t on an empty cell,
        // the move is legal iff t <= h + 1 and t is not a dome.
        for h in 0..=3u8 {
            for t in 0..=DOME {
                let board = board_with(&[((3, 1), h), ((2, 1), t)]);
                let result = validate_move(&board, WorkerId::A, Direction::N);
                if t >= DOME {
                    assert_eq!(result, Err(MoveError::Blocked), "h={h} t={t}");
                } else if t >= h + 2 {
                    assert_eq!(result, Err(MoveError::TooHigh), "h={h} t={t}");
                } else {
                    assert_eq!(result, Ok(Direction::N), "h={h} t={t}");
                }
            }
        }
    }

    #[test]
    fn test_build_rules() {
        let mut board = board_with(&[((2, 1), 3), ((4, 1), 4)]);
        assert_eq!(
            validate_build(&board, WorkerId::A, Direction::N),
            Ok(Direction::N)
        );
        assert_eq!(
            validate_build(&board, WorkerId::A, Direction::S),
            Err(BuildError::Blocked)
        );
        board.place(WorkerId::A, Coord::new(4, 4));
        assert_eq!(
            validate_build(&board, WorkerId::A, Direction::SE),
            Err(BuildError::OutOfBounds)
        );
        board.place(WorkerId::A, Coord::new(2, 3));
        // B sits at (1,3).
        assert_eq!(
            validate_build(&board, WorkerId::A, Direction::N),
            Err(BuildError::Occupied)
        );
    }

    #[test]
    fn test_build_ignores_height_difference() {
        let board = board_with(&[((2, 1), 3)]);
        assert!(validate_build(&board, WorkerId::A, Direction::N).is_ok());
    }

    #[test]
    fn test_apply_build_increments_then_caps() {
        let mut board = Board::new();
        let from = board.position(WorkerId::A);
        let at = target_position(from, Direction::N);
        for expected in 1..=DOME {
            validate_build(&board, WorkerId::A, Direction::N).unwrap();
            apply_build(&mut board, Direction::N, from);
            assert_eq!(board.height(at), Some(expected));
        }
        assert_eq!(
            validate_build(&board, WorkerId::A, Direction::N),
            Err(BuildError::Blocked)
        );
    }

    #[test]
    fn test_apply_move() {
        let mut board = Board::new();
        let to = apply_move(&mut board, WorkerId::A, Direction::N);
        assert_eq!(to, Coord::new(2, 1));
        assert_eq!(board.position(WorkerId::A), to);
        assert_eq!(board.occupant(Coord::new(3, 1)), None);
    }

    #[test]
    fn test_trapped_worker() {
        // A in the corner (0,0): (0,1) domed, (1,0) level 2, (1,1) holds Y.
        let mut board = board_with(&[((0, 1), 4), ((1, 0), 2)]);
        board.place(WorkerId::A, Coord::new(0, 0));
        assert!(!can_worker_move(&board, WorkerId::A));
        assert!(!has_legal_turn(&board, WorkerId::A));
        assert!(legal_moves(&board, WorkerId::A).is_empty());
    }

    #[test]
    fn test_legal_turn_builds_on_vacated_cell() {
        // After moving, the worker can always build where it came from.
        let mut board = Board::new();
        board.place(WorkerId::A, Coord::new(0, 0));
        board.place(WorkerId::Y, Coord::new(0, 1));
        board.place(WorkerId::B, Coord::new(1, 1));
        board.grid.set_height(Coord::new(1, 0), 1);
        assert!(has_legal_turn(&board, WorkerId::A));
        assert_eq!(legal_moves(&board, WorkerId::A), vec![Direction::S]);
    }
}
