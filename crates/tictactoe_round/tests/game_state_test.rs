//! Tests for board evaluation through the public GameState API.

use tictactoe_round::{GameState, Mark, MoveError, Player, Position, RoundResult};

/// Plays `moves` alternately starting with X, passing the turn like a controller would.
fn play(moves: &[(usize, usize)]) -> GameState {
    moves.iter().fold(GameState::new(), |state, &(row, col)| {
        let player = state.active_player();
        state
            .place(row, col, player)
            .expect("legal move")
            .with_active_player(player.toggle())
    })
}

#[test]
fn test_new_board_is_empty_with_x_to_move() {
    let state = GameState::new();
    assert_eq!(state.active_player(), Player::X);
    assert!(state.marks().iter().all(|mark| *mark == Mark::Empty));
    assert_eq!(state.result(), RoundResult::InProgress);
}

#[test]
fn test_partial_line_is_not_a_win() {
    let state = play(&[(0, 0), (1, 1), (0, 1)]);
    assert_eq!(state.winner(), None);
    assert_eq!(state.result(), RoundResult::InProgress);
}

#[test]
fn test_top_row_win() {
    let state = play(&[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert_eq!(state.winner(), Some(Player::X));
    assert_eq!(state.result(), RoundResult::Win(Player::X));
}

#[test]
fn test_o_wins_column() {
    let state = play(&[(0, 0), (0, 1), (2, 2), (1, 1), (1, 0), (2, 1)]);
    assert_eq!(state.result(), RoundResult::Win(Player::O));
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / O O X / X X O
    let state = play(&[
        (0, 0),
        (1, 1),
        (0, 2),
        (0, 1),
        (2, 1),
        (1, 0),
        (1, 2),
        (2, 2),
        (2, 0),
    ]);
    assert!(state.is_full());
    assert_eq!(state.winner(), None);
    assert_eq!(state.result(), RoundResult::Draw);
}

#[test]
fn test_winning_last_move_is_win_not_draw() {
    // Last X completes the main diagonal while filling the board.
    let state = play(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ]);
    assert!(state.is_full());
    assert_eq!(state.result(), RoundResult::Win(Player::X));
}

#[test]
fn test_place_leaves_turn_to_caller() {
    let state = GameState::new().place(2, 0, Player::O).unwrap();
    assert_eq!(state.active_player(), Player::X);
    assert_eq!(state.cell(2, 0), Mark::Occupied(Player::O));
}

#[test]
fn test_invalid_moves() {
    let state = play(&[(1, 1)]);
    assert_eq!(
        state.place(1, 1, Player::O),
        Err(MoveError::Occupied(Position::Center))
    );
    assert_eq!(
        state.place(0, 5, Player::O),
        Err(MoveError::OutOfBounds { row: 0, col: 5 })
    );
    assert!(
        state
            .place(1, 1, Player::O)
            .unwrap_err()
            .to_string()
            .contains("occupied")
    );
}

#[test]
fn test_alternating_play_stays_consistent() {
    let moves = [(0, 0), (1, 1), (0, 2), (0, 1), (2, 1), (1, 0), (1, 2), (2, 2)];
    for n in 0..=moves.len() {
        assert!(play(&moves[..n]).is_consistent());
    }
}

const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

fn owns_line(state: &GameState, player: Player) -> bool {
    LINES.iter().any(|line| {
        line.iter()
            .all(|&(row, col)| state.cell(row, col) == Mark::Occupied(player))
    })
}

#[derive(Debug, Default, PartialEq)]
struct Tally {
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

/// Visits every position reachable by alternating legal play, stopping at
/// terminal boards.
fn explore(state: GameState, tally: &mut Tally) {
    assert!(state.is_consistent(), "{state}");

    let owner = match (owns_line(&state, Player::X), owns_line(&state, Player::O)) {
        (true, true) => panic!("both players own a line:\n{state}"),
        (true, false) => Some(Player::X),
        (false, true) => Some(Player::O),
        (false, false) => None,
    };
    assert_eq!(state.winner(), owner, "{state}");

    match state.result() {
        RoundResult::Win(Player::X) => {
            tally.x_wins += 1;
            return;
        }
        RoundResult::Win(Player::O) => {
            tally.o_wins += 1;
            return;
        }
        RoundResult::Draw => {
            assert!(state.is_full() && owner.is_none(), "{state}");
            tally.draws += 1;
            return;
        }
        RoundResult::InProgress => assert!(!state.is_full() && owner.is_none(), "{state}"),
    }

    let player = state.active_player();
    for pos in Position::ALL {
        if state.cell_at(pos).is_empty() {
            let next = state
                .place_at(pos, player)
                .expect("empty cell")
                .with_active_player(player.toggle());
            explore(next, tally);
        }
    }
}

#[test]
fn test_every_alternating_game_evaluates_correctly() {
    let mut tally = Tally::default();
    explore(GameState::new(), &mut tally);
    assert_eq!(
        tally,
        Tally {
            x_wins: 131_184,
            o_wins: 77_904,
            draws: 46_080,
        }
    );
}
