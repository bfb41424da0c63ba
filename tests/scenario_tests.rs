use connect_four::{
    choose_column, has_four_in_a_row, Difficulty, GameSession, GameStatus, MoveError,
    MoveOutcome, Player, SessionError,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

// Alternating A/B drops that fill the 6x7 board without a four-in-a-row.
const TIE_SEQUENCE: [isize; 42] = [
    5, 3, 2, 3, 1, 5, 3, 1, 0, 1, 4, 1, 2, 5, 0, 5, 6, 6, 2, 0, 6, 0, 4, 2, 3, 0, 3, 4, 2, 3,
    2, 6, 0, 4, 1, 1, 5, 4, 4, 5, 6, 6,
];

#[test]
fn horizontal_line_wins_for_a() {
    let mut session = GameSession::standard();
    for (a, b) in [(0, 0), (1, 1), (2, 2)] {
        assert!(session.submit_move(a).unwrap().is_accepted());
        assert!(session.submit_move(b).unwrap().is_accepted());
    }
    let outcome = session.submit_move(3).unwrap();
    assert_eq!(outcome.status(), GameStatus::Won(Player::A));
    assert!(has_four_in_a_row(session.board(), Player::A));
    assert!(!has_four_in_a_row(session.board(), Player::B));
    assert_eq!(session.status(), GameStatus::Won(Player::A));
}

#[test]
fn full_board_without_runs_is_a_tie() {
    let mut session = GameSession::standard();
    for (i, &col) in TIE_SEQUENCE.iter().enumerate() {
        let outcome = session.submit_move(col).unwrap();
        assert!(outcome.is_accepted(), "move {} rejected", i + 1);
        if i + 1 < TIE_SEQUENCE.len() {
            assert!(matches!(outcome.status(), GameStatus::InProgress(_)));
        }
    }
    assert_eq!(session.status(), GameStatus::Tied);
    assert!(session.board().is_full());
    assert_eq!(session.history_entries().len(), 42);
    assert_eq!(
        session.submit_move(0),
        Err(SessionError::GameOver(GameStatus::Tied))
    );
}

#[test]
fn out_of_range_columns_are_rejected() {
    let mut session = GameSession::standard();
    session.submit_move(2).unwrap();
    for col in [-1, 7] {
        let outcome = session.submit_move(col).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Rejected {
                reason: MoveError::InvalidColumn(col),
                status: GameStatus::InProgress(Player::B),
            }
        );
        assert_eq!(session.status(), GameStatus::InProgress(Player::B));
        assert_eq!(session.history_entries().len(), 1);
    }
}

#[test]
fn full_column_is_rejected() {
    let mut session = GameSession::standard();
    for _ in 0..6 {
        assert!(session.submit_move(4).unwrap().is_accepted());
    }
    let board_before = *session.board();
    let outcome = session.submit_move(4).unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::Rejected {
            reason: MoveError::ColumnFull(4),
            status: GameStatus::InProgress(Player::A),
        }
    );
    assert_eq!(*session.board(), board_before);
    assert_eq!(session.move_count(), 6);
}

#[test]
fn drops_into_one_column_land_in_order() {
    let mut session = GameSession::standard();
    let rows: Vec<usize> = (0..6)
        .map(|_| match session.submit_move(1).unwrap() {
            MoveOutcome::Accepted { mv, .. } => mv.row,
            other => panic!("unexpected {:?}", other),
        })
        .collect();
    assert_eq!(rows, [0, 1, 2, 3, 4, 5]);
}

#[test]
fn easy_ai_spreads_over_all_columns() {
    let session = GameSession::standard();
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut counts = [0usize; 7];
    for _ in 0..1000 {
        let col = choose_column(
            session.board(),
            Difficulty::Easy,
            Player::B,
            Player::A,
            4,
            &mut rng,
        )
        .unwrap();
        counts[col] += 1;
    }
    for (col, &n) in counts.iter().enumerate() {
        assert!((80..=220).contains(&n), "column {} chosen {} times", col, n);
    }
}

#[test]
fn new_game_clears_ledger_and_board() {
    let mut session = GameSession::standard();
    for col in [0, 0, 1, 1, 2, 2, 3] {
        session.submit_move(col).unwrap();
    }
    assert!(session.status().is_terminal());
    session.new_game();
    assert_eq!(session.status(), GameStatus::InProgress(Player::A));
    assert!(session.history_entries().is_empty());
    assert_eq!(session.board().piece_count(), 0);
    assert!(session.submit_move(3).unwrap().is_accepted());
}
