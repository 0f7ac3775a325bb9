//! Tests for the timed reset lifecycle on a tokio task.
//!
//! The clock starts paused so the reset delay is advanced virtually.

use std::time::Duration;
use tictactoe_round::{
    GameState, Lifecycle, Mark, Player, RoundEvent, RoundResult, RoundSession, RoundSettings,
    SessionHandle,
};
use tokio::sync::mpsc;
use tokio::time::{Instant, advance};

const TOP_ROW_WIN: [(usize, usize); 5] = [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)];

const DRAW: [(usize, usize); 9] = [
    (0, 0),
    (1, 1),
    (0, 2),
    (0, 1),
    (2, 1),
    (1, 0),
    (1, 2),
    (2, 2),
    (2, 0),
];

fn drain(rx: &mut mpsc::UnboundedReceiver<RoundEvent>) -> Vec<RoundEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// Stops any session, whatever observer it carries.
async fn stop<O>(session: &mut SessionHandle<O>) -> Option<Lifecycle> {
    session.shutdown().await.map(|controller| controller.lifecycle())
}

fn count(events: &[RoundEvent], wanted: fn(&RoundEvent) -> bool) -> usize {
    events.iter().filter(|event| wanted(event)).count()
}

#[tokio::test(start_paused = true)]
async fn test_win_freezes_then_resets_after_delay() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut session = RoundSession::spawn(tx, RoundSettings::new());

    for (row, col) in TOP_ROW_WIN {
        assert!(session.tap(row, col));
    }
    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(
        snapshot.lifecycle,
        Lifecycle::Resolved(RoundResult::Win(Player::X))
    );
    let frozen = snapshot.state;

    advance(Duration::from_millis(4999)).await;
    session.tap(2, 0);
    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot.state, frozen);
    assert!(matches!(snapshot.lifecycle, Lifecycle::Resolved(_)));

    let events = drain(&mut rx);
    assert_eq!(count(&events, |e| matches!(e, RoundEvent::PlayerWon(Player::X))), 1);
    assert_eq!(count(&events, |e| matches!(e, RoundEvent::NewRound)), 0);

    advance(Duration::from_millis(1)).await;
    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot.lifecycle, Lifecycle::Accepting);
    assert_eq!(snapshot.state, GameState::new());
    assert_eq!(snapshot.state.active_player(), Player::X);

    let events = drain(&mut rx);
    assert_eq!(count(&events, |e| matches!(e, RoundEvent::NewRound)), 1);
    assert_eq!(count(&events, |e| matches!(e, RoundEvent::PlayerWon(_))), 0);

    session.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_new_round_waits_full_delay() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _session = {
        let session = RoundSession::spawn(tx, RoundSettings::new());
        for (row, col) in TOP_ROW_WIN {
            session.tap(row, col);
        }
        session
    };

    let mut resolved_at = None;
    while let Some(event) = rx.recv().await {
        match event {
            RoundEvent::PlayerWon(_) => resolved_at = Some(Instant::now()),
            RoundEvent::NewRound => break,
            _ => {}
        }
    }

    let resolved_at = resolved_at.expect("win observed before new round");
    assert!(resolved_at.elapsed() >= Duration::from_millis(5000));
}

#[tokio::test(start_paused = true)]
async fn test_draw_resets_without_win() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut session = RoundSession::spawn(tx, RoundSettings::new());

    for (row, col) in DRAW {
        session.tap(row, col);
    }
    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot.lifecycle, Lifecycle::Resolved(RoundResult::Draw));

    advance(Duration::from_millis(5000)).await;
    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot.lifecycle, Lifecycle::Accepting);

    let events = drain(&mut rx);
    assert_eq!(count(&events, |e| matches!(e, RoundEvent::PlayerWon(_))), 0);
    assert_eq!(count(&events, |e| matches!(e, RoundEvent::Draw)), 1);
    assert_eq!(count(&events, |e| matches!(e, RoundEvent::NewRound)), 1);

    session.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_cancels_pending_reset() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut session = RoundSession::spawn(tx, RoundSettings::new());

    for (row, col) in TOP_ROW_WIN {
        session.tap(row, col);
    }
    session.snapshot().await.unwrap();

    let controller = session.shutdown().await.expect("controller returned");
    assert_eq!(
        controller.lifecycle(),
        Lifecycle::Resolved(RoundResult::Win(Player::X))
    );
    assert_eq!(controller.rounds_completed(), 0);
    drop(controller);

    advance(Duration::from_secs(10)).await;
    let mut new_rounds = 0;
    while let Some(event) = rx.recv().await {
        if event == RoundEvent::NewRound {
            new_rounds += 1;
        }
    }
    assert_eq!(new_rounds, 0);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_is_idempotent() {
    let mut session = RoundSession::spawn((), RoundSettings::new());

    assert!(session.shutdown().await.is_some());
    assert!(session.shutdown().await.is_none());
    assert!(!session.tap(0, 0));
    assert!(session.snapshot().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_after_reset_completed() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut session = RoundSession::spawn(tx, RoundSettings::new());

    for (row, col) in TOP_ROW_WIN {
        session.tap(row, col);
    }
    session.snapshot().await.unwrap();
    advance(Duration::from_millis(5000)).await;
    session.snapshot().await.unwrap();

    let controller = session.shutdown().await.unwrap();
    assert!(controller.is_accepting());
    assert_eq!(controller.rounds_completed(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_custom_reset_delay() {
    let settings = RoundSettings::new().with_reset_delay(Duration::from_millis(250));
    let mut session = RoundSession::spawn((), settings);

    for (row, col) in TOP_ROW_WIN {
        session.tap(row, col);
    }
    session.snapshot().await.unwrap();
    advance(Duration::from_millis(250)).await;

    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot.lifecycle, Lifecycle::Accepting);
    session.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_due_reset_applies_before_queued_tap() {
    let mut session = RoundSession::spawn((), RoundSettings::new());

    for (row, col) in TOP_ROW_WIN {
        session.tap(row, col);
    }
    session.snapshot().await.unwrap();

    advance(Duration::from_millis(5000)).await;
    assert!(session.tap(1, 1));

    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot.lifecycle, Lifecycle::Accepting);
    assert_eq!(snapshot.state.cell(1, 1), Mark::Occupied(Player::X));
    assert_eq!(snapshot.state.cell(0, 0), Mark::Empty);
    assert_eq!(snapshot.state.move_count(), 1);
    assert_eq!(snapshot.state.active_player(), Player::O);
    session.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_from_generic_caller() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut session = RoundSession::spawn(tx, RoundSettings::new());
    session.tap(1, 1);
    session.snapshot().await.unwrap();

    assert_eq!(stop(&mut session).await, Some(Lifecycle::Accepting));
    assert_eq!(stop(&mut session).await, None);
}
