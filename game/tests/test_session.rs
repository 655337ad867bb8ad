mod common;

use cat_chase::{MouseId, RespawnCheck, Session};
use common::ScriptedSpawner;
use glam::IVec2;

fn far_spawner() -> ScriptedSpawner {
    ScriptedSpawner::always(IVec2::new(8, 8), 1.0)
}

// ── construction ─────────────────────────────────────────────────────────────

#[test]
fn new_session_queues_every_mouse_in_order() {
    let session = Session::new(8, 1.0);
    let order: Vec<usize> = session.retired().map(MouseId::index).collect();
    assert_eq!(order, (0..8).collect::<Vec<_>>());
    assert_eq!(session.score(), 0);
    assert!(!session.is_over());
}

// ── respawn timer ────────────────────────────────────────────────────────────

#[test]
fn waits_until_threshold_is_reached() {
    let mut session = Session::new(8, 1.0);
    let mut spawner = far_spawner();
    assert_eq!(session.advance(0.4, &mut spawner), RespawnCheck::Waiting);
    assert_eq!(session.advance(0.4, &mut spawner), RespawnCheck::Waiting);
    match session.advance(0.25, &mut spawner) {
        RespawnCheck::Respawn { mouse, at } => {
            assert_eq!(mouse.index(), 0);
            assert_eq!(at, IVec2::new(8, 8));
        }
        other => panic!("expected a respawn, got {other:?}"),
    }
    assert_eq!(session.retired_count(), 7);
}

#[test]
fn respawns_oldest_first_and_draws_new_delay() {
    let mut session = Session::new(8, 1.0);
    let mut spawner = far_spawner();
    spawner.delays.push_back(3.0);

    assert!(matches!(session.advance(1.0, &mut spawner), RespawnCheck::Respawn { .. }));
    assert_eq!(session.time_to_respawn(), 3.0);

    // Two seconds in, the three second delay has not run out.
    assert_eq!(session.advance(2.0, &mut spawner), RespawnCheck::Waiting);
    match session.advance(1.0, &mut spawner) {
        RespawnCheck::Respawn { mouse, .. } => assert_eq!(mouse.index(), 1),
        other => panic!("expected a respawn, got {other:?}"),
    }
}

#[test]
fn at_most_one_respawn_per_check() {
    let mut session = Session::new(8, 1.0);
    let mut spawner = far_spawner();
    assert!(matches!(session.advance(10.0, &mut spawner), RespawnCheck::Respawn { .. }));
    assert_eq!(session.retired_count(), 7);
    // Leftover time carries over to the next check.
    assert!(matches!(session.advance(0.0, &mut spawner), RespawnCheck::Respawn { .. }));
    assert_eq!(session.retired_count(), 6);
}

#[test]
fn retired_mouse_goes_to_back_of_queue() {
    let mut session = Session::new(2, 1.0);
    let mut spawner = far_spawner();
    let first = match session.advance(1.0, &mut spawner) {
        RespawnCheck::Respawn { mouse, .. } => mouse,
        other => panic!("expected a respawn, got {other:?}"),
    };
    session.retire(first);
    let order: Vec<usize> = session.retired().map(MouseId::index).collect();
    assert_eq!(order, [1, 0]);
    assert_eq!(session.score(), 1);
}

// ── game over ────────────────────────────────────────────────────────────────

#[test]
fn empty_queue_ends_the_game_exactly_once() {
    let mut session = Session::new(8, 1.0);
    let mut spawner = far_spawner();
    for _ in 0..8 {
        assert!(matches!(session.advance(1.0, &mut spawner), RespawnCheck::Respawn { .. }));
        assert!(!session.is_over());
    }
    assert_eq!(session.retired_count(), 0);
    assert!(!session.is_over());

    assert_eq!(session.advance(0.0, &mut spawner), RespawnCheck::GameOver);
    assert!(session.is_over());
    for _ in 0..5 {
        assert_eq!(session.advance(1.0, &mut spawner), RespawnCheck::GameOver);
        assert!(session.is_over());
    }
}

#[test]
fn score_counts_every_retirement() {
    let mut session = Session::new(8, 1.0);
    let mut spawner = far_spawner();
    let mut expected = 0;
    for _ in 0..20 {
        if let RespawnCheck::Respawn { mouse, .. } = session.advance(1.0, &mut spawner) {
            session.retire(mouse);
            expected += 1;
        }
        assert_eq!(session.score(), expected);
        assert_eq!(session.retired_count(), 8);
    }
    assert!(!session.is_over());
}
