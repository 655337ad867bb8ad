use cat_chase::{PlayConfig, RandomSpawner, SpawnSource};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn positions_stay_on_the_grid() {
    let config = PlayConfig::default();
    let mut spawner = RandomSpawner::new(StdRng::seed_from_u64(42), &config);
    let mut seen_edge = false;
    for _ in 0..2000 {
        let at = spawner.next_position();
        assert!((-8..=8).contains(&at.x), "x out of range: {at}");
        assert!((-8..=8).contains(&at.y), "y out of range: {at}");
        seen_edge |= at.x.abs() == 8 || at.y.abs() == 8;
    }
    assert!(seen_edge, "range end should be reachable");
}

#[test]
fn delays_are_whole_seconds_in_range() {
    let config = PlayConfig::default();
    let mut spawner = RandomSpawner::seeded(7, &config);
    let mut seen = [false; 6];
    for _ in 0..500 {
        let delay = spawner.next_delay();
        assert_eq!(delay.fract(), 0.0);
        assert!((1.0..=5.0).contains(&delay), "delay out of range: {delay}");
        seen[delay as usize] = true;
    }
    assert_eq!(seen, [false, true, true, true, true, true]);
}

#[test]
fn same_seed_same_sequence() {
    let config = PlayConfig::default();
    let mut a = RandomSpawner::seeded(3, &config);
    let mut b = RandomSpawner::seeded(3, &config);
    for _ in 0..20 {
        assert_eq!(a.next_position(), b.next_position());
        assert_eq!(a.next_delay(), b.next_delay());
    }
}

#[test]
fn extent_comes_from_config() {
    let config = PlayConfig {
        spawn_extent: 0,
        respawn_delay_min: 2,
        respawn_delay_max: 2,
        ..PlayConfig::default()
    };
    let mut spawner = RandomSpawner::seeded(1, &config);
    assert_eq!(spawner.next_position(), glam::IVec2::ZERO);
    assert_eq!(spawner.next_delay(), 2.0);
}
