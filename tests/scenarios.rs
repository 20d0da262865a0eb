//! End-to-end round scenarios

use glam::Vec2;

use immune_rush::Settings;
use immune_rush::audio::{NullAudio, Soundtrack};
use immune_rush::platform::{Driver, NullRenderer};
use immune_rush::sim::{
    DriverEvent, EndReason, EntityKind, Extents, GameEvent, GamePhase, GameState, SimConfig,
    handle_event,
};

fn ended(events: &[GameEvent]) -> usize {
    events.iter().filter(|e| matches!(e, GameEvent::Ended(_))).count()
}

#[test]
fn overlapping_pathogen_is_cleared_for_ten_points() {
    let config = SimConfig {
        extents: Extents::uniform(15.0),
        ..Default::default()
    };
    let mut state = GameState::new(config, 1);
    handle_event(&mut state, &DriverEvent::Activate);
    state.place_player(Vec2::new(400.0, 300.0));
    let id = state
        .insert_entity(EntityKind::Virus, Vec2::new(405.0, 305.0))
        .expect("running");

    let events = handle_event(&mut state, &DriverEvent::MovementTick);
    assert_eq!(
        events,
        vec![GameEvent::Collected {
            id,
            kind: EntityKind::Virus,
            reward: 10
        }]
    );
    assert_eq!(state.score(), 10);
    assert!(state.entities().is_empty());

    // Nothing left to collect
    assert!(handle_event(&mut state, &DriverEvent::MovementTick).is_empty());
    assert_eq!(state.score(), 10);
}

#[test]
fn sixty_clock_ticks_end_the_round_without_scoring() {
    let mut state = GameState::new(SimConfig::default(), 2);
    assert_eq!(state.phase(), GamePhase::Idle);
    handle_event(&mut state, &DriverEvent::Activate);

    let mut all = Vec::new();
    for _ in 0..60 {
        all.extend(handle_event(&mut state, &DriverEvent::ClockTick));
    }
    assert_eq!(ended(&all), 1);
    assert_eq!(state.phase(), GamePhase::Ended);
    assert_eq!(state.score(), 0);
    assert_eq!(state.session().last_end(), Some(EndReason::TimeUp));
}

#[test]
fn restart_from_ended_goes_straight_to_running() {
    let mut state = GameState::new(SimConfig::default(), 3);
    handle_event(&mut state, &DriverEvent::Activate);
    for _ in 0..10 {
        handle_event(&mut state, &DriverEvent::SpawnTick);
    }
    handle_event(&mut state, &DriverEvent::Quit);
    assert_eq!(state.phase(), GamePhase::Ended);
    assert_eq!(state.entities().len(), 10);

    let events = handle_event(&mut state, &DriverEvent::Activate);
    assert_eq!(events, vec![GameEvent::Started { restarted: true }]);
    assert_eq!(state.phase(), GamePhase::Running);
    assert!(state.entities().is_empty());
    assert_eq!(state.remaining(), 60);
    assert_eq!(state.score(), 0);
}

#[test]
fn driver_runs_a_classic_round() {
    let settings = Settings {
        seed: Some(77),
        ..Settings::classic()
    };
    let mut driver = Driver::from_settings(
        &settings,
        Extents::default(),
        77,
        NullRenderer,
        Soundtrack::new(None),
    );
    driver.push(DriverEvent::Activate);

    let mut spawned = 0;
    let mut all = Vec::new();
    for _ in 0..61 {
        for ev in driver.advance(1000) {
            if let GameEvent::Spawned { kind, .. } = ev {
                assert!(kind.is_pathogen());
                spawned += 1;
            }
            all.push(ev);
        }
    }
    // Fixed 2 s policy: spawns at 2, 4, ... 60 s minus the one racing the end
    assert!((29..=30).contains(&spawned), "spawned {spawned}");
    assert_eq!(ended(&all), 1);
    assert_eq!(driver.state().phase(), GamePhase::Ended);
    assert!(!driver.audio().is_playing());
}

#[test]
fn same_seed_same_round() {
    let run = || {
        let mut driver = Driver::from_settings(
            &Settings::default(),
            Extents::default(),
            4242,
            NullRenderer,
            NullAudio,
        );
        driver.push(DriverEvent::Activate);
        driver.push(DriverEvent::KeyDown(immune_rush::sim::Direction::Left));
        let mut events = Vec::new();
        for _ in 0..400 {
            events.extend(driver.advance(33));
        }
        (events, driver.state().snapshot())
    };
    assert_eq!(run(), run());
}

#[test]
fn resize_keeps_the_round_running() {
    let mut state = GameState::new(SimConfig::default(), 5);
    handle_event(&mut state, &DriverEvent::Activate);
    handle_event(
        &mut state,
        &DriverEvent::Resize {
            width: 1200.0,
            height: 800.0,
        },
    );
    assert_eq!(state.phase(), GamePhase::Running);
    assert_eq!(state.play_field().max, Vec2::new(1150.0, 660.0));

    // A window too small for a play field is ignored
    handle_event(&mut state, &DriverEvent::Resize { width: 10.0, height: 10.0 });
    assert_eq!(state.play_field().max, Vec2::new(1150.0, 660.0));
}

#[test]
fn pickups_never_crowd_out_pathogens() {
    let mut driver = Driver::from_settings(
        &Settings::default(),
        Extents::default(),
        1,
        NullRenderer,
        NullAudio,
    );
    driver.push(DriverEvent::Activate);

    let mut elapsed = 0u64;
    let mut late_pathogens = 0;
    while elapsed < 20_000 {
        for ev in driver.advance(16) {
            if let GameEvent::Spawned { kind, .. } = ev {
                if kind.is_pathogen() && elapsed >= 15_000 {
                    late_pathogens += 1;
                }
            }
        }
        elapsed += 16;
    }

    let state = driver.state();
    let pickups = state
        .entities()
        .iter()
        .filter(|e| e.kind == EntityKind::WhiteBloodCell)
        .count();
    assert!(pickups > 0);
    assert!(late_pathogens > 0, "no pathogen spawned between 15 s and 20 s");
    assert!(state.active_in_pool(EntityKind::Bacterium) <= 32);
}
