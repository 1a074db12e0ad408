//! End-to-end pipeline tests against the headless app
//!
//! These drive the inbound queues directly and watch the event bus, the way
//! the platform layers and the presentation layer would.

use bevy::prelude::*;

use hoopshot::{
    Ball, BallId, BallRegistry, ContactEnded, ContactEvents, EventBus, GameEvent, GameTuning,
    HeadlessAppBuilder, HoopRing, PlacementEvents, PostPlacement, PowerFactor, ReleaseInfo,
    ScoreLedger, ThrowCommand, ThrowEvents,
};
use hoopshot::{BodyTag, RIM_FORWARD_OFFSET, RIM_HEIGHT};

fn queue_handles(app: &App) -> (ContactEvents, ThrowEvents, PlacementEvents) {
    (
        app.world().resource::<ContactEvents>().clone(),
        app.world().resource::<ThrowEvents>().clone(),
        app.world().resource::<PlacementEvents>().clone(),
    )
}

fn throw_resting_at(throws: &ThrowEvents, position: Vec3) {
    throws.0.push(ThrowCommand {
        release: ReleaseInfo {
            position,
            transform: Transform::from_translation(position),
        },
        power: PowerFactor {
            front: 0.0,
            up: 0.1,
        },
    });
}

fn drain_bus(app: &mut App) -> Vec<GameEvent> {
    app.world_mut()
        .resource_mut::<EventBus>()
        .export_events()
        .into_iter()
        .map(|(_, event)| event)
        .collect()
}

fn scripted_app() -> App {
    let tuning = GameTuning {
        ball_diameter: 0.0,
        ..Default::default()
    };
    HeadlessAppBuilder::new()
        .without_flight()
        .with_tuning(tuning)
        .build()
}

#[test]
fn outer_and_inner_in_the_same_tick_score_in_order() {
    let mut app = scripted_app();
    let (contacts, throws, placements) = queue_handles(&app);

    placements.0.push(PostPlacement {
        position: Vec3::ZERO,
        scale: 1.0,
    });
    app.update();
    throw_resting_at(&throws, Vec3::new(5.0, 0.0, 0.0));
    app.update();

    // both contacts arrive within one physics step
    contacts.0.push(ContactEnded {
        a: BodyTag::Ball(BallId(1)),
        b: BodyTag::OuterHoop,
    });
    contacts.0.push(ContactEnded {
        a: BodyTag::Ball(BallId(1)),
        b: BodyTag::InnerHoop,
    });
    app.update();

    assert_eq!(app.world().resource::<ScoreLedger>().total(), 1);
}

#[test]
fn score_events_carry_the_running_total() {
    let mut app = scripted_app();
    let (contacts, throws, placements) = queue_handles(&app);

    placements.0.push(PostPlacement {
        position: Vec3::ZERO,
        scale: 1.0,
    });
    app.update();

    for (ball, position) in [(1, Vec3::new(5.0, 0.0, 0.0)), (2, Vec3::new(10.0, 0.0, 0.0))] {
        throw_resting_at(&throws, position);
        app.update();
        contacts.0.push(ContactEnded {
            a: BodyTag::Ball(BallId(ball)),
            b: BodyTag::OuterHoop,
        });
        contacts.0.push(ContactEnded {
            a: BodyTag::Ball(BallId(ball)),
            b: BodyTag::InnerHoop,
        });
        app.update();
    }

    let events = drain_bus(&mut app);
    let totals: Vec<(u32, u32)> = events
        .iter()
        .filter_map(|event| match event {
            GameEvent::Score { points, total, .. } => Some((*points, *total)),
            _ => None,
        })
        .collect();

    assert_eq!(totals, vec![(1, 1), (3, 4)]);
}

#[test]
fn eviction_reaches_the_scene_and_the_bus() {
    let mut app = scripted_app();
    let (_, throws, placements) = queue_handles(&app);

    placements.0.push(PostPlacement {
        position: Vec3::ZERO,
        scale: 1.0,
    });
    for n in 0..11 {
        throw_resting_at(&throws, Vec3::new(n as f32, 0.0, 2.0));
    }
    app.update();

    let registry = app.world().resource::<BallRegistry>();
    assert_eq!(registry.len(), 10);
    assert!(!registry.contains(BallId(1)));
    assert_eq!(registry.oldest(), Some(BallId(2)));

    // exactly one eviction was announced, for the first ball
    let events = drain_bus(&mut app);
    let evicted: Vec<BallId> = events
        .iter()
        .filter_map(|event| match event {
            GameEvent::BallEvicted { ball } => Some(*ball),
            _ => None,
        })
        .collect();
    assert_eq!(evicted, vec![BallId(1)]);

    // the entity itself is gone from the scene
    let mut balls = app.world_mut().query_filtered::<(), With<Ball>>();
    assert_eq!(balls.iter(app.world()).count(), 10);
}

#[test]
fn drop_shot_scores_through_the_flight_model() {
    let mut app = HeadlessAppBuilder::new().build();
    let (_, throws, placements) = queue_handles(&app);

    placements.0.push(PostPlacement {
        position: Vec3::ZERO,
        scale: 1.0,
    });
    app.update();

    // released just above the rim, falling straight down through both sensors
    let outer_sensor = Vec3::new(0.0, RIM_HEIGHT, RIM_FORWARD_OFFSET);
    let position = outer_sensor + Vec3::Y * 0.8;
    let transform = Transform::from_translation(position).looking_at(position - Vec3::Y, Vec3::Z);
    throws.0.push(ThrowCommand {
        release: ReleaseInfo {
            position,
            transform,
        },
        power: PowerFactor {
            front: 0.05,
            up: 1.0,
        },
    });

    let mut events = Vec::new();
    for _ in 0..180 {
        app.update();
        events.extend(drain_bus(&mut app));
    }

    assert_eq!(
        app.world().resource::<ScoreLedger>().total(),
        1,
        "the drop shot should have scored; events: {events:?}"
    );

    // the bus saw the outer pass before the inner pass, then the score
    let passes: Vec<HoopRing> = events
        .iter()
        .filter_map(|event| match event {
            GameEvent::HoopPass { ring, .. } => Some(*ring),
            _ => None,
        })
        .collect();
    assert_eq!(passes, vec![HoopRing::Outer, HoopRing::Inner]);
    assert!(
        events
            .iter()
            .any(|event| matches!(event, GameEvent::Score { points: 1, .. }))
    );
}
