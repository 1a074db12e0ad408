//! TOML-scripted scoring scenarios
//!
//! Scenario files drive the real game pipeline through the inbound queues -
//! the same path the platform layers use - and assert on the ledger and
//! registry between steps. Flight is disabled; the script stands in for the
//! physics engine.

use bevy::prelude::*;
use serde::Deserialize;

use crate::ball::{BallId, BallRegistry, ReleaseInfo};
use crate::bridge::{
    BodyTag, ContactEnded, ContactEvents, PlacementEvents, PostPlacement, ThrowCommand,
    ThrowEvents,
};
use crate::input::PowerFactor;
use crate::scoring::ScoreLedger;
use crate::simulation::HeadlessAppBuilder;
use crate::tuning::GameTuning;

/// A scripted scenario
#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// One scripted step
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// Place the post (first placement wins)
    PlacePost {
        #[serde(default)]
        at: Option<[f32; 3]>,
        scale: f32,
    },
    /// Throw a ball that comes to rest at `at`
    Throw { at: [f32; 3] },
    /// Report an outer-ring contact for a ball
    Outer { ball: u64 },
    /// Report an inner-ring contact for a ball
    Inner { ball: u64 },
    /// Teleport a ball (its position at the next contact matters for points)
    MoveBall { ball: u64, to: [f32; 3] },
    /// Assert the running total
    ExpectTotal { total: u32 },
    /// Assert the number of ledger entries
    ExpectEntries { count: usize },
    /// Assert how many balls the registry holds
    ExpectRegistry { len: usize },
    /// Assert a ball has been evicted
    ExpectEvicted { ball: u64 },
}

/// Parse a scenario from TOML text
pub fn parse_scenario(text: &str) -> Result<Scenario, String> {
    toml::from_str(text).map_err(|e| format!("Failed to parse scenario: {}", e))
}

/// Drives a headless app through scenario steps
pub struct ScenarioRunner {
    app: App,
    contacts: ContactEvents,
    throws: ThrowEvents,
    placements: PlacementEvents,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        // zero ball diameter so a thrown ball rests exactly at its script position
        let tuning = GameTuning {
            ball_diameter: 0.0,
            ..Default::default()
        };
        let app = HeadlessAppBuilder::new()
            .without_flight()
            .with_tuning(tuning)
            .build();
        let contacts = app.world().resource::<ContactEvents>().clone();
        let throws = app.world().resource::<ThrowEvents>().clone();
        let placements = app.world().resource::<PlacementEvents>().clone();
        Self {
            app,
            contacts,
            throws,
            placements,
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Run every step, failing with context on the first broken expectation
    pub fn run(&mut self, scenario: &Scenario) -> Result<(), String> {
        for (index, step) in scenario.steps.iter().enumerate() {
            self.run_step(step)
                .map_err(|e| format!("[{}] step #{}: {}", scenario.name, index + 1, e))?;
        }
        Ok(())
    }

    fn run_step(&mut self, step: &Step) -> Result<(), String> {
        match step {
            Step::PlacePost { at, scale } => {
                let position = at.map(Vec3::from).unwrap_or(Vec3::ZERO);
                self.placements.0.push(PostPlacement {
                    position,
                    scale: *scale,
                });
                self.app.update();
            }
            Step::Throw { at } => {
                let position = Vec3::from(*at);
                self.throws.0.push(ThrowCommand {
                    release: ReleaseInfo {
                        position,
                        transform: Transform::from_translation(position),
                    },
                    power: PowerFactor {
                        front: 0.0,
                        up: 0.1,
                    },
                });
                self.app.update();
            }
            Step::Outer { ball } => {
                self.contacts.0.push(ContactEnded {
                    a: BodyTag::Ball(BallId(*ball)),
                    b: BodyTag::OuterHoop,
                });
                self.app.update();
            }
            Step::Inner { ball } => {
                self.contacts.0.push(ContactEnded {
                    a: BodyTag::InnerHoop,
                    b: BodyTag::Ball(BallId(*ball)),
                });
                self.app.update();
            }
            Step::MoveBall { ball, to } => {
                let id = BallId(*ball);
                let entity = self
                    .app
                    .world()
                    .resource::<BallRegistry>()
                    .entity_of(id)
                    .ok_or_else(|| format!("{id} is not registered"))?;
                let mut transform = self
                    .app
                    .world_mut()
                    .get_mut::<Transform>(entity)
                    .ok_or_else(|| format!("{id} has no transform"))?;
                transform.translation = Vec3::from(*to);
            }
            Step::ExpectTotal { total } => {
                let actual = self.app.world().resource::<ScoreLedger>().total();
                if actual != *total {
                    return Err(format!("expected total {total}, got {actual}"));
                }
            }
            Step::ExpectEntries { count } => {
                let actual = self.app.world().resource::<ScoreLedger>().len();
                if actual != *count {
                    return Err(format!("expected {count} ledger entries, got {actual}"));
                }
            }
            Step::ExpectRegistry { len } => {
                let actual = self.app.world().resource::<BallRegistry>().len();
                if actual != *len {
                    return Err(format!("expected {len} registered balls, got {actual}"));
                }
            }
            Step::ExpectEvicted { ball } => {
                let registry = self.app.world().resource::<BallRegistry>();
                if registry.contains(BallId(*ball)) {
                    return Err(format!("ball#{ball} should have been evicted"));
                }
            }
        }
        Ok(())
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scenario_from_toml() {
        let toml = r#"
            name = "one swish"

            [[step]]
            kind = "place_post"
            scale = 1.0

            [[step]]
            kind = "throw"
            at = [5.0, 0.0, 0.0]

            [[step]]
            kind = "expect_total"
            total = 0
        "#;

        let scenario = parse_scenario(toml).unwrap();
        assert_eq!(scenario.name, "one swish");
        assert_eq!(scenario.steps.len(), 3);
        assert!(matches!(scenario.steps[0], Step::PlacePost { scale, .. } if scale == 1.0));
    }

    #[test]
    fn test_unknown_step_kind_is_an_error() {
        let toml = r#"
            name = "broken"

            [[step]]
            kind = "moonwalk"
        "#;
        assert!(parse_scenario(toml).is_err());
    }
}
