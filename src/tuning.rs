//! Data-driven game balance
//!
//! One immutable [`Tuning`] record is built at startup (defaults or JSON) and
//! shared by `Arc` with the simulation. Components only ever see `&` sub-records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors raised while loading or validating a tuning file
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed JSON, unknown size/power-up tag)
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Values parse but are inconsistent
    #[error("Invalid tuning: {0}")]
    Invalid(String),
}

/// Asteroid size tiers, smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AsteroidSize {
    Small,
    Medium,
    Large,
    Huge,
}

impl AsteroidSize {
    pub const ALL: [AsteroidSize; 4] = [
        AsteroidSize::Small,
        AsteroidSize::Medium,
        AsteroidSize::Large,
        AsteroidSize::Huge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AsteroidSize::Small => "small",
            AsteroidSize::Medium => "medium",
            AsteroidSize::Large => "large",
            AsteroidSize::Huge => "huge",
        }
    }
}

impl fmt::Display for AsteroidSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AsteroidSize {
    type Err = TuningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" => Ok(AsteroidSize::Small),
            "medium" => Ok(AsteroidSize::Medium),
            "large" => Ok(AsteroidSize::Large),
            "huge" => Ok(AsteroidSize::Huge),
            other => Err(TuningError::Invalid(format!("unknown asteroid size '{other}'"))),
        }
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PowerUpKind {
    Shield,
    RapidFire,
    Bomb,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [PowerUpKind::Shield, PowerUpKind::RapidFire, PowerUpKind::Bomb];

    pub fn as_str(&self) -> &'static str {
        match self {
            PowerUpKind::Shield => "shield",
            PowerUpKind::RapidFire => "rapidFire",
            PowerUpKind::Bomb => "bomb",
        }
    }

    /// Display color (0xRRGGBB) used for pickups and their collection burst
    pub fn color(&self) -> u32 {
        match self {
            PowerUpKind::Shield => 0x00aaff,
            PowerUpKind::RapidFire => 0xff4444,
            PowerUpKind::Bomb => 0xff8800,
        }
    }
}

impl fmt::Display for PowerUpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PowerUpKind {
    type Err = TuningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shield" => Ok(PowerUpKind::Shield),
            "rapidFire" => Ok(PowerUpKind::RapidFire),
            "bomb" => Ok(PowerUpKind::Bomb),
            other => Err(TuningError::Invalid(format!("unknown power-up '{other}'"))),
        }
    }
}

/// What an asteroid breaks into when destroyed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSpec {
    pub into: AsteroidSize,
    pub count: u32,
}

/// Per-tier asteroid configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeSpec {
    pub radius: f32,
    pub health: u32,
    pub points: u32,
    /// Speed range in pixels/second
    pub speed_min: f32,
    pub speed_max: f32,
    pub split: Option<SplitSpec>,
}

/// The four tier records
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidTuning {
    pub small: SizeSpec,
    pub medium: SizeSpec,
    pub large: SizeSpec,
    pub huge: SizeSpec,
    /// Outward speed added to each split child (pixels/second)
    pub split_boost: f32,
    /// Hit-flash duration (ms)
    pub hit_flash_ms: f32,
}

impl AsteroidTuning {
    /// Resolve the configuration record for a tier
    pub fn spec(&self, size: AsteroidSize) -> &SizeSpec {
        match size {
            AsteroidSize::Small => &self.small,
            AsteroidSize::Medium => &self.medium,
            AsteroidSize::Large => &self.large,
            AsteroidSize::Huge => &self.huge,
        }
    }
}

impl Default for AsteroidTuning {
    fn default() -> Self {
        Self {
            small: SizeSpec {
                radius: 20.0,
                health: 1,
                points: 100,
                speed_min: 50.0,
                speed_max: 100.0,
                split: None,
            },
            medium: SizeSpec {
                radius: 35.0,
                health: 2,
                points: 200,
                speed_min: 40.0,
                speed_max: 80.0,
                split: Some(SplitSpec { into: AsteroidSize::Small, count: 2 }),
            },
            large: SizeSpec {
                radius: 50.0,
                health: 3,
                points: 300,
                speed_min: 30.0,
                speed_max: 60.0,
                split: Some(SplitSpec { into: AsteroidSize::Medium, count: 2 }),
            },
            huge: SizeSpec {
                radius: 70.0,
                health: 5,
                points: 500,
                speed_min: 20.0,
                speed_max: 40.0,
                split: Some(SplitSpec { into: AsteroidSize::Large, count: 3 }),
            },
            split_boost: 30.0,
            hit_flash_ms: 100.0,
        }
    }
}

/// Player ship
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub radius: f32,
    /// Acceleration scale (pixels/second² at full input)
    pub acceleration: f32,
    /// Multiplicative velocity damping applied once per tick
    pub friction: f32,
    pub fire_rate_ms: f32,
    pub rapid_fire_rate_ms: f32,
    pub invincibility_ms: f32,
    pub shield_duration_ms: f32,
    pub rapid_fire_duration_ms: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            radius: 20.0,
            acceleration: 300.0,
            friction: 0.98,
            fire_rate_ms: 250.0,
            rapid_fire_rate_ms: 80.0,
            invincibility_ms: 2000.0,
            shield_duration_ms: 8000.0,
            rapid_fire_duration_ms: 6000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletTuning {
    pub speed: f32,
    pub radius: f32,
    pub trail_length: usize,
}

impl Default for BulletTuning {
    fn default() -> Self {
        Self {
            speed: 500.0,
            radius: 4.0,
            trail_length: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerUpTuning {
    /// Drop probability per destroyed asteroid
    pub drop_chance: f64,
    pub lifetime_ms: f32,
    pub radius: f32,
    /// Bob frequency (radians/second) and amplitude (pixels); cosmetic only
    pub float_speed: f32,
    pub float_amplitude: f32,
}

impl Default for PowerUpTuning {
    fn default() -> Self {
        Self {
            drop_chance: 0.15,
            lifetime_ms: 10_000.0,
            radius: 15.0,
            float_speed: 3.0,
            float_amplitude: 5.0,
        }
    }
}

/// Level pacing
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelTuning {
    pub base_spawn_interval_ms: f32,
    pub spawn_decrease_per_level_ms: f32,
    pub min_spawn_interval_ms: f32,
    pub base_required: u32,
    pub required_increase: u32,
    pub transition_ms: f32,
    /// Wave size at game start; later waves are `base_wave + level`
    pub initial_wave: u32,
}

impl Default for LevelTuning {
    fn default() -> Self {
        Self {
            base_spawn_interval_ms: 3000.0,
            spawn_decrease_per_level_ms: 200.0,
            min_spawn_interval_ms: 800.0,
            base_required: 25,
            required_increase: 10,
            transition_ms: 2000.0,
            initial_wave: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleTuning {
    pub explosion_count: usize,
    pub hit_count: usize,
    pub lifetime_min_ms: f32,
    pub lifetime_max_ms: f32,
    pub hit_lifetime_ms: f32,
    pub thruster_lifetime_ms: f32,
    pub friction: f32,
    pub max_particles: usize,
}

impl Default for ParticleTuning {
    fn default() -> Self {
        Self {
            explosion_count: 15,
            hit_count: 5,
            lifetime_min_ms: 500.0,
            lifetime_max_ms: 1000.0,
            hit_lifetime_ms: 300.0,
            thruster_lifetime_ms: 200.0,
            friction: 0.98,
            max_particles: 600,
        }
    }
}

/// Edge spawning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    /// How far outside the play bounds new asteroids appear
    pub edge_offset: f32,
    /// Minimum distance from the player for a spawn point
    pub player_margin: f32,
    /// Max angular jitter (radians, either side) on the aim toward center
    pub aim_jitter: f32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            edge_offset: 50.0,
            player_margin: 100.0,
            aim_jitter: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct GameTuning {
    pub starting_lives: u32,
    pub max_lives: u32,
    /// Upper bound on a single tick's delta-time
    pub max_frame_ms: f32,
    pub bomb_duration_ms: f32,
}

impl Default for GameTuning {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            max_lives: 5,
            max_frame_ms: 50.0,
            bomb_duration_ms: 500.0,
        }
    }
}

/// Complete balance table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub bullet: BulletTuning,
    pub asteroids: AsteroidTuning,
    pub power_ups: PowerUpTuning,
    pub levels: LevelTuning,
    pub particles: ParticleTuning,
    pub spawn: SpawnTuning,
    pub game: GameTuning,
}

impl Tuning {
    /// Parse and validate a JSON tuning document. Missing keys keep defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load a JSON tuning file from disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&contents)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json_pretty(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject records the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |msg: String| Err(TuningError::Invalid(msg));
        // NaN fails both
        let positive = |v: f32| v.is_finite() && v > 0.0;
        let non_negative = |v: f32| v.is_finite() && v >= 0.0;

        for size in AsteroidSize::ALL {
            let spec = self.asteroids.spec(size);
            if !positive(spec.radius) || spec.health == 0 {
                return invalid(format!("{size}: radius and health must be positive"));
            }
            if !non_negative(spec.speed_min) || !spec.speed_max.is_finite() || spec.speed_min > spec.speed_max {
                return invalid(format!(
                    "{size}: speed range {}..{} is empty",
                    spec.speed_min, spec.speed_max
                ));
            }
            if let Some(split) = spec.split {
                if split.into >= size {
                    return invalid(format!("{size}: splits into non-smaller tier {}", split.into));
                }
                if split.count == 0 {
                    return invalid(format!("{size}: split count must be at least 1"));
                }
            }
        }

        if !(0.0..=1.0).contains(&self.power_ups.drop_chance) {
            return invalid(format!("drop_chance {} outside [0, 1]", self.power_ups.drop_chance));
        }

        let durations = [
            ("player.fire_rate_ms", self.player.fire_rate_ms),
            ("player.rapid_fire_rate_ms", self.player.rapid_fire_rate_ms),
            ("power_ups.lifetime_ms", self.power_ups.lifetime_ms),
            ("levels.transition_ms", self.levels.transition_ms),
            ("levels.min_spawn_interval_ms", self.levels.min_spawn_interval_ms),
            ("particles.lifetime_min_ms", self.particles.lifetime_min_ms),
            ("particles.hit_lifetime_ms", self.particles.hit_lifetime_ms),
            ("particles.thruster_lifetime_ms", self.particles.thruster_lifetime_ms),
            ("game.max_frame_ms", self.game.max_frame_ms),
            ("game.bomb_duration_ms", self.game.bomb_duration_ms),
        ];
        for (name, value) in durations {
            if !positive(value) {
                return invalid(format!("{name} must be positive, got {value}"));
            }
        }

        let sizes = [
            ("player.radius", self.player.radius),
            ("bullet.speed", self.bullet.speed),
            ("bullet.radius", self.bullet.radius),
        ];
        for (name, value) in sizes {
            if !positive(value) {
                return invalid(format!("{name} must be positive, got {value}"));
            }
        }

        let offsets = [
            ("spawn.player_margin", self.spawn.player_margin),
            ("spawn.edge_offset", self.spawn.edge_offset),
        ];
        for (name, value) in offsets {
            if !non_negative(value) {
                return invalid(format!("{name} must be non-negative, got {value}"));
            }
        }

        if self.particles.lifetime_min_ms > self.particles.lifetime_max_ms {
            return invalid("particle lifetime range is empty".to_string());
        }
        if !(0.0..=1.0).contains(&self.player.friction) || !(0.0..=1.0).contains(&self.particles.friction) {
            return invalid("friction factors must lie in [0, 1]".to_string());
        }
        if self.game.starting_lives == 0 || self.game.starting_lives > self.game.max_lives {
            return invalid(format!(
                "starting_lives {} must be in 1..={}",
                self.game.starting_lives, self.game.max_lives
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        Tuning::default().validate().unwrap();
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "player": { "fire_rate_ms": 100.0 } }"#).unwrap();
        assert_eq!(tuning.player.fire_rate_ms, 100.0);
        assert_eq!(tuning.player.radius, 20.0);
        assert_eq!(tuning.levels.base_required, 25);
    }

    #[test]
    fn test_unknown_split_tier_fails_to_parse() {
        let json = r#"{ "asteroids": { "huge": {
            "radius": 70.0, "health": 5, "points": 500,
            "speed_min": 20.0, "speed_max": 40.0,
            "split": { "into": "gigantic", "count": 3 } } } }"#;
        assert!(matches!(Tuning::from_json(json), Err(TuningError::Parse(_))));
    }

    #[test]
    fn test_split_into_larger_tier_is_rejected() {
        let mut tuning = Tuning::default();
        tuning.asteroids.small.split = Some(SplitSpec {
            into: AsteroidSize::Huge,
            count: 1,
        });
        assert!(matches!(tuning.validate(), Err(TuningError::Invalid(_))));
    }

    #[test]
    fn test_bad_drop_chance_is_rejected() {
        let mut tuning = Tuning::default();
        tuning.power_ups.drop_chance = 1.5;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_zero_player_radius_is_rejected() {
        let mut tuning = Tuning::default();
        tuning.player.radius = 0.0;
        assert!(matches!(tuning.validate(), Err(TuningError::Invalid(_))));
    }

    #[test]
    fn test_bullet_speed_and_radius_must_be_positive() {
        let mut tuning = Tuning::default();
        tuning.bullet.speed = 0.0;
        assert!(tuning.validate().is_err());

        let mut tuning = Tuning::default();
        tuning.bullet.radius = -4.0;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_negative_spawn_distances_are_rejected() {
        let mut tuning = Tuning::default();
        tuning.spawn.player_margin = -1.0;
        assert!(tuning.validate().is_err());

        let mut tuning = Tuning::default();
        tuning.spawn.edge_offset = -50.0;
        assert!(tuning.validate().is_err());

        let mut tuning = Tuning::default();
        tuning.spawn.player_margin = 0.0;
        tuning.spawn.edge_offset = 0.0;
        tuning.validate().unwrap();
    }

    #[test]
    fn test_nan_values_are_rejected() {
        let mut tuning = Tuning::default();
        tuning.asteroids.small.speed_min = f32::NAN;
        assert!(tuning.validate().is_err());

        let mut tuning = Tuning::default();
        tuning.asteroids.large.speed_max = f32::NAN;
        assert!(tuning.validate().is_err());

        let mut tuning = Tuning::default();
        tuning.asteroids.medium.radius = f32::NAN;
        assert!(tuning.validate().is_err());

        let mut tuning = Tuning::default();
        tuning.player.fire_rate_ms = f32::NAN;
        assert!(tuning.validate().is_err());

        let mut tuning = Tuning::default();
        tuning.spawn.player_margin = f32::NAN;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_tags_round_trip_through_strings() {
        for kind in PowerUpKind::ALL {
            assert_eq!(kind.as_str().parse::<PowerUpKind>().unwrap(), kind);
        }
        assert_eq!("HUGE".parse::<AsteroidSize>().unwrap(), AsteroidSize::Huge);
        assert!("laser".parse::<PowerUpKind>().is_err());
    }

    #[test]
    fn test_pretty_json_reloads() {
        let json = Tuning::default().to_json_pretty().unwrap();
        let reloaded = Tuning::from_json(&json).unwrap();
        assert_eq!(reloaded.asteroids.huge, Tuning::default().asteroids.huge);
    }
}
