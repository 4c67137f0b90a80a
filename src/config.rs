//! Puzzle definitions loaded from TOML files, plus logging settings.

use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::{Entity, Member, Roster, Side};
use crate::error::{ConfigError, ModelError};
use crate::model::PlanSpec;

/// On-disk puzzle description.
///
/// ```toml
/// horizon = 20
///
/// [[entity]]
/// name = "wolf"
/// code = "w"
///
/// [[entity]]
/// name = "goat"
/// code = "g"
///
/// [[forbidden]]
/// pair = ["wolf", "goat"]
/// ```
#[derive(Debug, Deserialize)]
pub struct PuzzleFile {
    pub horizon: usize,
    #[serde(rename = "entity")]
    pub entities: Vec<EntityEntry>,
    #[serde(rename = "forbidden", default)]
    pub forbidden: Vec<ForbiddenEntry>,
    pub ferry_capacity: Option<usize>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// One `[[entity]]` table.
#[derive(Debug, Deserialize)]
pub struct EntityEntry {
    pub name: String,
    /// Single-character table code.
    pub code: char,
    /// Starting bank; near when omitted.
    pub start: Option<Side>,
}

/// One `[[forbidden]]` table.
#[derive(Debug, Deserialize)]
pub struct ForbiddenEntry {
    pub pair: [String; 2],
}

impl PuzzleFile {
    /// Read and validate a puzzle file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let file: PuzzleFile = toml::from_str(&content).map_err(ConfigError::Parse)?;
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.horizon == 0 {
            return Err(ConfigError::InvalidValue {
                field: "horizon",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.ferry_capacity == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "ferry_capacity",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.entities.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "entity",
                reason: "at least one entity is required".to_string(),
            });
        }
        for (i, entity) in self.entities.iter().enumerate() {
            for earlier in &self.entities[..i] {
                if earlier.name == entity.name {
                    return Err(ConfigError::InvalidValue {
                        field: "entity",
                        reason: format!("duplicate name '{}'", entity.name),
                    });
                }
                if earlier.code == entity.code {
                    return Err(ConfigError::InvalidValue {
                        field: "entity",
                        reason: format!("duplicate code '{}'", entity.code),
                    });
                }
            }
        }
        for entry in &self.forbidden {
            for name in &entry.pair {
                if !self.entities.iter().any(|e| e.name == *name) {
                    return Err(ConfigError::InvalidValue {
                        field: "forbidden",
                        reason: format!("unknown entity '{name}'"),
                    });
                }
            }
            if entry.pair[0] == entry.pair[1] {
                return Err(ConfigError::InvalidValue {
                    field: "forbidden",
                    reason: format!("pair repeats entity '{}'", entry.pair[0]),
                });
            }
        }
        Ok(())
    }

    /// Convert into a ready-to-build crossing spec.
    pub fn to_spec(&self) -> Result<PlanSpec, ModelError> {
        let members = self
            .entities
            .iter()
            .map(|e| Member::new(&e.name, e.code))
            .collect();
        let roster = Roster::new(members)?;
        let initial = self
            .entities
            .iter()
            .map(|e| e.start.unwrap_or(Side::Near))
            .collect();
        let mut forbidden = Vec::with_capacity(self.forbidden.len());
        for entry in &self.forbidden {
            let a = Self::resolve(&roster, &entry.pair[0])?;
            let b = Self::resolve(&roster, &entry.pair[1])?;
            forbidden.push((a, b));
        }
        Ok(PlanSpec::new(roster, self.horizon)
            .with_initial(initial)
            .with_forbidden(forbidden)
            .with_ferry_capacity(self.ferry_capacity.unwrap_or(1)))
    }

    fn resolve(roster: &Roster, name: &str) -> Result<Entity, ModelError> {
        roster.index_of(name).ok_or_else(|| ModelError::UnknownEntity {
            name: name.to_string(),
        })
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "warn".into()
}

fn default_format() -> String {
    "pretty".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}
