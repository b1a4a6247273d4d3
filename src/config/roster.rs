use crate::domain::model::Instructor;
use crate::utils::error::{GymError, Result};
use std::path::Path;

use serde::Deserialize;

/// Static instructor reference data, loaded from a TOML file or seeded
/// with the built-in roster.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    pub instructor: Vec<Instructor>,
}

impl RosterConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GymError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let roster: RosterConfig = toml::from_str(content).map_err(|e| GymError::ConfigError {
            field: "roster".to_string(),
            message: format!("TOML parsing error: {}", e),
        })?;
        roster.validate()?;
        Ok(roster)
    }

    fn validate(&self) -> Result<()> {
        if self.instructor.is_empty() {
            return Err(GymError::ConfigError {
                field: "instructor".to_string(),
                message: "Roster must list at least one instructor".to_string(),
            });
        }
        for entry in &self.instructor {
            if entry.name.trim().is_empty() {
                return Err(GymError::ConfigError {
                    field: "instructor.name".to_string(),
                    message: format!("Instructor {} has an empty name", entry.id),
                });
            }
            if entry.specialty.trim().is_empty() {
                return Err(GymError::ConfigError {
                    field: "instructor.specialty".to_string(),
                    message: format!("Instructor {} has an empty specialty", entry.id),
                });
            }
        }
        let mut ids: Vec<u32> = self.instructor.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.len() != self.instructor.len() {
            return Err(GymError::ConfigError {
                field: "instructor.id".to_string(),
                message: "Instructor ids must be unique".to_string(),
            });
        }
        Ok(())
    }

    /// Built-in roster used when no file is supplied.
    pub fn seed() -> Self {
        let seed = [
            (1, "Ana Torres", "Spinning"),
            (2, "Luis Diaz", "Zumba"),
            (3, "Maria Gomez", "Yoga"),
            (4, "Carlos Ruiz", "Pilates"),
            (5, "Pedro Lopez", "Boxing"),
            (6, "Laura Sanchez", "Dance"),
        ];
        Self {
            instructor: seed
                .iter()
                .map(|(id, name, specialty)| Instructor {
                    id: *id,
                    name: name.to_string(),
                    specialty: specialty.to_string(),
                })
                .collect(),
        }
    }

    pub fn instructors(&self) -> &[Instructor] {
        &self.instructor
    }

    /// First instructor whose specialty matches the class type. Falls back
    /// to a synthetic stand-in when the roster has no match, which usually
    /// points at incomplete roster data.
    pub fn instructor_for(&self, class_type: &str) -> Instructor {
        self.instructor
            .iter()
            .find(|i| i.specialty == class_type)
            .cloned()
            .unwrap_or_else(|| {
                tracing::warn!("No instructor for class type '{}', using stand-in", class_type);
                Instructor {
                    id: 0,
                    name: "General".to_string(),
                    specialty: class_type.to_string(),
                }
            })
    }
}
