//! Configuration loading and management

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::error::ConfigError;
use crate::core::staff::{Roster, StaffMember};

fn default_listen_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_seed_demo_data() -> bool {
    true
}

/// Complete configuration for the tracker service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Static staff roster
    pub staff: Vec<StaffMember>,

    /// Staff member attributed to mutations when a request names no actor
    pub acting_staff_id: u32,

    /// Address the HTTP server binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Populate the tracker with the two demo orders on startup
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

impl TrackerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_string(),
                }
            } else {
                ConfigError::IoError {
                    message: e.to_string(),
                }
            }
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check roster integrity and the acting-user reference
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.staff.is_empty() {
            return Err(ConfigError::MissingField {
                field: "staff".to_string(),
                context: "tracker config".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for member in &self.staff {
            if !seen.insert(member.id) {
                return Err(ConfigError::InvalidValue {
                    field: "staff".to_string(),
                    value: member.id.to_string(),
                    message: "duplicate staff id".to_string(),
                });
            }
        }

        if !self.staff.iter().any(|m| m.id == self.acting_staff_id) {
            return Err(ConfigError::InvalidValue {
                field: "acting_staff_id".to_string(),
                value: self.acting_staff_id.to_string(),
                message: "not present in the staff roster".to_string(),
            });
        }

        Ok(())
    }

    /// Build the runtime roster from the configured members
    pub fn roster(&self) -> Roster {
        Roster::new(self.staff.clone())
    }

    /// Create a default configuration
    ///
    /// Carries the historical 4-member roster; the first member acts for
    /// requests that name no actor.
    pub fn default_config() -> Self {
        Self {
            staff: vec![
                StaffMember::new(1, "Kim Damdang", "Production"),
                StaffMember::new(2, "Lee Manager", "Sales"),
                StaffMember::new(3, "Park Siljang", "Design"),
                StaffMember::new(4, "Choi Sawon", "Shipping"),
            ],
            acting_staff_id: 1,
            listen_addr: default_listen_addr(),
            seed_demo_data: true,
        }
    }
}
