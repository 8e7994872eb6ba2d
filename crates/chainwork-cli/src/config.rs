//! Team file: who is on the chain and which tickets they work through.
//!
//! ```json
//! {
//!   "developers": [{ "name": "Alper", "skill": "junior" }],
//!   "tickets": [{ "name": "Change texts", "minimum_skill": "junior" }]
//! }
//! ```

use std::fs;
use std::path::Path;

use chainwork_core::ports::IdGenerator;
use chainwork_core::{CapabilityLevel, Chain, ConfigurationError, Handler, Request};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read team file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse team file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeveloperConfig {
    pub name: String,
    pub skill: CapabilityLevel,
    #[serde(default)]
    pub busy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TicketConfig {
    pub name: String,
    pub minimum_skill: CapabilityLevel,
}

/// Developers in chain order plus the ticket backlog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TeamConfig {
    pub developers: Vec<DeveloperConfig>,
    #[serde(default)]
    pub tickets: Vec<TicketConfig>,
}

impl TeamConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The playground team: two juniors ahead of two seniors, five junior
    /// tickets.
    pub fn sample() -> Self {
        let developer = |name: &str, skill| DeveloperConfig {
            name: name.to_string(),
            skill,
            busy: false,
        };
        let ticket = |name: &str| TicketConfig {
            name: name.to_string(),
            minimum_skill: CapabilityLevel::JUNIOR,
        };

        Self {
            developers: vec![
                developer("Alper", CapabilityLevel::JUNIOR),
                developer("Yani", CapabilityLevel::JUNIOR),
                developer("Andreas", CapabilityLevel::SENIOR),
                developer("Matej", CapabilityLevel::SENIOR),
            ],
            tickets: vec![
                ticket("Change texts"),
                ticket("Fix memory leaks"),
                ticket("Send application to fabric for testing"),
                ticket("Change provisioning profiles"),
                ticket("Release application on appstore"),
            ],
        }
    }

    pub fn build_chain(&self, id_gen: &impl IdGenerator) -> Result<Chain, ConfigurationError> {
        Chain::build(
            self.developers
                .iter()
                .map(|dev| {
                    Handler::new(id_gen.generate_handler_id(), dev.name.clone(), dev.skill)
                        .with_busy(dev.busy)
                })
                .collect(),
        )
    }

    pub fn build_requests(&self, id_gen: &impl IdGenerator) -> Vec<Request> {
        self.tickets
            .iter()
            .map(|t| Request::new(id_gen.generate_request_id(), t.minimum_skill, t.name.clone()))
            .collect()
    }
}
