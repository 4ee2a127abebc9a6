//! Shared service state.

use std::sync::Arc;

use crate::config::AutomarkerConfig;
use crate::gate::SessionGate;
use crate::marker::MarkingEngine;

/// Shared service state.
///
/// Every field is read-only after startup, so handlers share it without
/// locking.
#[derive(Clone)]
pub struct ServiceState {
    /// Process configuration.
    pub config: Arc<AutomarkerConfig>,
    /// Access-code and session gate.
    pub gate: Arc<SessionGate>,
    /// Marking engine.
    pub engine: Arc<MarkingEngine>,
    rubric_fingerprint: Arc<str>,
}

impl ServiceState {
    /// Create service state with the default rubric.
    pub fn new(config: AutomarkerConfig) -> Self {
        Self::with_engine(config, MarkingEngine::new())
    }

    /// Create service state with a custom marking engine.
    pub fn with_engine(config: AutomarkerConfig, engine: MarkingEngine) -> Self {
        let gate = SessionGate::from_config(&config);
        let rubric_fingerprint = engine.detector().table().fingerprint();
        Self {
            config: Arc::new(config),
            gate: Arc::new(gate),
            engine: Arc::new(engine),
            rubric_fingerprint: rubric_fingerprint.into(),
        }
    }

    /// Create service state from environment variables.
    pub fn from_env() -> Result<Self, crate::config::ConfigError> {
        AutomarkerConfig::from_env().map(Self::new)
    }

    /// Fingerprint of the deployed rule table.
    pub fn rubric_fingerprint(&self) -> &str {
        &self.rubric_fingerprint
    }
}
