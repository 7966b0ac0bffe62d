//! Strongly-typed identifiers used across the harness.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a single experiment trial.
///
/// Trials are independent; the id exists so log lines and report entries
/// from one trial can be correlated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrialId(Uuid);

impl TrialId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered), so ids sort in trial order.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl core::fmt::Display for TrialId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for TrialId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<TrialId> for Uuid {
    fn from(value: TrialId) -> Self {
        value.0
    }
}
