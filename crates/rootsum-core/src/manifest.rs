//! Run manifest: what was executed and a digest of what it produced.
//!
//! Two runs of the same plan must agree on `plan_hash` and `outputs_digest`;
//! only the id and timestamps differ.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::hash::Hash256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManifestId(pub Uuid);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub id: ManifestId,

    /// Stable hash of the logical plan (and operator params) used.
    pub plan_hash: Hash256,

    /// Engine version string for provenance.
    pub engine_version: String,

    /// Digest of every stage output. `None` until the run finishes.
    pub outputs_digest: Option<Hash256>,

    /// Milliseconds since Unix epoch (UTC).
    pub started_ms: u64,
    pub finished_ms: u64,
}

impl RunManifest {
    pub fn new(plan_hash: Hash256, started_ms: u64) -> Self {
        Self {
            id: ManifestId(Uuid::new_v4()),
            plan_hash,
            engine_version: crate::VERSION.to_string(),
            outputs_digest: None,
            started_ms,
            finished_ms: started_ms,
        }
    }

    pub fn finish(mut self, finished_ms: u64, outputs_digest: Option<Hash256>) -> Self {
        self.finished_ms = finished_ms;
        self.outputs_digest = outputs_digest;
        self
    }

    pub fn duration_ms(&self) -> u64 {
        self.finished_ms.saturating_sub(self.started_ms)
    }
}
