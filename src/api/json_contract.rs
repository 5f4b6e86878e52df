use serde::{Deserialize, Serialize};

use crate::error::{ViewerError, ViewerResult};

use super::ViewerSnapshot;

pub const VIEWER_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ViewerSnapshot,
}

impl ViewerSnapshot {
    pub fn to_json(&self) -> ViewerResult<String> {
        serde_json::to_string(self).map_err(|e| {
            ViewerError::InvalidConfig(format!("failed to serialize snapshot: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ViewerResult<String> {
        let payload = ViewerSnapshotJsonContractV1 {
            schema_version: VIEWER_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ViewerError::InvalidConfig(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned envelope.
    pub fn from_json_compat_str(input: &str) -> ViewerResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ViewerSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ViewerSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ViewerError::InvalidConfig(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != VIEWER_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ViewerError::InvalidConfig(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
