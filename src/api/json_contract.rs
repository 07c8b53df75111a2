use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use crate::error::{PickerError, PickerResult};

use super::{DatePickerEngine, DatePickerSnapshot, NameLookup, TimePickerEngine, TimePickerSnapshot};

pub const TIME_PICKER_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;
pub const DATE_PICKER_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePickerSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: TimePickerSnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatePickerSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: DatePickerSnapshot,
}

fn to_json_pretty<T: Serialize>(value: &T, what: &str) -> PickerResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| PickerError::InvalidData(format!("failed to serialize {what}: {e}")))
}

/// Parses either a bare payload or a versioned wrapper `{schema_version, snapshot}`.
fn from_json_compat<T, W>(
    input: &str,
    expected_version: u32,
    what: &str,
    unwrap: impl FnOnce(W) -> (u32, T),
) -> PickerResult<T>
where
    T: DeserializeOwned,
    W: DeserializeOwned,
{
    if let Ok(snapshot) = serde_json::from_str::<T>(input) {
        return Ok(snapshot);
    }
    let payload: W = serde_json::from_str(input).map_err(|e| {
        PickerError::InvalidData(format!("failed to parse {what} json payload: {e}"))
    })?;
    let (schema_version, snapshot) = unwrap(payload);
    if schema_version != expected_version {
        return Err(PickerError::InvalidData(format!(
            "unsupported {what} schema version: {schema_version}"
        )));
    }
    Ok(snapshot)
}

impl TimePickerSnapshot {
    pub fn to_json_pretty(&self) -> PickerResult<String> {
        to_json_pretty(self, "time picker snapshot")
    }

    pub fn to_json_contract_v1_pretty(&self) -> PickerResult<String> {
        let payload = TimePickerSnapshotJsonContractV1 {
            schema_version: TIME_PICKER_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: *self,
        };
        to_json_pretty(&payload, "time picker snapshot contract v1")
    }

    pub fn from_json_compat_str(input: &str) -> PickerResult<Self> {
        from_json_compat(
            input,
            TIME_PICKER_SNAPSHOT_JSON_SCHEMA_V1,
            "time picker snapshot",
            |payload: TimePickerSnapshotJsonContractV1| (payload.schema_version, payload.snapshot),
        )
    }
}

impl DatePickerSnapshot {
    pub fn to_json_pretty(&self) -> PickerResult<String> {
        to_json_pretty(self, "date picker snapshot")
    }

    pub fn to_json_contract_v1_pretty(&self) -> PickerResult<String> {
        let payload = DatePickerSnapshotJsonContractV1 {
            schema_version: DATE_PICKER_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        to_json_pretty(&payload, "date picker snapshot contract v1")
    }

    pub fn from_json_compat_str(input: &str) -> PickerResult<Self> {
        from_json_compat(
            input,
            DATE_PICKER_SNAPSHOT_JSON_SCHEMA_V1,
            "date picker snapshot",
            |payload: DatePickerSnapshotJsonContractV1| (payload.schema_version, payload.snapshot),
        )
    }
}

impl TimePickerEngine {
    pub fn snapshot_json_contract_v1_pretty(&self) -> PickerResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}

impl<N: NameLookup> DatePickerEngine<N> {
    pub fn snapshot_json_contract_v1_pretty(&self, today: NaiveDate) -> PickerResult<String> {
        self.snapshot_at(today)?.to_json_contract_v1_pretty()
    }
}
