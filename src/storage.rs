use crate::errors::AppError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::error;

/// Schema version written by this build. Files without a `version` field are
/// legacy blobs (the raw in-memory shape) and are read as version 1.
pub const CURRENT_VERSION: u32 = 1;

/// On-disk envelope around a persisted document.
#[derive(Debug, Serialize, Deserialize)]
pub struct Document<T> {
    pub version: u32,
    pub data: T,
}

#[derive(Debug)]
pub enum DecodeError {
    Parse(serde_json::Error),
    FutureVersion(u32),
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::Parse(err) => write!(f, "invalid JSON: {err}"),
            DecodeError::FutureVersion(version) => {
                write!(f, "document version {version} is newer than {CURRENT_VERSION}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

pub fn resolve_data_dir() -> PathBuf {
    env::var("APP_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

/// Loads a named document, treating an absent file and a corrupt file the
/// same way: the caller's default, with corruption logged.
pub async fn load_document<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return T::default(),
        Err(err) => {
            error!("failed to read {}: {err}", path.display());
            return T::default();
        }
    };

    match decode_document(&bytes) {
        Ok(data) => data,
        Err(err) => {
            error!("failed to decode {}: {err}", path.display());
            T::default()
        }
    }
}

/// Unlike loads, write failures are surfaced: the caller just mutated state
/// and needs to know the mutation did not stick.
pub async fn persist_document<T: Serialize>(path: &Path, data: &T) -> Result<(), AppError> {
    let document = Document {
        version: CURRENT_VERSION,
        data,
    };
    let payload = serde_json::to_vec_pretty(&document).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

fn decode_document<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_slice(bytes).map_err(DecodeError::Parse)?;
    let version = match value.get("version").and_then(Value::as_u64) {
        Some(version) => version as u32,
        None => 1,
    };
    if version > CURRENT_VERSION {
        return Err(DecodeError::FutureVersion(version));
    }

    let value = migrate(value, version);
    let payload = match value {
        Value::Object(ref map) if map.contains_key("version") => {
            map.get("data").cloned().unwrap_or(Value::Null)
        }
        // Legacy blob: the document body itself, with no envelope.
        other => other,
    };
    serde_json::from_value(payload).map_err(DecodeError::Parse)
}

type Migration = fn(Value) -> Value;

/// Sequential migrations: entry 0 lifts v1 to v2, entry 1 lifts v2 to v3.
/// Empty until the schema first changes.
const MIGRATIONS: &[Migration] = &[];

fn migrate(mut value: Value, from_version: u32) -> Value {
    for step in &MIGRATIONS[(from_version as usize).saturating_sub(1).min(MIGRATIONS.len())..] {
        value = step(value);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskLedger;

    #[test]
    fn decode_accepts_envelope() {
        let raw = br#"{"version":1,"data":{"days":{"2024-03-15":[{"text":"Learn loops","completed":false,"created_at":"2024-03-15T08:00:00Z"}]}}}"#;
        let ledger: TaskLedger = decode_document(raw).unwrap();
        assert_eq!(ledger.days.len(), 1);
        assert_eq!(ledger.days["2024-03-15"][0].text, "Learn loops");
    }

    #[test]
    fn decode_accepts_legacy_bare_blob() {
        let raw = br#"{"days":{"2024-03-15":[{"text":"Learn loops","completed":true,"created_at":"2024-03-15T08:00:00Z"}]}}"#;
        let ledger: TaskLedger = decode_document(raw).unwrap();
        assert!(ledger.days["2024-03-15"][0].completed);
    }

    #[test]
    fn decode_rejects_future_version() {
        let raw = br#"{"version":99,"data":{"days":{}}}"#;
        let err = decode_document::<TaskLedger>(raw).unwrap_err();
        assert!(matches!(err, DecodeError::FutureVersion(99)));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode_document::<TaskLedger>(b"not json").is_err());
    }

    #[tokio::test]
    async fn load_defaults_on_missing_and_corrupt() {
        let missing = std::env::temp_dir().join("learning_hub_no_such_file.json");
        let ledger: TaskLedger = load_document(&missing).await;
        assert!(ledger.days.is_empty());

        let corrupt = std::env::temp_dir().join(format!(
            "learning_hub_corrupt_{}_{}.json",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        fs::write(&corrupt, b"{{{").await.unwrap();
        let ledger: TaskLedger = load_document(&corrupt).await;
        assert!(ledger.days.is_empty());
        let _ = fs::remove_file(&corrupt).await;
    }

    #[tokio::test]
    async fn persist_then_load_round_trips() {
        let path = std::env::temp_dir().join(format!(
            "learning_hub_roundtrip_{}_{}.json",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let mut ledger = TaskLedger::default();
        ledger.days.insert(
            "2024-03-15".to_string(),
            vec![crate::models::Task {
                text: "Learn loops".to_string(),
                completed: false,
                created_at: "2024-03-15T08:00:00Z".to_string(),
            }],
        );
        persist_document(&path, &ledger).await.unwrap();

        let raw = fs::read(&path).await.unwrap();
        let parsed: Value = serde_json::from_slice(&raw).unwrap();
        assert_eq!(parsed["version"], CURRENT_VERSION);

        let loaded: TaskLedger = load_document(&path).await;
        assert_eq!(loaded.days.len(), 1);
        let _ = fs::remove_file(&path).await;
    }
}
