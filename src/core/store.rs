use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::model::{Condition, PropertyRecord, PropertyType};
use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;

/// Fixed slot under which the single property form lives.
pub const STORAGE_KEY: &str = "valuadorInmobiliarioV1";

/// Wire shape of the stored form. Field names and keyword values are the
/// on-disk contract; the domain record is rebuilt from this via the usual
/// normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredRecord {
    #[serde(default)]
    name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    m2: f64,
    #[serde(default)]
    r#type: String,
    #[serde(default)]
    state: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    comp1: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    comp2: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    comp3: f64,
}

// Accepts a number or a numeric string; anything else decodes as 0 so an
// old or foreign writer can't poison the whole record.
fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

impl From<&PropertyRecord> for StoredRecord {
    fn from(record: &PropertyRecord) -> Self {
        StoredRecord {
            name: record.name.clone(),
            m2: record.area_m2,
            r#type: record.property_type.as_keyword().to_string(),
            state: record.condition.as_keyword().to_string(),
            comp1: record.comparables[0],
            comp2: record.comparables[1],
            comp3: record.comparables[2],
        }
    }
}

impl From<StoredRecord> for PropertyRecord {
    fn from(stored: StoredRecord) -> Self {
        PropertyRecord {
            name: stored.name,
            area_m2: stored.m2,
            property_type: PropertyType::from_keyword(&stored.r#type),
            condition: Condition::from_keyword(&stored.state),
            comparables: [stored.comp1, stored.comp2, stored.comp3],
        }
        .normalized()
    }
}

/// Round-trips exactly one [`PropertyRecord`] through an injected
/// key-value store under [`STORAGE_KEY`].
pub struct PropertyRecordStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PropertyRecordStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Serializes and writes the record, overwriting any prior slot value.
    /// A rejected write surfaces as an error; it is not retried.
    pub fn save(&self, record: &PropertyRecord) -> Result<()> {
        let encoded = serde_json::to_string(&StoredRecord::from(record))?;
        self.store.set(STORAGE_KEY, &encoded)?;
        tracing::debug!("record saved under {}", STORAGE_KEY);
        Ok(())
    }

    /// Reads the slot. An absent key is `None`. Unreadable or unparseable
    /// data is also `None`, with a warning: a stale slot must never block
    /// the tool. A loaded record comes back fully normalized.
    pub fn load(&self) -> Option<PropertyRecord> {
        let raw = match self.store.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!("no se pudo leer {}: {}", STORAGE_KEY, err);
                return None;
            }
        };
        match serde_json::from_str::<StoredRecord>(&raw) {
            Ok(stored) => Some(PropertyRecord::from(stored)),
            Err(err) => {
                tracing::warn!("no se pudo leer {}: {}", STORAGE_KEY, err);
                None
            }
        }
    }

    /// Removes the slot. Clearing an already-absent slot succeeds.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(STORAGE_KEY)
    }
}
