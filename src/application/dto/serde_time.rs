// src/application/dto/serde_time.rs
//! Epoch-seconds codec for `DateTime<Utc>` fields on the wire.
use chrono::{DateTime, Utc};
use serde::{self, Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_i64(value.timestamp())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = i64::deserialize(deserializer)?;
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {secs}")))
}
