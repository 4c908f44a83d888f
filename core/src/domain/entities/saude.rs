//! Health records ("saude") kept for a child.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest body temperature accepted, in °C
pub const MIN_TEMPERATURE: f64 = 30.0;

/// Highest body temperature accepted, in °C
pub const MAX_TEMPERATURE: f64 = 45.0;

/// Medication given, symptoms observed and temperature taken
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaudeRecord {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub child_id: i64,
    #[serde(rename = "medicacao")]
    pub medication: Option<String>,
    #[serde(rename = "sintomas")]
    pub symptoms: Option<String>,
    #[serde(rename = "observacoes")]
    pub notes: Option<String>,
    #[serde(rename = "temperatura")]
    pub temperature: Option<f64>,
}

/// Fields supplied when recording a health entry; `date` defaults to now
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSaudeRecord {
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    pub child_id: i64,
    #[serde(rename = "medicacao", default)]
    pub medication: Option<String>,
    #[serde(rename = "sintomas", default)]
    pub symptoms: Option<String>,
    #[serde(rename = "observacoes", default)]
    pub notes: Option<String>,
    #[serde(rename = "temperatura", default)]
    pub temperature: Option<f64>,
}

impl NewSaudeRecord {
    /// Whether the temperature, if any, is a plausible body temperature
    pub fn has_plausible_temperature(&self) -> bool {
        self.temperature
            .map_or(true, |t| (MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&t))
    }
}
