//! Daily routine entries ("rotina") recorded for a child.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a child ate, how they slept and what they did on a given day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rotina {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub child_id: i64,
    #[serde(rename = "alimentacao")]
    pub meals: String,
    #[serde(rename = "sono")]
    pub sleep: String,
    #[serde(rename = "atividades")]
    pub activities: String,
    #[serde(rename = "observacoes")]
    pub notes: Option<String>,
}

/// Fields supplied when recording a routine; `date` defaults to now
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRotina {
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    pub child_id: i64,
    #[serde(rename = "alimentacao")]
    pub meals: String,
    #[serde(rename = "sono")]
    pub sleep: String,
    #[serde(rename = "atividades")]
    pub activities: String,
    #[serde(rename = "observacoes", default)]
    pub notes: Option<String>,
}
