use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One keystroke within a drill, as stored in the `key_events_json` column.
///
/// The down/up timestamps stay as the raw ISO-8601 strings from the wire
/// (trailing `Z` marker included); the flattener is responsible for turning
/// them into timezone-aware values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEvent {
    /// The expected key
    pub key: String,
    /// The key actually typed
    pub typed_key: String,
    /// Whether the key was typed correctly
    pub is_correct: bool,
    /// When the key was pressed
    pub key_down_time: String,
    /// When the key was released
    pub key_up_time: String,
    /// Recorded keystroke delay, in seconds
    pub latency: f64,
}

/// One completed typing-drill attempt, read-only once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct DrillStat {
    pub id: i32,
    pub course_id: Uuid,
    pub lesson_id: i32,
    pub key_events: Vec<KeyEvent>,
    pub wpm: f64,
    pub accuracy: f64,
    pub start_time: Option<DateTime<Utc>>,
    pub finish_time: Option<DateTime<Utc>>,
    pub practice_text: Option<String>,
    pub typed_text: String,
}

/// The flattened join of a drill and one of its key events: every row carries
/// both per-keystroke and per-drill attributes. Field order here is the CSV
/// column order of the export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatEventRecord {
    pub drill_id: i32,
    pub course_id: Uuid,
    pub lesson_id: i32,
    pub key: String,
    pub typed_key: String,
    pub is_correct: bool,
    pub key_down_time: DateTime<Utc>,
    pub key_up_time: DateTime<Utc>,
    pub latency: f64,
    pub wpm: f64,
    pub accuracy: f64,
    pub practice_text: Option<String>,
    pub typed_text: String,
}
