use crate::drill::{DrillStat, FlatEventRecord};
use crate::error::AnalystError;
use chrono::{DateTime, Utc};

/// Parse a key event timestamp. The recorder emits ISO-8601 with a trailing
/// literal `Z`; substitute it for an explicit `+00:00` offset before parsing
/// so both spellings land on the same instant.
pub fn parse_event_time(raw: &str) -> Result<DateTime<Utc>, AnalystError> {
    let normalized = raw.replace('Z', "+00:00");
    let parsed = DateTime::parse_from_rfc3339(&normalized)?;
    Ok(parsed.with_timezone(&Utc))
}

/// Expand each drill's embedded key events into one flat record per
/// keystroke, enriched with the drill-level context. Drills stay in input
/// order and events in embedded order; a drill without events contributes
/// nothing. Output length is always the sum of the per-drill event counts.
pub fn flatten_events(drills: &[DrillStat]) -> Result<Vec<FlatEventRecord>, AnalystError> {
    let mut records = Vec::with_capacity(drills.iter().map(|d| d.key_events.len()).sum());

    for drill in drills {
        for event in &drill.key_events {
            records.push(FlatEventRecord {
                drill_id: drill.id,
                course_id: drill.course_id,
                lesson_id: drill.lesson_id,
                key: event.key.clone(),
                typed_key: event.typed_key.clone(),
                is_correct: event.is_correct,
                key_down_time: parse_event_time(&event.key_down_time)?,
                key_up_time: parse_event_time(&event.key_up_time)?,
                latency: event.latency,
                wpm: drill.wpm,
                accuracy: drill.accuracy,
                practice_text: drill.practice_text.clone(),
                typed_text: drill.typed_text.clone(),
            });
        }
    }

    Ok(records)
}
