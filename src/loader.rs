use crate::config::DbConfig;
use crate::drill::{DrillStat, KeyEvent};
use crate::error::AnalystError;
use postgres::{Client, NoTls, Row};

/// Fixed projection over the drill-statistics table. No filtering, paging, or
/// ordering: the whole table comes back in whatever order the server picks.
const DRILL_STATS_QUERY: &str = "\
    SELECT id, course_id, lesson_id, key_events_json, wpm, accuracy, \
           start_time, finish_time, practice_text, typed_text \
    FROM drill_stats";

/// Open one connection, run the one query, map every row, close. Any
/// connection, query, or decode failure aborts the run.
pub fn load_drill_stats(cfg: &DbConfig) -> Result<Vec<DrillStat>, AnalystError> {
    let mut client = Client::connect(&cfg.connection_string(), NoTls)?;
    let rows = client.query(DRILL_STATS_QUERY, &[])?;

    let mut drills = Vec::with_capacity(rows.len());
    for row in &rows {
        drills.push(drill_stat_from_row(row)?);
    }

    Ok(drills)
}

fn drill_stat_from_row(row: &Row) -> Result<DrillStat, AnalystError> {
    let raw_events: serde_json::Value = row.try_get("key_events_json")?;
    let key_events: Vec<KeyEvent> = serde_json::from_value(raw_events)?;

    Ok(DrillStat {
        id: row.try_get("id")?,
        course_id: row.try_get("course_id")?,
        lesson_id: row.try_get("lesson_id")?,
        key_events,
        wpm: row.try_get("wpm")?,
        accuracy: row.try_get("accuracy")?,
        start_time: row.try_get("start_time")?,
        finish_time: row.try_get("finish_time")?,
        practice_text: row.try_get("practice_text")?,
        typed_text: row.try_get("typed_text")?,
    })
}
