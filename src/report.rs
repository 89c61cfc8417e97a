use crate::drill::FlatEventRecord;
use crate::util::{mean, std_dev};
use itertools::Itertools;
use std::collections::{BTreeMap, HashMap};

/// How many error patterns the report shows.
pub const TOP_ERROR_PATTERNS: usize = 10;

/// Whole-dataset statistics over the flattened rows. The accuracy/wpm means
/// average the drill-level columns across flattened rows, so drills with more
/// keystrokes weigh proportionally more.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicStats {
    pub total_events: usize,
    pub avg_accuracy: Option<f64>,
    pub avg_wpm: Option<f64>,
}

pub fn basic_stats(records: &[FlatEventRecord]) -> BasicStats {
    let accuracies: Vec<f64> = records.iter().map(|r| r.accuracy).collect();
    let wpms: Vec<f64> = records.iter().map(|r| r.wpm).collect();

    BasicStats {
        total_events: records.len(),
        avg_accuracy: mean(&accuracies),
        avg_wpm: mean(&wpms),
    }
}

/// Per expected-key aggregate: press count, correct fraction, mean latency.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyStats {
    pub total_presses: usize,
    pub accuracy: f64,
    pub avg_latency: f64,
}

pub fn key_stats(records: &[FlatEventRecord]) -> BTreeMap<String, KeyStats> {
    let mut grouped: BTreeMap<String, Vec<&FlatEventRecord>> = BTreeMap::new();
    for record in records {
        grouped.entry(record.key.clone()).or_default().push(record);
    }

    grouped
        .into_iter()
        .map(|(key, rows)| {
            let total_presses = rows.len();
            let correct = rows.iter().filter(|r| r.is_correct).count();
            let latencies: Vec<f64> = rows.iter().map(|r| r.latency).collect();

            (
                key,
                KeyStats {
                    total_presses,
                    accuracy: correct as f64 / total_presses as f64,
                    avg_latency: mean(&latencies).unwrap_or(f64::NAN),
                },
            )
        })
        .collect()
}

/// Key-down to key-up span in seconds.
pub fn event_duration_secs(record: &FlatEventRecord) -> f64 {
    let delta = record.key_up_time - record.key_down_time;
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1_000_000.0,
        // past ~292k years of span, settle for millisecond precision
        None => delta.num_milliseconds() as f64 / 1_000.0,
    }
}

/// Per-drill duration and performance aggregate. `duration_std` is the sample
/// standard deviation and is undefined for a drill with a single event.
#[derive(Debug, Clone, PartialEq)]
pub struct DrillTimeStats {
    pub avg_duration: f64,
    pub duration_std: Option<f64>,
    pub avg_wpm: f64,
    pub avg_accuracy: f64,
}

pub fn drill_time_stats(records: &[FlatEventRecord]) -> BTreeMap<i32, DrillTimeStats> {
    let mut grouped: BTreeMap<i32, Vec<&FlatEventRecord>> = BTreeMap::new();
    for record in records {
        grouped.entry(record.drill_id).or_default().push(record);
    }

    grouped
        .into_iter()
        .map(|(drill_id, rows)| {
            let durations: Vec<f64> = rows.iter().map(|r| event_duration_secs(r)).collect();
            let wpms: Vec<f64> = rows.iter().map(|r| r.wpm).collect();
            let accuracies: Vec<f64> = rows.iter().map(|r| r.accuracy).collect();

            (
                drill_id,
                DrillTimeStats {
                    avg_duration: mean(&durations).unwrap_or(f64::NAN),
                    duration_std: std_dev(&durations),
                    avg_wpm: mean(&wpms).unwrap_or(f64::NAN),
                    avg_accuracy: mean(&accuracies).unwrap_or(f64::NAN),
                },
            )
        })
        .collect()
}

/// One (expected, typed) mistype pair and how often it occurred.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorPattern {
    pub key: String,
    pub typed_key: String,
    pub count: usize,
}

/// All mistype pairs, most frequent first. Ties break on the pair itself so
/// the ordering is stable across runs.
pub fn error_patterns(records: &[FlatEventRecord]) -> Vec<ErrorPattern> {
    let mut counts: HashMap<(String, String), usize> = HashMap::new();
    for record in records.iter().filter(|r| !r.is_correct) {
        *counts
            .entry((record.key.clone(), record.typed_key.clone()))
            .or_insert(0) += 1;
    }

    counts
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .map(|((key, typed_key), count)| ErrorPattern {
            key,
            typed_key,
            count,
        })
        .collect()
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "NaN".to_string(),
    }
}

/// Render the four report sections in their fixed order. The caller owns the
/// printing; keeping this a pure string transform keeps it testable.
pub fn render_report(records: &[FlatEventRecord]) -> String {
    let mut out = String::new();

    let basic = basic_stats(records);
    out.push_str("\n=== Basic Statistics ===\n");
    out.push_str(&format!(
        "Total number of key events: {}\n",
        basic.total_events
    ));
    out.push_str(&format!(
        "Average accuracy: {}%\n",
        fmt_opt(basic.avg_accuracy)
    ));
    out.push_str(&format!("Average WPM: {}\n", fmt_opt(basic.avg_wpm)));

    out.push_str("\n=== Key-specific Analysis ===\n");
    out.push_str(&format!(
        "{:<10}{:>14}{:>10}{:>13}\n",
        "key", "total_presses", "accuracy", "avg_latency"
    ));
    for (key, stats) in key_stats(records) {
        out.push_str(&format!(
            "{:<10}{:>14}{:>10.2}{:>13.2}\n",
            key, stats.total_presses, stats.accuracy, stats.avg_latency
        ));
    }

    out.push_str("\n=== Time-based Analysis ===\n");
    out.push_str(&format!(
        "{:<10}{:>13}{:>14}{:>9}{:>14}\n",
        "drill_id", "avg_duration", "duration_std", "avg_wpm", "avg_accuracy"
    ));
    for (drill_id, stats) in drill_time_stats(records) {
        out.push_str(&format!(
            "{:<10}{:>13.2}{:>14}{:>9.2}{:>14.2}\n",
            drill_id,
            stats.avg_duration,
            fmt_opt(stats.duration_std),
            stats.avg_wpm,
            stats.avg_accuracy
        ));
    }

    out.push_str("\n=== Error Analysis ===\n");
    out.push_str("Most common error patterns:\n");
    for pattern in error_patterns(records).iter().take(TOP_ERROR_PATTERNS) {
        out.push_str(&format!(
            "('{}', '{}')  {:>5}\n",
            pattern.key, pattern.typed_key, pattern.count
        ));
    }

    out
}
