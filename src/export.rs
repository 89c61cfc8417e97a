use crate::drill::FlatEventRecord;
use crate::error::AnalystError;
use std::path::Path;

/// Write the full flattened record set to a CSV file, one row per keystroke,
/// header taken from the record's field names. An existing file is truncated.
pub fn write_csv<P: AsRef<Path>>(records: &[FlatEventRecord], path: P) -> Result<(), AnalystError> {
    let mut writer = csv::Writer::from_path(path)?;

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use std::fs;
    use tempfile::tempdir;
    use uuid::Uuid;

    fn sample_records() -> Vec<FlatEventRecord> {
        let down = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        vec![
            FlatEventRecord {
                drill_id: 1,
                course_id: Uuid::nil(),
                lesson_id: 2,
                key: "a".to_string(),
                typed_key: "a".to_string(),
                is_correct: true,
                key_down_time: down,
                key_up_time: down + Duration::milliseconds(120),
                latency: 0.12,
                wpm: 42.0,
                accuracy: 96.5,
                practice_text: Some("abc".to_string()),
                typed_text: "abc".to_string(),
            },
            FlatEventRecord {
                drill_id: 1,
                course_id: Uuid::nil(),
                lesson_id: 2,
                key: "b".to_string(),
                typed_key: "c".to_string(),
                is_correct: false,
                key_down_time: down + Duration::seconds(1),
                key_up_time: down + Duration::milliseconds(1300),
                latency: 0.30,
                wpm: 42.0,
                accuracy: 96.5,
                practice_text: None,
                typed_text: "abc".to_string(),
            },
        ]
    }

    #[test]
    fn test_header_and_row_count() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&sample_records(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "drill_id,course_id,lesson_id,key,typed_key,is_correct,key_down_time,key_up_time,latency,wpm,accuracy,practice_text,typed_text"
        );
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn test_rewrite_is_byte_identical() {
        let dir = tempdir().unwrap();
        let records = sample_records();

        let first = dir.path().join("first.csv");
        let second = dir.path().join("second.csv");
        write_csv(&records, &first).unwrap();
        write_csv(&records, &second).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn test_overwrites_stale_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale contents that should disappear").unwrap();

        write_csv(&sample_records(), &path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("stale"));
        assert!(contents.starts_with("drill_id,"));
    }

    #[test]
    fn test_empty_set_writes_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&[], &path).unwrap();

        // serde-driven headers need at least one record; an empty input
        // produces an empty file rather than a header-only one
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.is_empty());
    }
}
