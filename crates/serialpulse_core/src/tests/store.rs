//! Tests for tabular ingestion

use crate::error::StoreError;
use crate::model::{EntityId, Metric};
use crate::store::{parse_entities, parse_snapshots};

#[test]
fn parses_columns_by_header_name() {
    // Column order differs from the struct; an unknown column is ignored.
    let text = "timestamp,views,id,rank,vote,alarm,like\n\
                2024010100,10,n1,3,1,0,2\n\
                2024010200,25,n1,2,4,1,2\n";
    let snapshots = parse_snapshots(text).unwrap();
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0].entity, EntityId::from("n1"));
    assert_eq!(snapshots[0].timestamp, "2024010100");
    assert_eq!(snapshots[0].views, 10.0);
    assert_eq!(snapshots[1].vote, 4.0);
    assert_eq!(snapshots[1].like, 2.0);
}

#[test]
fn quoted_fields_are_unescaped() {
    let text = "id,title\n\"n1\",\"Sword, Reborn\"\nn2,Plain Title\n";
    let entities = parse_entities(text).unwrap();
    assert_eq!(entities.len(), 2);
    assert_eq!(entities[0].id, EntityId::from("n1"));
    assert_eq!(entities[0].title, "Sword, Reborn");
    assert_eq!(entities[1].title, "Plain Title");
}

#[test]
fn blank_or_malformed_numeric_cells_default_to_zero() {
    let text = "id,timestamp,views,vote,alarm,like\n\
                n1,2024010100,,abc,3,1\n";
    let snapshots = parse_snapshots(text).unwrap();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].views, 0.0);
    assert_eq!(snapshots[0].vote, 0.0);
    assert_eq!(snapshots[0].alarm, 3.0);
    assert_eq!(snapshots[0].like, 1.0);
}

#[test]
fn missing_metric_column_defaults_to_zero() {
    let text = "id,timestamp,views\nn1,2024010100,7\n";
    let snapshots = parse_snapshots(text).unwrap();
    assert_eq!(snapshots[0].metric(Metric::Views), 7.0);
    assert_eq!(snapshots[0].metric(Metric::Vote), 0.0);
    assert_eq!(snapshots[0].metric(Metric::Alarm), 0.0);
    assert_eq!(snapshots[0].metric(Metric::Like), 0.0);
}

#[test]
fn short_rows_are_tolerated() {
    // The second row is truncated after the timestamp.
    let text = "id,timestamp,views,vote,alarm,like\n\
                n1,2024010100,1,2,3,4\n\
                n1,2024010200\n";
    let snapshots = parse_snapshots(text).unwrap();
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[1].views, 0.0);
}

#[test]
fn rows_without_identifier_or_timestamp_are_dropped() {
    let text = "id,timestamp,views\n,2024010100,5\nn1,,6\nn1,2024010200,7\n";
    let snapshots = parse_snapshots(text).unwrap();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].views, 7.0);
}

#[test]
fn empty_input_reports_missing_header() {
    assert!(matches!(parse_snapshots(""), Err(StoreError::MissingHeader)));
    assert!(matches!(parse_entities(""), Err(StoreError::MissingHeader)));
}

#[test]
fn missing_required_column_is_an_error() {
    let no_timestamp = "id,views\nn1,10\n";
    assert!(matches!(
        parse_snapshots(no_timestamp),
        Err(StoreError::MissingColumn("timestamp"))
    ));

    let no_title = "id\nn1\n";
    assert!(matches!(
        parse_entities(no_title),
        Err(StoreError::MissingColumn("title"))
    ));
}
