//! Record Store: normalizes raw tabular text into typed records
//!
//! Both source tables are comma-delimited with a mandatory header row and
//! optional double-quote field escaping. Columns are located by header name,
//! so column order does not matter and unknown columns are ignored.
//!
//! Parsing trades strictness for resilience to dirty input: a blank or
//! unparsable numeric cell becomes `0.0`, and a row missing its identifier or
//! timestamp is dropped rather than failing the whole ingestion. Only a
//! missing header row or a missing required column is an error.

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::StoreError;
use crate::model::{EntityId, EntityInfo, Snapshot};

/// Parse the snapshot table (`id`, `timestamp`, and the metric columns).
///
/// A metric column absent from the header yields `0.0` for every row, the
/// same degradation applied to unparsable cells.
pub fn parse_snapshots(text: &str) -> Result<Vec<Snapshot>, StoreError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
        return Err(StoreError::MissingHeader);
    }

    let id_col = require_column(&headers, "id")?;
    let timestamp_col = require_column(&headers, "timestamp")?;
    let views_col = find_column(&headers, "views");
    let vote_col = find_column(&headers, "vote");
    let alarm_col = find_column(&headers, "alarm");
    let like_col = find_column(&headers, "like");

    let mut snapshots = Vec::new();
    for record in reader.records() {
        let record = record?;
        let id = text_cell(&record, Some(id_col));
        let timestamp = text_cell(&record, Some(timestamp_col));
        if id.is_empty() || timestamp.is_empty() {
            continue;
        }
        snapshots.push(Snapshot {
            entity: EntityId::from(id),
            timestamp: timestamp.to_owned(),
            views: numeric_cell(&record, views_col),
            vote: numeric_cell(&record, vote_col),
            alarm: numeric_cell(&record, alarm_col),
            like: numeric_cell(&record, like_col),
        });
    }
    Ok(snapshots)
}

/// Parse the entity-list table (`id`, `title`).
pub fn parse_entities(text: &str) -> Result<Vec<EntityInfo>, StoreError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
        return Err(StoreError::MissingHeader);
    }

    let id_col = require_column(&headers, "id")?;
    let title_col = require_column(&headers, "title")?;

    let mut entities = Vec::new();
    for record in reader.records() {
        let record = record?;
        let id = text_cell(&record, Some(id_col));
        if id.is_empty() {
            continue;
        }
        entities.push(EntityInfo {
            id: EntityId::from(id),
            title: text_cell(&record, Some(title_col)).to_owned(),
        });
    }
    Ok(entities)
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn require_column(headers: &StringRecord, name: &'static str) -> Result<usize, StoreError> {
    find_column(headers, name).ok_or(StoreError::MissingColumn(name))
}

fn text_cell<'a>(record: &'a StringRecord, column: Option<usize>) -> &'a str {
    column.and_then(|i| record.get(i)).unwrap_or("")
}

fn numeric_cell(record: &StringRecord, column: Option<usize>) -> f64 {
    text_cell(record, column).parse().unwrap_or(0.0)
}
