//! Flat CSV backing file with full-read / full-overwrite semantics.
//!
//! The file is UTF-8 with a header row and a fixed column order:
//! `identity,name,nationality,room,entry-date,exit-date,status`. Rooms are
//! serialized as decimal text and dates as `dd-mm-yyyy` text, with no other
//! transformation.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::Serialize;

use crate::{
    core::registry::Registry,
    guest::GuestRecord,
    types::StayStatus,
};

use super::PersistResult;

/// Fixed column order of the backing file.
const HEADER: [&str; 7] = [
    "identity",
    "name",
    "nationality",
    "room",
    "entry-date",
    "exit-date",
    "status",
];

/// Serialized row shape; fields follow [`HEADER`] order.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    identity: &'a str,
    name: &'a str,
    nationality: &'a str,
    room: u32,
    entry_date: &'a str,
    exit_date: &'a str,
    status: &'a str,
}

// Positional access mirrors the fixed column order above. Ragged rows are
// tolerated: a missing trailing field reads as empty.
fn record_to_guest(record: &StringRecord) -> Option<GuestRecord> {
    let field = |i: usize| record.get(i).unwrap_or("").trim();

    let room = field(3).parse::<u32>().ok()?;
    let document = field(0).to_string();
    let name = field(1).to_string();
    if document.is_empty() || name.is_empty() {
        return None;
    }

    Some(GuestRecord {
        document,
        name,
        nationality: field(2).to_string(),
        room,
        entry_date: field(4).to_string(),
        exit_date: field(5).to_string(),
        // The source file may predate the typed status; keep the row.
        status: StayStatus::parse(field(6)).unwrap_or(StayStatus::Lodged),
    })
}

/// Streams guests from `path` into the registry.
///
/// A missing file is not an error and loads nothing. Rows whose room
/// number fails integer coercion, or whose identity or name is empty after
/// trimming, are skipped silently, as are rows the registry rejects
/// (duplicate identity, occupied room). Returns the number of guests
/// actually registered.
pub fn load(registry: &mut Registry, path: &Path) -> PersistResult<usize> {
    if !path.exists() {
        return Ok(0);
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut added = 0;
    for result in reader.records() {
        let record = result?;
        if let Some(guest) = record_to_guest(&record) {
            if registry.check_in(guest).is_ok() {
                added += 1;
            }
        }
    }
    Ok(added)
}

/// Destructively replaces in-memory state with the file contents.
///
/// Clears guests, occupancy, and history, then performs [`load`]; this is
/// a full replace, never a merge.
pub fn reload(registry: &mut Registry, path: &Path) -> PersistResult<usize> {
    registry.clear();
    load(registry, path)
}

/// Reloads from the file and reports whether observable state changed.
///
/// Comparison is order-insensitive over the guest mapping and room set and
/// exact over the history, so calling this twice with no external file
/// change reports no change the second time.
pub fn synchronize(registry: &mut Registry, path: &Path) -> PersistResult<bool> {
    let before = registry.export_snapshot();
    reload(registry, path)?;
    Ok(registry.export_snapshot() != before)
}

/// Overwrites `path` with the full guest collection.
///
/// Guests are written sorted by identity document in byte order, after a
/// header row.
pub fn save(registry: &Registry, path: &Path) -> PersistResult<()> {
    let mut guests = registry.list();
    guests.sort_by(|a, b| a.document.cmp(&b.document));

    // The header is written unconditionally so an empty registry still
    // produces a well-formed file.
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(HEADER)?;
    for guest in guests {
        writer.serialize(CsvRow {
            identity: &guest.document,
            name: &guest.name,
            nationality: &guest.nationality,
            room: guest.room,
            entry_date: &guest.entry_date,
            exit_date: &guest.exit_date,
            status: guest.status.as_str(),
        })?;
    }
    writer.flush()?;
    Ok(())
}
