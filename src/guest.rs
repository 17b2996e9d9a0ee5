//! Guest domain record and sparse update patch.

use serde::{Deserialize, Serialize};

use crate::types::{RoomNumber, StayStatus};

/// Fully materialized, authoritative guest record.
///
/// The identity `document` is the primary key: it is normalized text
/// (see [`crate::document::normalize`]) and globally unique within a
/// registry. Dates are kept as `dd-mm-yyyy` text, never parsed to a date
/// type; the prompt layer validates their shape before they reach the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRecord {
    /// Normalized identity document; primary key.
    pub document: String,
    /// Full name.
    pub name: String,
    /// Nationality text.
    pub nationality: String,
    /// Assigned room number.
    pub room: RoomNumber,
    /// Entry date as `dd-mm-yyyy` text.
    pub entry_date: String,
    /// Exit date as `dd-mm-yyyy` text.
    pub exit_date: String,
    /// Current stay status.
    pub status: StayStatus,
}

/// Sparse patch where each `Some` field overwrites the record value.
///
/// The identity document is deliberately absent: it is the registry key and
/// cannot be rewritten in place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GuestPatch {
    /// Optional replacement for the full name.
    pub name: Option<String>,
    /// Optional replacement for the nationality.
    pub nationality: Option<String>,
    /// Optional replacement for the room number.
    pub room: Option<RoomNumber>,
    /// Optional replacement for the entry date.
    pub entry_date: Option<String>,
    /// Optional replacement for the exit date.
    pub exit_date: Option<String>,
    /// Optional replacement for the stay status.
    pub status: Option<StayStatus>,
}

impl GuestPatch {
    /// Returns true when no fields are set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Applies this patch in place to `rec`.
    pub fn apply_to(&self, rec: &mut GuestRecord) {
        if let Some(v) = &self.name {
            rec.name = v.clone();
        }
        if let Some(v) = &self.nationality {
            rec.nationality = v.clone();
        }
        if let Some(v) = self.room {
            rec.room = v;
        }
        if let Some(v) = &self.entry_date {
            rec.entry_date = v.clone();
        }
        if let Some(v) = &self.exit_date {
            rec.exit_date = v.clone();
        }
        if let Some(v) = self.status {
            rec.status = v;
        }
    }
}
