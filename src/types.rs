//! Shared primitive types and status enum.

use serde::{Deserialize, Serialize};

/// Positive room number assigned to at most one guest at a time.
pub type RoomNumber = u32;

/// Stay status of a registered guest.
///
/// A checked-out guest keeps its record; the status is an overwritable field
/// and moving back to [`StayStatus::Lodged`] is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StayStatus {
    /// Currently lodged in the facility.
    #[default]
    Lodged,
    /// Departed; the record remains until deleted.
    CheckedOut,
}

impl StayStatus {
    /// Canonical text form used in the backing file.
    pub fn as_str(self) -> &'static str {
        match self {
            StayStatus::Lodged => "Lodged",
            StayStatus::CheckedOut => "CheckedOut",
        }
    }

    /// Parses the canonical text form, ignoring case.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "lodged" => Some(StayStatus::Lodged),
            "checkedout" | "checked-out" => Some(StayStatus::CheckedOut),
            _ => None,
        }
    }
}
