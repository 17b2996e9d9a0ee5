//! In-memory guest registry for a small lodging facility, persisted to a
//! flat CSV file with full-overwrite semantics.
//!
//! The registry enforces two admission invariants — unique identity document,
//! unique room occupancy — and keeps an append-only history of mutations.
//! Identity documents are normalized up front: Chilean RUTs are verified
//! against their mod-11 check digit, anything else is accepted as a generic
//! document.
//!
//! # Examples
//!
//! In-memory usage with [`core::registry::Registry`]:
//! ```
//! use guestbook::{
//!     core::registry::Registry,
//!     guest::GuestRecord,
//!     types::StayStatus,
//! };
//!
//! let mut registry = Registry::new();
//! registry.check_in(GuestRecord {
//!     document: "12345678-5".to_string(),
//!     name: "Juan Pérez".to_string(),
//!     nationality: "CL".to_string(),
//!     room: 101,
//!     entry_date: "10-01-2025".to_string(),
//!     exit_date: "15-01-2025".to_string(),
//!     status: StayStatus::Lodged,
//! }).expect("check in");
//! assert!(registry.find_by_room(101).is_some());
//! assert!(registry.find_by_room(999).is_none());
//! ```
//!
//! File-backed usage with [`session::Session`], where every mutation is
//! flushed to the backing CSV before returning:
//! ```no_run
//! use guestbook::{guest::GuestRecord, session::Session, types::StayStatus};
//!
//! let mut session = Session::open("guests.csv").expect("open session");
//! session.check_in(GuestRecord {
//!     document: "12345678-5".to_string(),
//!     name: "Juan Pérez".to_string(),
//!     nationality: "CL".to_string(),
//!     room: 101,
//!     entry_date: "10-01-2025".to_string(),
//!     exit_date: "15-01-2025".to_string(),
//!     status: StayStatus::Lodged,
//! }).expect("check in");
//! let changed = session.synchronize().expect("sync");
//! assert!(!changed);
//! ```
#![deny(missing_docs)]

/// Authoritative in-memory registry store.
pub mod core;
/// Identity-document normalization and RUT check-digit validation.
pub mod document;
/// Guest records and sparse update patches.
pub mod guest;
/// Persistence abstraction and CSV implementation.
pub mod persist;
/// Synchronous session coordinating the registry with its backing file.
pub mod session;
/// Shared primitive types and enums.
pub mod types;
/// Field-level validation predicates for prompt-layer input.
pub mod validate;
