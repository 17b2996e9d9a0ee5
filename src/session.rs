//! Synchronous session tying a [`Registry`] to its backing CSV file.
//!
//! Every mutating operation applies to the in-memory registry and then
//! rewrites the whole backing file before returning, so the caller observes
//! durability-on-return at the cost of O(n) work per mutation. There is
//! exactly one execution context; no locking is provided for the file, and
//! concurrent external writers are out of scope.

use std::path::{Path, PathBuf};

use crate::{
    core::registry::{Registry, RegistryError},
    guest::{GuestPatch, GuestRecord},
    persist::{PersistError, PersistResult, csv},
    types::{RoomNumber, StayStatus},
};

/// Error surfaced by session operations.
#[derive(Debug)]
pub enum SessionError {
    /// An invariant violation from the registry; state is unchanged.
    Registry(RegistryError),
    /// A persistence failure; treat as fatal for the backing file.
    Persist(PersistError),
}

impl From<RegistryError> for SessionError {
    fn from(value: RegistryError) -> Self {
        Self::Registry(value)
    }
}

impl From<PersistError> for SessionError {
    fn from(value: PersistError) -> Self {
        Self::Persist(value)
    }
}

/// Caller-owned session state: the live registry plus its backing path.
pub struct Session {
    registry: Registry,
    path: PathBuf,
}

impl Session {
    /// Opens a session against `path`, hydrating the registry from it.
    ///
    /// A missing file yields an empty session; the file is created on the
    /// first mutation.
    pub fn open(path: impl Into<PathBuf>) -> PersistResult<Self> {
        let path = path.into();
        let mut registry = Registry::new();
        csv::load(&mut registry, &path)?;
        Ok(Self { registry, path })
    }

    /// Registers a guest and flushes the registry to the backing file.
    pub fn check_in(&mut self, guest: GuestRecord) -> Result<(), SessionError> {
        self.registry.check_in(guest)?;
        csv::save(&self.registry, &self.path)?;
        Ok(())
    }

    /// Applies a patch to a guest and flushes to the backing file.
    pub fn update(&mut self, document: &str, patch: GuestPatch) -> Result<(), SessionError> {
        self.registry.update(document, patch)?;
        csv::save(&self.registry, &self.path)?;
        Ok(())
    }

    /// Marks a guest as checked out.
    ///
    /// A status transition only: the record stays in the registry until
    /// deleted, and the room remains assigned.
    pub fn check_out(&mut self, document: &str) -> Result<(), SessionError> {
        self.update(
            document,
            GuestPatch {
                status: Some(StayStatus::CheckedOut),
                ..GuestPatch::default()
            },
        )
    }

    /// Removes a guest and flushes to the backing file.
    pub fn delete(&mut self, document: &str) -> Result<(), SessionError> {
        self.registry.delete(document)?;
        csv::save(&self.registry, &self.path)?;
        Ok(())
    }

    /// Pulls the latest file contents, reporting whether anything changed.
    ///
    /// Destructive reload: any in-memory-only state is discarded. Since
    /// every mutation flushes before returning, there normally is none.
    pub fn synchronize(&mut self) -> PersistResult<bool> {
        csv::synchronize(&mut self.registry, &self.path)
    }

    /// Direct lookup by identity document.
    pub fn guest(&self, document: &str) -> Option<&GuestRecord> {
        self.registry.find_by_document(document)
    }

    /// All guests in check-in order.
    pub fn guests(&self) -> Vec<&GuestRecord> {
        self.registry.list()
    }

    /// Sequential-scan lookup by room number.
    pub fn guest_in_room(&self, room: RoomNumber) -> Option<&GuestRecord> {
        self.registry.find_by_room(room)
    }

    /// Action history of the current in-memory state.
    pub fn history(&self) -> &[String] {
        self.registry.history()
    }

    /// Read access to the underlying registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
