use hashbrown::{HashMap, HashSet};

use crate::{
    guest::{GuestPatch, GuestRecord},
    types::RoomNumber,
};

/// Recoverable invariant violation reported by registry operations.
///
/// The registry never mutates on error; the caller surfaces a message and
/// leaves the store as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A guest with this identity document is already registered.
    DuplicateIdentity(String),
    /// The requested room is already assigned to another guest.
    RoomOccupied(RoomNumber),
    /// No guest is registered under this identity document.
    MissingGuest(String),
}

/// Order-insensitive view of registry state, used to detect whether a
/// reload from the backing file actually changed anything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrySnapshot {
    /// Guests keyed by identity document.
    pub guests: HashMap<String, GuestRecord>,
    /// Rooms currently assigned.
    pub occupied_rooms: HashSet<RoomNumber>,
    /// Action history, one entry per mutation.
    pub history: Vec<String>,
}

/// Authoritative in-memory guest registry.
///
/// Owns all guest records, the derived occupied-room set, and an
/// append-only action history. The room set always equals exactly the
/// rooms present among the registered guests, and listing order is
/// check-in order.
#[derive(Debug, Default)]
pub struct Registry {
    guests: HashMap<String, GuestRecord>,
    order: Vec<String>,
    occupied: HashSet<RoomNumber>,
    history: Vec<String>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a guest if its document is unused and its room is free.
    ///
    /// Either all state updates happen (record, room, history entry) or
    /// none do.
    pub fn check_in(&mut self, guest: GuestRecord) -> Result<(), RegistryError> {
        if self.guests.contains_key(&guest.document) {
            return Err(RegistryError::DuplicateIdentity(guest.document));
        }
        if self.occupied.contains(&guest.room) {
            return Err(RegistryError::RoomOccupied(guest.room));
        }

        self.occupied.insert(guest.room);
        self.order.push(guest.document.clone());
        self.history.push(format!("CHECK-IN: {}", guest.document));
        self.guests.insert(guest.document.clone(), guest);
        Ok(())
    }

    /// Returns all guests in check-in order.
    pub fn list(&self) -> Vec<&GuestRecord> {
        self.order
            .iter()
            .filter_map(|doc| self.guests.get(doc))
            .collect()
    }

    /// Direct lookup by identity document.
    pub fn find_by_document(&self, document: &str) -> Option<&GuestRecord> {
        self.guests.get(document)
    }

    /// Applies a sparse patch to an existing guest.
    ///
    /// Fails when the guest is missing, or when the patch moves the guest
    /// to a room another guest already occupies; no mutation happens on
    /// failure. A room change releases the old room and claims the new one.
    pub fn update(&mut self, document: &str, patch: GuestPatch) -> Result<(), RegistryError> {
        let rec = self
            .guests
            .get_mut(document)
            .ok_or_else(|| RegistryError::MissingGuest(document.to_string()))?;

        if let Some(new_room) = patch.room {
            let current = rec.room;
            if new_room != current && self.occupied.contains(&new_room) {
                return Err(RegistryError::RoomOccupied(new_room));
            }
            self.occupied.remove(&current);
            self.occupied.insert(new_room);
        }

        patch.apply_to(rec);
        self.history.push(format!("UPDATE: {document}"));
        Ok(())
    }

    /// Removes a guest and frees its room.
    pub fn delete(&mut self, document: &str) -> Result<(), RegistryError> {
        let rec = self
            .guests
            .remove(document)
            .ok_or_else(|| RegistryError::MissingGuest(document.to_string()))?;

        self.occupied.remove(&rec.room);
        if let Some(pos) = self.order.iter().position(|d| d == document) {
            self.order.remove(pos);
        }
        self.history.push(format!("DELETE: {document}"));
        Ok(())
    }

    /// Finds the guest occupying `room` by sequential scan.
    ///
    /// Contract: this is a recursive walk over the listing order, returning
    /// the first match or `None` once the collection is exhausted. It stays
    /// a linear scan on purpose; there is no room-to-guest index.
    pub fn find_by_room(&self, room: RoomNumber) -> Option<&GuestRecord> {
        fn scan<'a>(
            guests: &[&'a GuestRecord],
            room: RoomNumber,
            index: usize,
        ) -> Option<&'a GuestRecord> {
            if index >= guests.len() {
                return None;
            }
            if guests[index].room == room {
                return Some(guests[index]);
            }
            scan(guests, room, index + 1)
        }

        scan(&self.list(), room, 0)
    }

    /// True when `room` is currently assigned.
    pub fn is_room_occupied(&self, room: RoomNumber) -> bool {
        self.occupied.contains(&room)
    }

    /// Number of registered guests.
    pub fn len(&self) -> usize {
        self.guests.len()
    }

    /// True when no guests are registered.
    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    /// Append-only action history, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Clears guests, occupancy, and history.
    pub fn clear(&mut self) {
        self.guests.clear();
        self.order.clear();
        self.occupied.clear();
        self.history.clear();
    }

    /// Exports an order-insensitive snapshot of the current state.
    pub fn export_snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            guests: self.guests.clone(),
            occupied_rooms: self.occupied.clone(),
            history: self.history.clone(),
        }
    }
}
