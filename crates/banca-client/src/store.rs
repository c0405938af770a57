//! # Entity Stores
//!
//! Shared, read-mostly caches of each resource's most recently known
//! collection.
//!
//! ## Mutation Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Store Mutation Discipline                          │
//! │                                                                         │
//! │  list fetch succeeds  ──► set_all(response)   (wholesale replacement)   │
//! │  create succeeds      ──► push(entity)        (server response order)   │
//! │  update/patch succeeds──► replace(entity)     (in place, by id;         │
//! │                                                no-op when id unknown)   │
//! │                                                                         │
//! │  call pending  → store untouched (no optimistic writes)                 │
//! │  call failed   → store untouched (errors never clear state)             │
//! │                                                                         │
//! │  Writers: only the service continuation that owns the call.             │
//! │  Readers: anyone, via snapshot()/with() - mutators are crate-private,   │
//! │  so outside this crate the store is read-only by construction.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use banca_core::{Account, Category, Order, Product, Transaction};

// =============================================================================
// Entity Identity
// =============================================================================

/// Anything held in a store: keyed by an opaque string id, unique within
/// the collection.
pub trait Entity {
    fn id(&self) -> &str;
}

impl Entity for Account {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// Store
// =============================================================================

/// Shared handle to a resource's last-known collection.
///
/// Cloning the handle shares the underlying collection; all clones observe
/// the same state. Locks are held only for the duration of one accessor.
#[derive(Debug)]
pub struct Store<T> {
    inner: Arc<Mutex<Vec<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Store {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Store::new()
    }
}

impl<T> Store<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Store {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Runs `f` against the current collection under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        let guard = self.inner.lock().expect("Store mutex poisoned");
        f(&guard)
    }

    pub fn len(&self) -> usize {
        self.with(|items| items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.with(|items| items.is_empty())
    }

    /// Wholesale replacement after a successful list fetch.
    pub(crate) fn set_all(&self, items: Vec<T>) {
        *self.inner.lock().expect("Store mutex poisoned") = items;
    }

    /// Appends a created entity (server response order, never re-sorted).
    pub(crate) fn push(&self, item: T) {
        self.inner.lock().expect("Store mutex poisoned").push(item);
    }
}

impl<T: Clone> Store<T> {
    /// Clones the current collection out.
    pub fn snapshot(&self) -> Vec<T> {
        self.with(|items| items.to_vec())
    }
}

impl<T: Entity + Clone> Store<T> {
    /// Looks an entity up by id.
    pub fn find_by_id(&self, id: &str) -> Option<T> {
        self.with(|items| items.iter().find(|item| item.id() == id).cloned())
    }
}

impl<T: Entity> Store<T> {
    /// Replaces the matching entry in place, preserving its position.
    /// No-op (returns false) when no entry has the entity's id.
    pub(crate) fn replace(&self, item: T) -> bool {
        let mut guard = self.inner.lock().expect("Store mutex poisoned");
        match guard.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(existing) => {
                *existing = item;
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
