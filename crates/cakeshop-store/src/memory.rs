use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Mutex, MutexGuard, PoisonError};

use cakeshop_models::User;

use crate::{StoreError, UserStore};

/// Thread-safe, in-memory user store.
///
/// One `Mutex` covers the whole map and is taken by reads as well as
/// writes, so all operations are totally ordered. Critical sections
/// are a single map operation plus a clone.
///
/// A poisoned lock is recovered: every critical section either completes a
/// whole-record write or performs none, so the map is never left torn.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UserStore for InMemoryUserStore {
    fn add(&self, key: &str, user: User) -> Result<(), StoreError> {
        match self.lock().entry(key.to_string()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(user);
                Ok(())
            }
        }
    }

    fn get(&self, key: &str) -> Result<User, StoreError> {
        self.lock().get(key).cloned().ok_or(StoreError::NotFound)
    }

    fn update(&self, key: &str, user: User) -> Result<(), StoreError> {
        let mut users = self.lock();
        let slot = users.get_mut(key).ok_or(StoreError::NotFound)?;
        *slot = user;
        Ok(())
    }

    fn modify(&self, key: &str, change: &mut dyn FnMut(&mut User)) -> Result<User, StoreError> {
        let mut users = self.lock();
        let slot = users.get_mut(key).ok_or(StoreError::NotFound)?;
        change(slot);
        Ok(slot.clone())
    }

    fn delete(&self, key: &str) -> Result<User, StoreError> {
        self.lock().remove(key).ok_or(StoreError::NotFound)
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}
