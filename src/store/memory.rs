//! In-process store with the same contract as the PostgreSQL one.

use super::CustomerStore;
use crate::error::AppError;
use crate::model::Customer;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
pub struct InMemoryCustomerStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i32, Customer>,
    last_id: i32,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::Storage("customer store lock poisoned".into()))
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn list(&self) -> Result<Vec<Customer>, AppError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Customer>, AppError> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    async fn save(&self, customer: Customer) -> Result<Customer, AppError> {
        let mut inner = self.lock()?;
        if !customer.is_new() && inner.rows.contains_key(&customer.id) {
            inner.rows.insert(customer.id, customer.clone());
            return Ok(customer);
        }
        inner.last_id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::Storage("customer id sequence exhausted".into()))?;
        let saved = Customer {
            id: inner.last_id,
            ..customer
        };
        inner.rows.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.lock()?.rows.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.lock().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_fresh_ids() {
        let store = InMemoryCustomerStore::new();
        let a = store.save(Customer::new("Ann", "Lee", "a@x.com")).await.unwrap();
        let b = store.save(Customer::new("Bob", "Ray", "b@x.com")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.get(1).await.unwrap(), Some(a));
    }

    #[tokio::test]
    async fn save_with_unknown_id_inserts_under_new_id() {
        let store = InMemoryCustomerStore::new();
        let mut c = Customer::new("Ann", "Lee", "a@x.com");
        c.id = 77;
        let saved = store.save(c).await.unwrap();
        assert_ne!(saved.id, 77);
        assert!(store.get(77).await.unwrap().is_none());
        assert!(store.get(saved.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn save_with_existing_id_replaces_every_field() {
        let store = InMemoryCustomerStore::new();
        let saved = store.save(Customer::new("Ann", "Lee", "a@x.com")).await.unwrap();
        let replacement = Customer {
            id: saved.id,
            first_name: Some("Anna".into()),
            last_name: None,
            email: Some("anna@x.com".into()),
        };
        store.save(replacement.clone()).await.unwrap();
        assert_eq!(store.get(saved.id).await.unwrap(), Some(replacement));
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = InMemoryCustomerStore::new();
        let saved = store.save(Customer::new("Ann", "Lee", "a@x.com")).await.unwrap();
        store.delete(saved.id).await.unwrap();
        store.delete(saved.id).await.unwrap();
        store.delete(12345).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn exhausted_id_sequence_is_a_storage_error() {
        let store = InMemoryCustomerStore {
            inner: Mutex::new(Inner {
                rows: BTreeMap::new(),
                last_id: i32::MAX,
            }),
        };
        let err = store.save(Customer::new("Ann", "Lee", "a@x.com")).await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let store = InMemoryCustomerStore::new();
        let first = store.save(Customer::new("Ann", "Lee", "a@x.com")).await.unwrap();
        store.delete(first.id).await.unwrap();
        let second = store.save(Customer::new("Bob", "Ray", "b@x.com")).await.unwrap();
        assert_ne!(first.id, second.id);
    }
}
