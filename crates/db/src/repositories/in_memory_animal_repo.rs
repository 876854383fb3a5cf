//! In-memory animal store.
//!
//! Rows live in a `BTreeMap` keyed by id behind a tokio `Mutex`, so listing
//! comes back in id order like the PostgreSQL store. Ids are handed out from
//! a counter starting at 1 and are never reused, even after a delete.

use std::collections::BTreeMap;

use async_trait::async_trait;
use shelter_core::animal::Animal;
use shelter_core::types::DbId;
use tokio::sync::Mutex;

use super::AnimalStore;

#[derive(Debug)]
struct Inner {
    rows: BTreeMap<DbId, Animal>,
    next_id: DbId,
}

#[derive(Debug)]
pub struct InMemoryAnimalStore {
    inner: Mutex<Inner>,
}

impl InMemoryAnimalStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryAnimalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnimalStore for InMemoryAnimalStore {
    async fn find_all(&self) -> Result<Vec<Animal>, sqlx::Error> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Animal>, sqlx::Error> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.contains_key(&id))
    }

    async fn save(&self, mut animal: Animal) -> Result<Animal, sqlx::Error> {
        let mut inner = self.inner.lock().await;
        let id = match animal.id {
            Some(id) if inner.rows.contains_key(&id) => id,
            Some(_) => return Err(sqlx::Error::RowNotFound),
            None => {
                let id = inner.next_id;
                inner.next_id += 1;
                animal.id = Some(id);
                id
            }
        };
        inner.rows.insert(id, animal.clone());
        Ok(animal)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let mut inner = self.inner.lock().await;
        Ok(inner.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
