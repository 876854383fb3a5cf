//! Repository layer.
//!
//! [`AnimalStore`] is the persistence seam consumed by the HTTP handlers.
//! Two backends implement it: [`PgAnimalStore`] over a PostgreSQL pool and
//! [`InMemoryAnimalStore`] for local runs without a database and for tests.

pub mod animal_repo;
pub mod in_memory_animal_repo;

pub use animal_repo::PgAnimalStore;
pub use in_memory_animal_repo::InMemoryAnimalStore;

use async_trait::async_trait;
use shelter_core::animal::Animal;
use shelter_core::types::DbId;

/// Generic CRUD primitives over stored animals.
#[async_trait]
pub trait AnimalStore: Send + Sync {
    /// Every stored animal, ordered by id.
    async fn find_all(&self) -> Result<Vec<Animal>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Animal>, sqlx::Error>;

    async fn exists_by_id(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Insert when `animal.id` is `None`, assigning a fresh id. Otherwise
    /// overwrite the stored row with that id.
    ///
    /// Overwriting an id that does not exist returns `sqlx::Error::RowNotFound`.
    async fn save(&self, animal: Animal) -> Result<Animal, sqlx::Error>;

    /// Remove an animal. Returns `true` if a row was removed.
    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Liveness probe for the backing storage.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}
