//! PostgreSQL store for the `animals` table.

use async_trait::async_trait;
use shelter_core::animal::{Animal, Sex, Size};
use shelter_core::types::DbId;
use sqlx::{FromRow, PgPool};

use super::AnimalStore;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, species, breed, sex, approximate_age, size, image_url";

/// Raw row shape. Enum columns are stored as their upper-case names.
#[derive(Debug, FromRow)]
struct AnimalRow {
    id: DbId,
    species: Option<String>,
    breed: Option<String>,
    sex: Option<String>,
    approximate_age: Option<i32>,
    size: Option<String>,
    image_url: Option<String>,
}

impl AnimalRow {
    fn into_animal(self) -> Result<Animal, sqlx::Error> {
        let sex = self
            .sex
            .as_deref()
            .map(str::parse::<Sex>)
            .transpose()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        let size = self
            .size
            .as_deref()
            .map(str::parse::<Size>)
            .transpose()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        Ok(Animal {
            id: Some(self.id),
            species: self.species,
            breed: self.breed,
            sex,
            approximate_age: self.approximate_age,
            size,
            image_url: self.image_url,
        })
    }
}

/// [`AnimalStore`] backed by a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgAnimalStore {
    pool: PgPool,
}

impl PgAnimalStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, animal: &Animal) -> Result<AnimalRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO animals (species, breed, sex, approximate_age, size, image_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AnimalRow>(&query)
            .bind(&animal.species)
            .bind(&animal.breed)
            .bind(animal.sex.map(Sex::as_str))
            .bind(animal.approximate_age)
            .bind(animal.size.map(Size::as_str))
            .bind(&animal.image_url)
            .fetch_one(&self.pool)
            .await
    }

    /// Full overwrite of every column. `None` fields are written as NULL.
    async fn overwrite(&self, id: DbId, animal: &Animal) -> Result<Option<AnimalRow>, sqlx::Error> {
        let query = format!(
            "UPDATE animals SET
                species = $2,
                breed = $3,
                sex = $4,
                approximate_age = $5,
                size = $6,
                image_url = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AnimalRow>(&query)
            .bind(id)
            .bind(&animal.species)
            .bind(&animal.breed)
            .bind(animal.sex.map(Sex::as_str))
            .bind(animal.approximate_age)
            .bind(animal.size.map(Size::as_str))
            .bind(&animal.image_url)
            .fetch_optional(&self.pool)
            .await
    }
}

#[async_trait]
impl AnimalStore for PgAnimalStore {
    async fn find_all(&self) -> Result<Vec<Animal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animals ORDER BY id");
        sqlx::query_as::<_, AnimalRow>(&query)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(AnimalRow::into_animal)
            .collect()
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Animal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animals WHERE id = $1");
        sqlx::query_as::<_, AnimalRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(AnimalRow::into_animal)
            .transpose()
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM animals WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    async fn save(&self, animal: Animal) -> Result<Animal, sqlx::Error> {
        let row = match animal.id {
            None => self.insert(&animal).await?,
            Some(id) => self
                .overwrite(id, &animal)
                .await?
                .ok_or(sqlx::Error::RowNotFound)?,
        };
        row.into_animal()
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM animals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
