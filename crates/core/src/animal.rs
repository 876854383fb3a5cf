//! Animal domain model, enum normalization and input mapping.
//!
//! [`AnimalInput`] is the shape accepted at the HTTP boundary. It is turned
//! into an [`Animal`] entity on create, or applied field-by-field onto an
//! existing one on update. `sex` and `size` arrive as free-form strings and
//! are normalized to upper case before being matched against the allowed
//! variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::field::Field;
use crate::types::DbId;

/// Entity name used in `CoreError::NotFound`.
pub const ANIMAL_ENTITY: &str = "Animal";

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "MALE",
            Sex::Female => "FEMALE",
        }
    }
}

impl FromStr for Sex {
    type Err = CoreError;

    /// Case-insensitive. The error carries the raw input unchanged.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_uppercase().as_str() {
            "MALE" => Ok(Sex::Male),
            "FEMALE" => Ok(Sex::Female),
            _ => Err(CoreError::InvalidEnumValue {
                field: "sex",
                value: raw.to_string(),
            }),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    pub fn as_str(self) -> &'static str {
        match self {
            Size::Small => "SMALL",
            Size::Medium => "MEDIUM",
            Size::Large => "LARGE",
        }
    }
}

impl FromStr for Size {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_uppercase().as_str() {
            "SMALL" => Ok(Size::Small),
            "MEDIUM" => Ok(Size::Medium),
            "LARGE" => Ok(Size::Large),
            _ => Err(CoreError::InvalidEnumValue {
                field: "size",
                value: raw.to_string(),
            }),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A persisted animal record.
///
/// `id` is `None` only for an entity that has not been saved yet; the store
/// assigns it on first save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: Option<DbId>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub sex: Option<Sex>,
    /// Approximate age in years. Expected to be non-negative; not enforced.
    pub approximate_age: Option<i32>,
    pub size: Option<Size>,
    pub image_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Transfer object
// ---------------------------------------------------------------------------

/// Request payload for create and update.
///
/// Every field is optional. Absent and `null` fields are both treated as
/// "leave unchanged".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimalInput {
    pub species: Field<String>,
    pub breed: Field<String>,
    pub sex: Field<String>,
    pub approximate_age: Field<i32>,
    pub size: Field<String>,
    pub image_url: Field<String>,
}

impl AnimalInput {
    /// Build a new, unsaved entity from this input.
    pub fn into_new_animal(self) -> Result<Animal, CoreError> {
        let mut animal = Animal::default();
        self.apply_to(&mut animal)?;
        Ok(animal)
    }

    /// Overwrite every field of `animal` that carries a value in this input.
    ///
    /// Enum fields are validated before anything is written, so on error
    /// `animal` is left untouched. The `id` is never modified.
    pub fn apply_to(self, animal: &mut Animal) -> Result<(), CoreError> {
        let sex = self.sex.as_value().map(|raw| raw.parse::<Sex>()).transpose()?;
        let size = self
            .size
            .as_value()
            .map(|raw| raw.parse::<Size>())
            .transpose()?;

        if let Some(species) = self.species.into_value() {
            animal.species = Some(species);
        }
        if let Some(breed) = self.breed.into_value() {
            animal.breed = Some(breed);
        }
        if let Some(sex) = sex {
            animal.sex = Some(sex);
        }
        if let Some(age) = self.approximate_age.into_value() {
            animal.approximate_age = Some(age);
        }
        if let Some(size) = size {
            animal.size = Some(size);
        }
        if let Some(url) = self.image_url.into_value() {
            animal.image_url = Some(url);
        }
        Ok(())
    }
}
