//! Domain records for the pet-owner dataset.
//!
//! # Design
//! These types mirror the remote people document but are defined
//! independently of any transport or server crate. Records are plain data:
//! each pipeline stage produces new values rather than mutating its input,
//! so nothing here carries behavior beyond field defaults. The output DTOs
//! (`PetsByGender`, `Outcome`) serialize with camelCase field names because
//! that is the wire shape the presentation layer consumes.

use serde::Serialize;

/// Gender of a pet owner. Closed set; the codec in [`crate::codec`] is the
/// only way a value enters or leaves its canonical string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OwnerGender {
    #[default]
    Male,
    Female,
}

/// Species of a pet. Closed set known at compile time; a new species
/// requires extending the codec's member table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PetType {
    #[default]
    Dog,
    Cat,
    Fish,
}

/// A pet owner as parsed from the remote document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Owner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub gender: OwnerGender,
    pub age: u32,
    pub pets: Vec<Pet>,
}

/// A single pet. `kind` is the serialized `type` field; renamed because
/// `type` is reserved in Rust.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Pet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: PetType,
}

/// Query result: all matching pet names for one queried gender.
///
/// `owner_gender` is fixed at construction to the canonical string form of
/// the gender that was queried, even when no pets matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetsByGender {
    pub owner_gender: String,
    pub pet_names: Vec<String>,
}

/// Tagged outcome returned across the pipeline boundary. Failures never
/// cross as errors; the client only ever sees `hasError` plus an absent
/// payload, with diagnostic detail going to the log instead.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub has_error: bool,
    pub data: Option<PetsByGender>,
}

impl Outcome {
    pub fn success(data: PetsByGender) -> Self {
        Self {
            has_error: false,
            data: Some(data),
        }
    }

    pub fn failure() -> Self {
        Self {
            has_error: true,
            data: None,
        }
    }
}
