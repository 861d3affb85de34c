//! Strict string codecs for the closed enum sets.
//!
//! # Design
//! The remote document carries `gender` and `type` as case-sensitive
//! strings. Each enum implements [`EnumCodec`]: a compile-time member table
//! mapping canonical names to members, an `encode` to the canonical form,
//! and a provided `decode` that matches tokens by exact comparison — no
//! case folding, no trimming. Which codec handles which field is decided by
//! static dispatch at the call site in the parser, not by runtime type
//! inspection.
//!
//! Decode failures split into two reasons the parser reports separately:
//! a token that is present but matches no canonical name, and a token that
//! is absent (JSON `null`). The serde impls below route through the codec
//! so the canonical strings are the only wire form these enums ever take.

use serde::de::{self, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use thiserror::Error;

use crate::types::{OwnerGender, PetType};

/// Why a token failed to decode into an enum member.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The token was present but matched no canonical name.
    #[error("`{0}` is not a recognized value")]
    Invalid(String),

    /// The token was absent (JSON `null` or nothing to read).
    #[error("value is missing")]
    Missing,
}

/// Strict codec between an enum and its canonical string form.
pub trait EnumCodec: Copy + Eq + Sized + 'static {
    /// Every member paired with its canonical serialized name. Closed set;
    /// exhaustive by construction.
    const MEMBERS: &'static [(&'static str, Self)];

    /// The canonical string form of this member (exact case).
    fn encode(self) -> &'static str;

    /// Decode a token by case- and whitespace-sensitive exact match against
    /// the canonical names. `None` means the token was absent.
    fn decode(token: Option<&str>) -> Result<Self, CodecError> {
        let token = token.ok_or(CodecError::Missing)?;
        Self::MEMBERS
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, member)| *member)
            .ok_or_else(|| CodecError::Invalid(token.to_string()))
    }
}

impl EnumCodec for OwnerGender {
    const MEMBERS: &'static [(&'static str, Self)] =
        &[("Male", OwnerGender::Male), ("Female", OwnerGender::Female)];

    fn encode(self) -> &'static str {
        match self {
            OwnerGender::Male => "Male",
            OwnerGender::Female => "Female",
        }
    }
}

impl EnumCodec for PetType {
    const MEMBERS: &'static [(&'static str, Self)] = &[
        ("Dog", PetType::Dog),
        ("Cat", PetType::Cat),
        ("Fish", PetType::Fish),
    ];

    fn encode(self) -> &'static str {
        match self {
            PetType::Dog => "Dog",
            PetType::Cat => "Cat",
            PetType::Fish => "Fish",
        }
    }
}

struct CodecVisitor<T>(std::marker::PhantomData<T>);

impl<T: EnumCodec> Visitor<'_> for CodecVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "one of the canonical names {:?}", canonical_names::<T>())
    }

    fn visit_str<E: de::Error>(self, token: &str) -> Result<T, E> {
        T::decode(Some(token)).map_err(E::custom)
    }

    fn visit_unit<E: de::Error>(self) -> Result<T, E> {
        Err(E::custom(CodecError::Missing))
    }

    fn visit_none<E: de::Error>(self) -> Result<T, E> {
        Err(E::custom(CodecError::Missing))
    }
}

fn canonical_names<T: EnumCodec>() -> Vec<&'static str> {
    T::MEMBERS.iter().map(|(name, _)| *name).collect()
}

impl Serialize for OwnerGender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.encode())
    }
}

impl<'de> serde::Deserialize<'de> for OwnerGender {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(CodecVisitor(std::marker::PhantomData))
    }
}

impl Serialize for PetType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.encode())
    }
}

impl<'de> serde::Deserialize<'de> for PetType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(CodecVisitor(std::marker::PhantomData))
    }
}
