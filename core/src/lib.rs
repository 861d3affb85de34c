//! Pet-names-by-owner-gender pipeline core.
//!
//! # Overview
//! Fetches a JSON document of pet owners from a remote HTTP endpoint,
//! deserializes it into typed records with strict enum decoding, and
//! answers one query: all pet names belonging to owners of a given gender,
//! optionally restricted to a species. The three stages are independent
//! functions composed by [`Pipeline`].
//!
//! # Design
//! - Every stage produces new values; nothing is mutated after the stage
//!   that created it, so concurrent pipeline runs share no state.
//! - Each stage converts its own failures into a typed error at its own
//!   boundary; [`Pipeline::generate_results`] is the only surface the
//!   presentation layer calls, and it never lets an error escape —
//!   failures become a tagged [`Outcome`] with diagnostics on the log.
//! - Enum fields on the wire are case-sensitive canonical strings; the
//!   [`codec::EnumCodec`] trait is the single source of truth for them.

pub mod codec;
pub mod error;
pub mod fetch;
pub mod parse;
pub mod pipeline;
pub mod query;
pub mod types;

pub use codec::{CodecError, EnumCodec};
pub use error::{FetchError, ParseError, PipelineError, QueryError};
pub use fetch::fetch_resource;
pub use parse::parse_owners;
pub use pipeline::{Pipeline, PipelineConfig};
pub use query::select_pet_names;
pub use types::{Outcome, Owner, OwnerGender, Pet, PetType, PetsByGender};
