//! In-memory query over parsed owner records.

use crate::codec::EnumCodec;
use crate::error::QueryError;
use crate::types::{Owner, OwnerGender, PetType, PetsByGender};

/// Collect the names of all pets belonging to owners of `gender`,
/// optionally restricted to one species.
///
/// `owners` being `None` means the upstream stage never produced a source
/// sequence and is a [`QueryError::MissingSource`]; an empty slice is
/// simply zero matches. Names are flattened across the retained owners and
/// stable-sorted ascending by byte order, so the result is deterministic
/// regardless of locale and duplicates keep their input order. The result's
/// `owner_gender` is always the canonical form of the queried gender, even
/// with zero matches.
pub fn select_pet_names(
    owners: Option<&[Owner]>,
    gender: OwnerGender,
    species: Option<PetType>,
) -> Result<PetsByGender, QueryError> {
    let owners = owners.ok_or(QueryError::MissingSource)?;

    let mut pet_names: Vec<String> = owners
        .iter()
        .filter(|owner| owner.gender == gender)
        .flat_map(|owner| owner.pets.iter())
        .filter(|pet| species.is_none_or(|wanted| pet.kind == wanted))
        .filter_map(|pet| pet.name.clone())
        .collect();
    pet_names.sort();

    Ok(PetsByGender {
        owner_gender: gender.encode().to_string(),
        pet_names,
    })
}
