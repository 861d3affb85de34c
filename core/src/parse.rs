//! Strict deserialization of the people document into [`Owner`] records.
//!
//! # Design
//! The body is parsed to `serde_json::Value` first and walked by hand
//! rather than derived: the source format matches field names
//! case-insensitively, ignores unknown keys, and must report exactly which
//! enum field carried which offending token. A derive cannot express any of
//! that. Failure policy is all-or-nothing — one bad field anywhere aborts
//! the whole parse; there is no best-effort subset.
//!
//! Field absence and JSON `null` are not the same thing for enum fields: an
//! absent `gender`/`type` key takes the record default, while an explicit
//! `null` is a missing-value validation failure, mirroring how the original
//! converters were only invoked for present properties.

use serde_json::{Map, Value};

use crate::codec::{CodecError, EnumCodec};
use crate::error::ParseError;
use crate::types::{Owner, Pet};

/// Parse a raw JSON body into owner records.
pub fn parse_owners(raw: &str) -> Result<Vec<Owner>, ParseError> {
    if raw.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let document: Value = serde_json::from_str(raw)
        .map_err(|e| ParseError::MalformedDocument(e.to_string()))?;

    let elements = document.as_array().ok_or_else(|| {
        ParseError::MalformedDocument("expected a top-level array of owners".to_string())
    })?;

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| parse_owner(index, element))
        .collect()
}

fn parse_owner(index: usize, element: &Value) -> Result<Owner, ParseError> {
    let object = element.as_object().ok_or_else(|| {
        ParseError::MalformedDocument(format!("owner at index {index} is not an object"))
    })?;

    let pets = match field(object, "pets") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| parse_pet(index, item))
            .collect::<Result<_, _>>()?,
        Some(_) => {
            return Err(ParseError::MalformedDocument(format!(
                "`pets` of owner at index {index} is not an array"
            )))
        }
    };

    Ok(Owner {
        name: text_field(object, "name", index)?,
        gender: enum_field(object, "gender")?,
        age: age_field(object, index)?,
        pets,
    })
}

fn parse_pet(owner_index: usize, item: &Value) -> Result<Pet, ParseError> {
    let object = item.as_object().ok_or_else(|| {
        ParseError::MalformedDocument(format!(
            "pet of owner at index {owner_index} is not an object"
        ))
    })?;

    Ok(Pet {
        name: text_field(object, "name", owner_index)?,
        kind: enum_field(object, "type")?,
    })
}

/// Case-insensitive key lookup; unknown keys are simply never asked for.
fn field<'a>(object: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    object
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
}

fn text_field(
    object: &Map<String, Value>,
    name: &str,
    index: usize,
) -> Result<Option<String>, ParseError> {
    match field(object, name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(ParseError::MalformedDocument(format!(
            "`{name}` at index {index} is not a string"
        ))),
    }
}

fn age_field(object: &Map<String, Value>, index: usize) -> Result<u32, ParseError> {
    match field(object, "age") {
        None | Some(Value::Null) => Ok(0),
        Some(value) => value
            .as_u64()
            .and_then(|age| u32::try_from(age).ok())
            .ok_or_else(|| {
                ParseError::MalformedDocument(format!(
                    "`age` at index {index} is not a non-negative integer"
                ))
            }),
    }
}

/// Decode a present enum field via its codec; an absent key takes the
/// record default.
fn enum_field<T: EnumCodec + Default>(
    object: &Map<String, Value>,
    name: &str,
) -> Result<T, ParseError> {
    let validation = |source: CodecError| ParseError::FieldValidation {
        field: name.to_string(),
        source,
    };

    match field(object, name) {
        None => Ok(T::default()),
        Some(Value::Null) => Err(validation(CodecError::Missing)),
        Some(Value::String(token)) => T::decode(Some(token)).map_err(validation),
        Some(other) => Err(validation(CodecError::Invalid(other.to_string()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OwnerGender, PetType};

    const WELL_FORMED: &str = r#"[
        {"name": "Bob", "gender": "Male", "age": 23, "pets": [
            {"name": "Garfield", "type": "Cat"},
            {"name": "Fido", "type": "Dog"}
        ]},
        {"name": "Jennifer", "gender": "Female", "age": 18, "pets": null},
        {"name": "Steve", "gender": "Male", "age": 45}
    ]"#;

    #[test]
    fn parses_every_element_of_a_well_formed_array() {
        let owners = parse_owners(WELL_FORMED).unwrap();
        assert_eq!(owners.len(), 3);

        assert_eq!(owners[0].name.as_deref(), Some("Bob"));
        assert_eq!(owners[0].gender, OwnerGender::Male);
        assert_eq!(owners[0].age, 23);
        assert_eq!(owners[0].pets.len(), 2);
        assert_eq!(owners[0].pets[0].name.as_deref(), Some("Garfield"));
        assert_eq!(owners[0].pets[0].kind, PetType::Cat);

        // `pets: null` and an absent `pets` key both mean no pets.
        assert!(owners[1].pets.is_empty());
        assert!(owners[2].pets.is_empty());
    }

    #[test]
    fn empty_and_whitespace_input_are_an_application_failure() {
        assert_eq!(parse_owners(""), Err(ParseError::EmptyInput));
        assert_eq!(parse_owners("   \n\t"), Err(ParseError::EmptyInput));
    }

    #[test]
    fn truncated_json_is_a_malformed_document() {
        let err = parse_owners("[{ malformed").unwrap_err();
        assert!(matches!(err, ParseError::MalformedDocument(_)));
    }

    #[test]
    fn non_array_document_is_malformed() {
        let err = parse_owners(r#"{"name": "Bob"}"#).unwrap_err();
        assert!(matches!(err, ParseError::MalformedDocument(_)));
    }

    #[test]
    fn empty_array_parses_to_zero_owners() {
        assert_eq!(parse_owners("[]").unwrap(), Vec::new());
    }

    #[test]
    fn empty_pets_array_means_zero_pets() {
        let owners = parse_owners(r#"[{"name": "A", "gender": "Male", "pets": []}]"#).unwrap();
        assert!(owners[0].pets.is_empty());
    }

    #[test]
    fn field_names_match_case_insensitively() {
        let owners = parse_owners(
            r#"[{"Name": "Bob", "GENDER": "Female", "Age": 9,
                 "Pets": [{"NAME": "Rex", "Type": "Dog"}]}]"#,
        )
        .unwrap();
        assert_eq!(owners[0].name.as_deref(), Some("Bob"));
        assert_eq!(owners[0].gender, OwnerGender::Female);
        assert_eq!(owners[0].age, 9);
        assert_eq!(owners[0].pets[0].name.as_deref(), Some("Rex"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let owners =
            parse_owners(r#"[{"name": "Bob", "gender": "Male", "favouriteColour": "red"}]"#)
                .unwrap();
        assert_eq!(owners[0].name.as_deref(), Some("Bob"));
    }

    #[test]
    fn absent_enum_fields_take_record_defaults() {
        let owners = parse_owners(r#"[{"name": "Bob", "pets": [{"name": "Rex"}]}]"#).unwrap();
        assert_eq!(owners[0].gender, OwnerGender::Male);
        assert_eq!(owners[0].pets[0].kind, PetType::Dog);
    }

    #[test]
    fn null_gender_is_a_missing_value_failure() {
        let err = parse_owners(r#"[{"name": "Bob", "gender": null}]"#).unwrap_err();
        assert_eq!(
            err,
            ParseError::FieldValidation {
                field: "gender".to_string(),
                source: CodecError::Missing,
            }
        );
    }

    #[test]
    fn non_canonical_gender_is_an_invalid_value_failure() {
        let err = parse_owners(r#"[{"name": "Bob", "gender": "male"}]"#).unwrap_err();
        assert_eq!(
            err,
            ParseError::FieldValidation {
                field: "gender".to_string(),
                source: CodecError::Invalid("male".to_string()),
            }
        );
    }

    #[test]
    fn bad_pet_type_aborts_the_whole_parse() {
        let raw = r#"[
            {"name": "Bob", "gender": "Male", "pets": [{"name": "Rex", "type": "Dragon"}]},
            {"name": "Jennifer", "gender": "Female"}
        ]"#;
        let err = parse_owners(raw).unwrap_err();
        assert_eq!(
            err,
            ParseError::FieldValidation {
                field: "type".to_string(),
                source: CodecError::Invalid("Dragon".to_string()),
            }
        );
    }

    #[test]
    fn non_string_enum_token_is_invalid() {
        let err = parse_owners(r#"[{"name": "Bob", "gender": 3}]"#).unwrap_err();
        assert_eq!(
            err,
            ParseError::FieldValidation {
                field: "gender".to_string(),
                source: CodecError::Invalid("3".to_string()),
            }
        );
    }

    #[test]
    fn wrong_primitive_types_are_malformed() {
        assert!(matches!(
            parse_owners(r#"[{"name": 7}]"#).unwrap_err(),
            ParseError::MalformedDocument(_)
        ));
        assert!(matches!(
            parse_owners(r#"[{"age": "old"}]"#).unwrap_err(),
            ParseError::MalformedDocument(_)
        ));
        assert!(matches!(
            parse_owners(r#"[{"pets": "none"}]"#).unwrap_err(),
            ParseError::MalformedDocument(_)
        ));
        assert!(matches!(
            parse_owners(r#"["just a string"]"#).unwrap_err(),
            ParseError::MalformedDocument(_)
        ));
    }
}
