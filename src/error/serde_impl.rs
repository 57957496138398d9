//! JSON-shaped wire encoding of errors.
//!
//! A single error is an object with `type`, `msg` and any number of string
//! extension fields next to them. An aggregate is an array of such objects.
use core::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Error, ExceptionalError, ExpectedError, ManyErrors, DEFAULT_ERROR_TYPE};
use crate::types::alloc_type::{String, Vec};
use crate::types::ExtensionData;

const TYPE_KEY: &str = "type";
const MESSAGE_KEY: &str = "msg";
const UNSUPPORTED: &str = "Unable to deserialize Error type.";

fn serialize_single<S>(
    serializer: S,
    error_type: &str,
    message: &str,
    extension_data: &ExtensionData,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(2 + extension_data.len()))?;
    map.serialize_entry(TYPE_KEY, error_type)?;
    map.serialize_entry(MESSAGE_KEY, message)?;
    for (key, value) in extension_data {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

impl Serialize for ExpectedError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_single(serializer, self.error_type(), self.message(), self.extension_data())
    }
}

impl Serialize for ExceptionalError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_single(serializer, self.error_type(), self.message(), self.extension_data())
    }
}

impl Serialize for ManyErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for error in self.iter() {
            seq.serialize_element(error)?;
        }
        seq.end()
    }
}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Error::Expected(e) => e.serialize(serializer),
            Error::Exceptional(e) => e.serialize(serializer),
            Error::Many(many) => many.serialize(serializer),
        }
    }
}

/// A field value: a string, or `null` which is treated as absent.
struct FieldValue(Option<String>);

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FieldValueVisitor)
    }
}

struct FieldValueVisitor;

impl<'de> Visitor<'de> for FieldValueVisitor {
    type Value = FieldValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a string or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(FieldValue(Some(String::from(v))))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(FieldValue(Some(v)))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(FieldValue(None))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(FieldValue(None))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Err(E::custom(UNSUPPORTED))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Err(E::custom(UNSUPPORTED))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Err(E::custom(UNSUPPORTED))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Err(E::custom(UNSUPPORTED))
    }

    fn visit_map<A: MapAccess<'de>>(self, _: A) -> Result<Self::Value, A::Error> {
        Err(de::Error::custom(UNSUPPORTED))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _: A) -> Result<Self::Value, A::Error> {
        Err(de::Error::custom(UNSUPPORTED))
    }
}

/// Fields of a single error object: type, message and extension data.
struct Fields {
    error_type: String,
    message: String,
    extension_data: ExtensionData,
}

fn read_fields<'de, A>(mut map: A) -> Result<Fields, A::Error>
where
    A: MapAccess<'de>,
{
    let mut error_type = None;
    let mut message = None;
    let mut extension_data = ExtensionData::new();

    while let Some(key) = map.next_key::<String>()? {
        let FieldValue(value) = map.next_value()?;
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            continue;
        };
        if key.eq_ignore_ascii_case(TYPE_KEY) {
            error_type = Some(value);
        } else if key.eq_ignore_ascii_case(MESSAGE_KEY) {
            message = Some(value);
        } else if !key.is_empty() {
            extension_data.insert(key, value);
        }
    }

    Ok(Fields {
        error_type: error_type.unwrap_or_else(|| String::from(DEFAULT_ERROR_TYPE)),
        message: message.unwrap_or_default(),
        extension_data,
    })
}

fn read_expected<'de, A>(map: A) -> Result<ExpectedError, A::Error>
where
    A: MapAccess<'de>,
{
    let Fields { error_type, message, extension_data } = read_fields(map)?;
    Ok(ExpectedError::new(error_type, message).with_extension_data(extension_data))
}

fn read_many<'de, A>(mut seq: A) -> Result<ManyErrors, A::Error>
where
    A: SeqAccess<'de>,
{
    let mut errors = Vec::new();
    while let Some(error) = seq.next_element::<Error>()? {
        errors.push(error);
    }
    Ok(ManyErrors::new(errors))
}

struct ErrorVisitor;

impl<'de> Visitor<'de> for ErrorVisitor {
    type Value = Error;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an error object or an array of error objects")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        read_expected(map).map(Error::Expected)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        read_many(seq).map(Error::Many)
    }
}

impl<'de> Deserialize<'de> for Error {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ErrorVisitor)
    }
}

struct ExpectedVisitor;

impl<'de> Visitor<'de> for ExpectedVisitor {
    type Value = ExpectedError;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an error object")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        read_expected(map)
    }
}

impl<'de> Deserialize<'de> for ExpectedError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ExpectedVisitor)
    }
}

struct ManyVisitor;

impl<'de> Visitor<'de> for ManyVisitor {
    type Value = ManyErrors;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an array of error objects")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        read_many(seq)
    }
}

impl<'de> Deserialize<'de> for ManyErrors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(ManyVisitor)
    }
}

struct ExceptionalVisitor;

impl<'de> Visitor<'de> for ExceptionalVisitor {
    type Value = ExceptionalError;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an error object")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        let Fields { error_type, message, extension_data } = read_fields(map)?;
        Ok(ExceptionalError::new(error_type, message).with_extension_data(extension_data))
    }
}

/// Decodes an error object into an exceptional error without a fault.
///
/// The fault itself never travels on the wire, so [`ExceptionalError::cause`]
/// is `None` on the decoded value.
impl<'de> Deserialize<'de> for ExceptionalError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ExceptionalVisitor)
    }
}
