//! SecretString - A container for sensitive string data
//!
//! Wraps secret material (the relayer signing key) so it cannot leak through
//! logs, serialization, or debug output, and is wiped from memory on drop.
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeroize::Zeroizing;

pub struct SecretString(Zeroizing<String>);

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self(Zeroizing::new(self.0.as_str().to_string()))
    }
}

impl SecretString {
    /// Creates a new SecretString from a regular string.
    ///
    /// The input is copied into a zeroizing buffer that is erased on drop.
    pub fn new(s: &str) -> Self {
        Self(Zeroizing::new(s.to_string()))
    }

    /// Access the secret string content with a provided function.
    ///
    /// Allows temporary access to the content without handing out a copy.
    pub fn as_str<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&str) -> R,
    {
        f(self.0.as_str())
    }

    /// Check if the secret string is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if the secret string meets a minimum length requirement.
    pub fn has_minimum_length(&self, min_length: usize) -> bool {
        self.0.len() >= min_length
    }
}

impl Serialize for SecretString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str("REDACTED")
    }
}

impl<'de> Deserialize<'de> for SecretString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = Zeroizing::new(String::deserialize(deserializer)?);

        Ok(SecretString::new(&s))
    }
}

impl PartialEq for SecretString {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_str() == other.0.as_str()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SecretString(REDACTED)")
    }
}

impl ToSchema for SecretString {
    fn name() -> std::borrow::Cow<'static, str> {
        "SecretString".into()
    }
}

impl utoipa::PartialSchema for SecretString {
    fn schema() -> utoipa::openapi::RefOr<utoipa::openapi::Schema> {
        use utoipa::openapi::*;

        RefOr::T(Schema::Object(
            ObjectBuilder::new()
                .schema_type(schema::Type::String)
                .format(Some(schema::SchemaFormat::KnownFormat(
                    schema::KnownFormat::Password,
                )))
                .description(Some("A secret string value (content is protected)"))
                .build(),
        ))
    }
}
