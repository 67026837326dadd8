use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// Represents a unique identifier for an application.
///
/// Application names are free text supplied by the emitting app; the engine
/// treats them opaquely except for the focus-context substring match in
/// [`crate::notifications::scoring`].
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default, PartialOrd, Ord)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Creates a new `ApplicationId`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the provided `id` is empty.
    pub fn new(id: impl Into<String>) -> Self {
        let id_str = id.into();
        debug_assert!(!id_str.is_empty(), "ApplicationId must not be empty");
        Self(id_str)
    }

    /// Returns a string slice of the application ID.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether the identifier is empty.
    ///
    /// Empty identifiers are rejected at notification admission.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Debug for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApplicationId").field(&self.0).finish()
    }
}

impl Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ApplicationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ApplicationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_id_new_and_as_str() {
        let id = ApplicationId::new("duty-free-shop");
        assert_eq!(id.as_str(), "duty-free-shop");
        assert!(!id.is_empty());
    }

    #[test]
    fn application_id_display_and_debug() {
        let id = ApplicationId::new("WiFi Store");
        assert_eq!(format!("{}", id), "WiFi Store");
        assert_eq!(format!("{:?}", id), "ApplicationId(\"WiFi Store\")");
    }

    #[test]
    fn application_id_from_conversions() {
        let from_str: ApplicationId = "movies".into();
        let from_string: ApplicationId = String::from("movies").into();
        assert_eq!(from_str, from_string);
    }

    #[test]
    fn application_id_serde() {
        let id = ApplicationId::new("cabin-service");
        let serialized = serde_json::to_string(&id).unwrap();
        assert_eq!(serialized, "\"cabin-service\"");
        let deserialized: ApplicationId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, id);
    }
}
