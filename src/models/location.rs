//! Location identifier type.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An addressable delivery point, identified by a short code.
///
/// Locations carry no behavior beyond identity and display. They serialize
/// as a plain string.
///
/// # Examples
///
/// ```
/// use u_delivery::models::Location;
///
/// let depot = Location::new("A");
/// assert_eq!(depot.code(), "A");
/// assert_eq!(depot, Location::from('A'));
/// assert_eq!(depot.to_string(), "A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Creates a location from its code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The identifying code.
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Location {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Location {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Location {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<char> for Location {
    fn from(code: char) -> Self {
        Self(code.to_string())
    }
}

impl From<&Location> for Location {
    fn from(location: &Location) -> Self {
        location.clone()
    }
}
