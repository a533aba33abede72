//! Domain identifier types
//!
//! Newtype wrappers for catalog identifiers. The catalog service addresses
//! collections and records by small integer ids; the newtypes keep the two
//! from being mixed up in the fetch paths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Collection identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use quire::domain::ids::CollectionId;
///
/// let id = CollectionId::new(2);
/// assert_eq!(id.get(), 2);
/// assert_eq!(id.to_string(), "2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionId(u32);

impl CollectionId {
    /// Creates a new CollectionId
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric id
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CollectionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .map(Self)
            .map_err(|_| format!("invalid collection id: {s}"))
    }
}

/// Record identifier newtype wrapper
///
/// Identifies one exportable description record within a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u32);

impl RecordId {
    /// Creates a new RecordId
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric id
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .map(Self)
            .map_err(|_| format!("invalid record id: {s}"))
    }
}
