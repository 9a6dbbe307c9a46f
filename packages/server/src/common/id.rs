//! Typed entity-key wrappers for compile-time type safety.
//!
//! This module provides `Id<T>`, a typed wrapper around a string key that
//! prevents accidentally mixing up different ID types (e.g., passing a
//! `PropertyId` where a `RoomId` was expected).
//!
//! Catalog entities use short human-readable keys (`p1`, `r4`, `rev2`);
//! newly created entities get UUID-backed keys via [`Id::generate`].
//!
//! # Example
//!
//! ```rust
//! use roomverse_core::common::Id;
//!
//! // Define entity marker types
//! pub struct Property;
//! pub struct Room;
//!
//! // Create type aliases
//! pub type PropertyId = Id<Property>;
//! pub type RoomId = Id<Room>;
//!
//! // These are now incompatible types:
//! let property_id = PropertyId::new("p1");
//! let room_id = RoomId::new("r1");
//!
//! // This would be a compile error:
//! // let wrong: RoomId = property_id;
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

/// A typed wrapper around a string key that provides compile-time type safety.
///
/// The type parameter `T` represents the entity type this ID belongs to.
///
/// # Type Safety
///
/// IDs with different `T` parameters are incompatible at compile time:
///
/// ```compile_fail
/// use roomverse_core::common::Id;
///
/// struct Property;
/// struct Room;
///
/// let property_id: Id<Property> = Id::new("p1");
/// let room_id: Id<Room> = property_id; // Compile error!
/// ```
pub struct Id<T>(String, PhantomData<fn() -> T>);

// ============================================================================
// Core implementations
// ============================================================================

impl<T> Id<T> {
    /// Creates an `Id` from an existing key.
    #[inline]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into(), PhantomData)
    }

    /// Creates a fresh UUID-backed key.
    ///
    /// Used for entities minted at runtime, such as submitted reviews.
    #[inline]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string(), PhantomData)
    }

    /// Returns the key as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Id`, returning the inner key.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

// ============================================================================
// Standard trait implementations
// ============================================================================

// Manual impls instead of derives so `T` does not need to implement anything.

impl<T> Clone for Id<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Include type name for debugging clarity
        f.debug_tuple(&format!("Id<{}>", std::any::type_name::<T>()))
            .field(&self.0)
            .finish()
    }
}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for Id<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> Hash for Id<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> AsRef<str> for Id<T> {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<T> From<&str> for Id<T> {
    #[inline]
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl<T> From<String> for Id<T> {
    #[inline]
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl<T> From<Id<T>> for String {
    #[inline]
    fn from(id: Id<T>) -> Self {
        id.0
    }
}

impl<T> FromStr for Id<T> {
    type Err = std::convert::Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

// ============================================================================
// Serde support
// ============================================================================

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct User;

    type UserId = Id<User>;

    #[test]
    fn test_generate_creates_unique_ids() {
        let id1 = UserId::generate();
        let id2 = UserId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_and_display_roundtrip() {
        let id = UserId::new("u42");
        assert_eq!(id.to_string(), "u42");
        assert_eq!(id.as_str(), "u42");
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = UserId::new("u1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"u1\"");
        let parsed: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_hash_map_key() {
        use std::collections::HashMap;
        let mut map: HashMap<UserId, &str> = HashMap::new();
        let id = UserId::new("u1");
        map.insert(id.clone(), "test");
        assert_eq!(map.get(&id), Some(&"test"));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let id1 = UserId::new("p1");
        let id2 = UserId::new("p2");
        assert!(id1 < id2);
    }

    #[test]
    fn test_debug_includes_type_name() {
        let id = UserId::new("u1");
        let debug = format!("{:?}", id);
        assert!(debug.contains("User"));
    }
}
