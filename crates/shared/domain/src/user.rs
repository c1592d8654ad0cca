//! User domain entity.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// User record.
///
/// `id` is the storage key. Incoming documents are decoded leniently:
/// keys match regardless of ASCII case, the last duplicate key wins,
/// missing or `null` fields keep their zero value (`""` / `0`), unknown
/// fields are ignored and a `null` document is an empty user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct User {
    /// Unique user identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Age in years
    pub age: i64,
}

impl User {
    /// Create a new user record
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
        }
    }
}

enum Field {
    Id,
    Name,
    Age,
    Other,
}

impl Field {
    fn from_key(key: &str) -> Self {
        if key.eq_ignore_ascii_case("id") {
            Field::Id
        } else if key.eq_ignore_ascii_case("name") {
            Field::Name
        } else if key.eq_ignore_ascii_case("age") {
            Field::Age
        } else {
            Field::Other
        }
    }
}

struct UserVisitor;

impl<'de> Visitor<'de> for UserVisitor {
    type Value = User;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a user object")
    }

    fn visit_unit<E: de::Error>(self) -> Result<User, E> {
        Ok(User::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<User, A::Error> {
        let mut user = User::default();

        while let Some(key) = map.next_key::<String>()? {
            match Field::from_key(&key) {
                Field::Id => {
                    if let Some(id) = map.next_value::<Option<String>>()? {
                        user.id = id;
                    }
                }
                Field::Name => {
                    if let Some(name) = map.next_value::<Option<String>>()? {
                        user.name = name;
                    }
                }
                Field::Age => {
                    if let Some(age) = map.next_value::<Option<i64>>()? {
                        user.age = age;
                    }
                }
                Field::Other => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(user)
    }
}

impl<'de> Deserialize<'de> for User {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(UserVisitor)
    }
}
