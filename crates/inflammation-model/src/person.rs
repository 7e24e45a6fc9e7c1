#![deny(unsafe_code)]

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::value::Value;

/// Anything identified by a person's name.
pub trait Named {
    fn name(&self) -> &str;
}

/// A named individual. Patients and doctors both carry one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Person {
    name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::InvalidName);
        }
        Ok(Self { name })
    }
}

impl Named for Person {
    fn name(&self) -> &str {
        &self.name
    }
}

impl TryFrom<String> for Person {
    type Error = ModelError;

    fn try_from(name: String) -> Result<Self> {
        Self::new(name)
    }
}

impl From<Person> for String {
    fn from(person: Person) -> Self {
        person.name
    }
}

impl TryFrom<&Value> for Person {
    type Error = ModelError;

    fn try_from(value: &Value) -> Result<Self> {
        let name = value.as_text().ok_or(ModelError::TypeMismatch {
            expected: "text",
            found: value.kind_name(),
        })?;
        Self::new(name)
    }
}

impl TryFrom<Value> for Person {
    type Error = ModelError;

    fn try_from(value: Value) -> Result<Self> {
        Self::try_from(&value)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
