//! Untyped input values.
//!
//! A [`Value`] is the shape-agnostic form of inflammation data before it has
//! been checked into a [`Table`](crate::Table): a single number, a text cell,
//! or an arbitrarily nested list of either.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Value {
    Number(f64),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    /// Short name of the variant, used in type mismatch errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::List(_) => "list",
        }
    }

    /// Number of nesting levels: 0 for a plain value, 1 for a flat list, and so on.
    ///
    /// An empty list counts as one dimension. Fails when siblings disagree on depth.
    pub fn ndim(&self) -> Result<usize> {
        let Self::List(items) = self else {
            return Ok(0);
        };
        let mut depth = None;
        for (index, item) in items.iter().enumerate() {
            let item_depth = item.ndim()?;
            match depth {
                None => depth = Some(item_depth),
                Some(existing) if existing != item_depth => {
                    return Err(ModelError::InconsistentNesting { index });
                }
                Some(_) => {}
            }
        }
        Ok(1 + depth.unwrap_or(0))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}
