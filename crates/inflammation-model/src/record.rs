#![deny(unsafe_code)]

use serde::Serialize;

/// A table row paired with the name of the patient it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NamedRecord<'a> {
    pub name: &'a str,
    pub data: &'a [f64],
}
