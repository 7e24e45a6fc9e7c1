#![deny(unsafe_code)]

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single reading taken on a given study day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    day: u32,
    value: f64,
}

impl Observation {
    pub fn new(day: u32, value: f64) -> Self {
        Self { day, value }
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
