#![deny(unsafe_code)]

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use serde::ser::SerializeStruct;

use crate::error::{ModelError, Result};
use crate::observation::Observation;
use crate::person::{Named, Person};

/// A patient handle shared between a doctor and any other holder.
pub type SharedPatient = Rc<RefCell<Patient>>;

/// A study participant and their readings, ordered by day.
#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    person: Person,
    observations: Vec<Observation>,
}

impl Patient {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            person: Person::new(name)?,
            observations: Vec::new(),
        })
    }

    /// Creates a patient with an existing observation history.
    ///
    /// Days must be strictly increasing.
    pub fn with_observations(
        name: impl Into<String>,
        observations: Vec<Observation>,
    ) -> Result<Self> {
        for pair in observations.windows(2) {
            if pair[1].day() <= pair[0].day() {
                return Err(ModelError::DayOutOfOrder {
                    day: pair[1].day(),
                    last: pair[0].day(),
                });
            }
        }
        Ok(Self {
            person: Person::new(name)?,
            observations,
        })
    }

    /// Creates a patient whose readings start on day 0, one per day.
    pub fn from_readings(name: impl Into<String>, readings: &[f64]) -> Result<Self> {
        let mut patient = Self::new(name)?;
        for &value in readings {
            patient.add_observation(value)?;
        }
        Ok(patient)
    }

    pub fn into_shared(self) -> SharedPatient {
        Rc::new(RefCell::new(self))
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Records a reading on the day after the last one, or day 0 for the first.
    ///
    /// Fails with [`ModelError::DayOverflow`] once the last day is `u32::MAX`.
    pub fn add_observation(&mut self, value: f64) -> Result<Observation> {
        let day = match self.observations.last() {
            None => 0,
            Some(last) => last
                .day()
                .checked_add(1)
                .ok_or(ModelError::DayOverflow { last: last.day() })?,
        };
        let observation = Observation::new(day, value);
        self.observations.push(observation);
        Ok(observation)
    }

    /// Records a reading on an explicit day.
    ///
    /// The day must come after the last recorded one; otherwise nothing is
    /// recorded.
    pub fn add_observation_on(&mut self, value: f64, day: u32) -> Result<Observation> {
        if let Some(last) = self.observations.last()
            && day <= last.day()
        {
            return Err(ModelError::DayOutOfOrder {
                day,
                last: last.day(),
            });
        }
        let observation = Observation::new(day, value);
        self.observations.push(observation);
        Ok(observation)
    }

    pub fn last_observation(&self) -> Result<&Observation> {
        self.observations
            .last()
            .ok_or_else(|| ModelError::NoObservations {
                patient: self.person.name().to_string(),
            })
    }
}

impl Named for Patient {
    fn name(&self) -> &str {
        self.person.name()
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.person, f)
    }
}

impl Serialize for Patient {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Patient", 2)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("observations", &self.observations)?;
        state.end()
    }
}
