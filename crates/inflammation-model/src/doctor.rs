#![deny(unsafe_code)]

use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use serde::ser::{SerializeSeq, SerializeStruct};

use crate::error::{ModelError, Result};
use crate::patient::{Patient, SharedPatient};
use crate::person::{Named, Person};
use crate::value::Value;

/// What a doctor can be handed when taking on a patient.
#[derive(Debug, Clone)]
pub enum NewPatient {
    /// A patient known only by name; a fresh record is created.
    Name(String),
    /// An existing patient record, shared with the caller.
    Existing(SharedPatient),
}

impl From<&str> for NewPatient {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for NewPatient {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<SharedPatient> for NewPatient {
    fn from(patient: SharedPatient) -> Self {
        Self::Existing(patient)
    }
}

impl From<&SharedPatient> for NewPatient {
    fn from(patient: &SharedPatient) -> Self {
        Self::Existing(Rc::clone(patient))
    }
}

impl From<Patient> for NewPatient {
    fn from(patient: Patient) -> Self {
        Self::Existing(patient.into_shared())
    }
}

impl TryFrom<&Value> for NewPatient {
    type Error = ModelError;

    fn try_from(value: &Value) -> Result<Self> {
        let name = value.as_text().ok_or(ModelError::TypeMismatch {
            expected: "patient or patient name",
            found: value.kind_name(),
        })?;
        Ok(Self::Name(name.to_string()))
    }
}

impl TryFrom<Value> for NewPatient {
    type Error = ModelError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Text(name) => Ok(Self::Name(name)),
            other => Self::try_from(&other),
        }
    }
}

/// A doctor and the patients under their care, in the order they were added.
#[derive(Debug, Clone)]
pub struct Doctor {
    person: Person,
    patients: Vec<SharedPatient>,
}

impl Doctor {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            person: Person::new(name)?,
            patients: Vec::new(),
        })
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn patients(&self) -> &[SharedPatient] {
        &self.patients
    }

    /// Appends a patient and returns the handle now held by this doctor.
    ///
    /// Names are wrapped into a new [`Patient`]; duplicates are allowed.
    pub fn add_patient(&mut self, new_patient: impl Into<NewPatient>) -> Result<SharedPatient> {
        let handle = match new_patient.into() {
            NewPatient::Name(name) => Patient::new(name)?.into_shared(),
            NewPatient::Existing(patient) => patient,
        };
        self.patients.push(Rc::clone(&handle));
        Ok(handle)
    }

    /// Index of the first patient with the given name.
    pub fn patient_id(&self, name: &str) -> Option<usize> {
        self.patients
            .iter()
            .position(|patient| patient.borrow().name() == name)
    }
}

impl Named for Doctor {
    fn name(&self) -> &str {
        self.person.name()
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.person, f)
    }
}

impl Serialize for Doctor {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Doctor", 2)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("patients", &PatientList(&self.patients))?;
        state.end()
    }
}

struct PatientList<'a>(&'a [SharedPatient]);

impl Serialize for PatientList<'_> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for patient in self.0 {
            seq.serialize_element(&*patient.borrow())?;
        }
        seq.end()
    }
}
