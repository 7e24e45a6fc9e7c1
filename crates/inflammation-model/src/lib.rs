//! Inflammation data model.
//!
//! - [`Table`]: the validated patients × days grid of readings
//! - [`Value`]: untyped nested input that may describe a table
//! - [`Patient`], [`Doctor`], [`Observation`]: the clinical record model
//! - [`ModelError`]: the shared error taxonomy

pub mod doctor;
pub mod error;
pub mod observation;
pub mod patient;
pub mod person;
pub mod record;
pub mod table;
pub mod value;

pub use doctor::{Doctor, NewPatient};
pub use error::{ErrorKind, ModelError, Result};
pub use observation::Observation;
pub use patient::{Patient, SharedPatient};
pub use person::{Named, Person};
pub use record::NamedRecord;
pub use table::{AsTable, Table};
pub use value::Value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctor_sees_mutations_through_shared_handle() {
        let alice = Patient::new("Alice").unwrap().into_shared();
        let mut doctor = Doctor::new("Stu").unwrap();
        doctor.add_patient(&alice).unwrap();
        alice.borrow_mut().add_observation(3.0).unwrap();
        let held = &doctor.patients()[0];
        assert_eq!(held.borrow().observations().len(), 1);
    }

    #[test]
    fn doctor_serializes_patients() {
        let mut doctor = Doctor::new("Stu").unwrap();
        let alice = doctor.add_patient("Alice").unwrap();
        alice.borrow_mut().add_observation(1.5).unwrap();
        let json = serde_json::to_string(&doctor).expect("serialize doctor");
        assert_eq!(
            json,
            r#"{"name":"Stu","patients":[{"name":"Alice","observations":[{"day":0,"value":1.5}]}]}"#
        );
    }
}
