// lib/src/store.rs

use log::debug;

use models::{NewPatient, Patient, UpdatePatient};

/// In-memory record store: an ordered collection of patients plus the
/// id allocator.
///
/// Records keep insertion order until one of the sort operations
/// reorders the collection in place. Ids are assigned sequentially and
/// never reused, including after a delete or a reload from disk.
#[derive(Debug)]
pub struct PatientStore {
    patients: Vec<Patient>,
    next_id: u32,
}

impl PatientStore {
    pub fn new() -> Self {
        PatientStore {
            patients: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuilds a store from previously persisted records. The id
    /// allocator resumes at `max(loaded ids) + 1`.
    pub fn from_records(records: Vec<Patient>) -> Self {
        let next_id = records.iter().map(|p| p.id).max().map_or(1, |max| max + 1);
        PatientStore {
            patients: records,
            next_id,
        }
    }

    /// Admits a new patient and returns the assigned id. Field
    /// validation happens at the input boundary, so this cannot fail.
    pub fn admit(&mut self, fields: NewPatient) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.patients.push(fields.into_patient(id));
        debug!("admitted patient {}", id);
        id
    }

    /// Marks the patient as discharged. Returns false if the id is
    /// absent or the patient was already discharged; the flag flips at
    /// most once.
    pub fn discharge(&mut self, id: u32) -> bool {
        match self
            .patients
            .iter_mut()
            .find(|p| p.id == id && !p.is_discharged)
        {
            Some(patient) => {
                patient.is_discharged = true;
                debug!("discharged patient {}", id);
                true
            }
            None => false,
        }
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    /// Exact, case-sensitive name matches in collection order.
    pub fn find_by_name(&self, name: &str) -> Vec<&Patient> {
        self.patients.iter().filter(|p| p.name == name).collect()
    }

    pub fn admitted(&self) -> Vec<&Patient> {
        self.patients.iter().filter(|p| !p.is_discharged).collect()
    }

    pub fn discharged(&self) -> Vec<&Patient> {
        self.patients.iter().filter(|p| p.is_discharged).collect()
    }

    pub fn all(&self) -> &[Patient] {
        &self.patients
    }

    /// Overwrites address/illness/doctor where a non-empty replacement
    /// is supplied; `None` or an empty string keeps the prior value.
    /// Returns false if the id is absent.
    pub fn update(&mut self, id: u32, changes: UpdatePatient) -> bool {
        match self.patients.iter_mut().find(|p| p.id == id) {
            Some(patient) => {
                if let Some(address) = changes.address.filter(|v| !v.is_empty()) {
                    patient.address = address;
                }
                if let Some(illness) = changes.illness.filter(|v| !v.is_empty()) {
                    patient.illness = illness;
                }
                if let Some(doctor) = changes.doctor.filter(|v| !v.is_empty()) {
                    patient.doctor = doctor;
                }
                debug!("updated patient {}", id);
                true
            }
            None => false,
        }
    }

    /// Removes the first record with the given id. The id is not
    /// reused afterwards.
    pub fn delete(&mut self, id: u32) -> bool {
        match self.patients.iter().position(|p| p.id == id) {
            Some(index) => {
                self.patients.remove(index);
                debug!("deleted patient {}", id);
                true
            }
            None => false,
        }
    }

    /// Stable in-place sort by name, lexicographic ascending.
    pub fn sort_by_name(&mut self) {
        self.patients.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Stable in-place sort by id, ascending.
    pub fn sort_by_id(&mut self) {
        self.patients.sort_by_key(|p| p.id);
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Consumes the store, yielding the records in current order.
    pub fn into_records(self) -> Vec<Patient> {
        self.patients
    }
}

impl Default for PatientStore {
    fn default() -> Self {
        PatientStore::new()
    }
}
