// models/src/patient.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Upper bound for the age field, inclusive.
pub const MAX_AGE: u8 = 120;

/// Patient gender. Serialized as the single letter used on disk and
/// at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Gender::Male),
            "F" => Ok(Gender::Female),
            other => Err(ValidationError::InvalidGender(other.to_string())),
        }
    }
}

/// A single patient record.
///
/// `id` is unique and immutable once assigned; `is_discharged` moves
/// false -> true exactly once and never reverses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: u32,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    /// May be empty.
    pub address: String,
    pub illness: String,
    pub doctor: String,
    /// Free text; DD/MM/YYYY by prompt convention only, never validated.
    pub admission_date: String,
    pub is_discharged: bool,
}

impl Patient {
    pub fn status(&self) -> &'static str {
        if self.is_discharged {
            "Yes"
        } else {
            "No"
        }
    }
}

/// Labeled block used by the report writer, one field per line.
impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Age: {}", self.age)?;
        writeln!(f, "Gender: {}", self.gender)?;
        writeln!(f, "Address: {}", self.address)?;
        writeln!(f, "Illness: {}", self.illness)?;
        writeln!(f, "Doctor: {}", self.doctor)?;
        writeln!(f, "Admission Date: {}", self.admission_date)?;
        write!(f, "Discharged: {}", self.status())
    }
}

/// Field set collected at admission time. The store assigns the id and
/// the initial discharge flag.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPatient {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub address: String,
    pub illness: String,
    pub doctor: String,
    pub admission_date: String,
}

impl NewPatient {
    pub fn into_patient(self, id: u32) -> Patient {
        Patient {
            id,
            name: self.name,
            age: self.age,
            gender: self.gender,
            address: self.address,
            illness: self.illness,
            doctor: self.doctor,
            admission_date: self.admission_date,
            is_discharged: false,
        }
    }
}

/// Optional field replacements for an update. `None` (or an empty
/// string) keeps the prior value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePatient {
    pub address: Option<String>,
    pub illness: Option<String>,
    pub doctor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Patient {
        NewPatient {
            name: "Alice".to_string(),
            age: 30,
            gender: Gender::Female,
            address: "12 Elm St".to_string(),
            illness: "Flu".to_string(),
            doctor: "Dr. Grey".to_string(),
            admission_date: "01/02/2026".to_string(),
        }
        .into_patient(1)
    }

    #[test]
    fn should_parse_gender_letters() {
        assert_eq!("M".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("F".parse::<Gender>(), Ok(Gender::Female));
    }

    #[test]
    fn should_reject_other_gender_input() {
        let err = "male".parse::<Gender>().unwrap_err();
        assert_eq!(err, ValidationError::InvalidGender("male".to_string()));
    }

    #[test]
    fn gender_serializes_as_single_letter() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"M\"");
        assert_eq!(
            serde_json::from_str::<Gender>("\"F\"").unwrap(),
            Gender::Female
        );
    }

    #[test]
    fn admission_starts_with_discharge_flag_clear() {
        let patient = sample();
        assert_eq!(patient.id, 1);
        assert!(!patient.is_discharged);
        assert_eq!(patient.status(), "No");
    }

    #[test]
    fn display_produces_labeled_block() {
        let rendered = sample().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "ID: 1");
        assert_eq!(lines[1], "Name: Alice");
        assert_eq!(lines[3], "Gender: F");
        assert_eq!(lines[8], "Discharged: No");
    }
}
