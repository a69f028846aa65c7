// lib/src/codec.rs
//
// Flat-file persistence for patient records, plus the human-readable
// report writer.
//
// The record file is the legacy line-oriented format: nine lines per
// record, fixed order (id, name, age, gender, address, illness, doctor,
// admission date, discharge flag as 0/1), newline-terminated, no
// escaping. A field value containing a newline corrupts the file; that
// is a documented limitation of the format, not something the codec
// defends against.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{info, warn};
use tempfile::NamedTempFile;

use crate::errors::{RegistryError, RegistryResult};
use models::{Gender, Patient};

/// Lines per record in the on-disk format.
pub const FIELDS_PER_RECORD: usize = 9;

const REPORT_DIVIDER: &str = "====================================";

/// Overwrites `path` with the given records, in the order supplied.
///
/// The file is written to a temporary sibling and renamed over the
/// target, so an interrupted save cannot leave a truncated record file
/// behind.
pub fn save(path: &Path, patients: &[Patient]) -> RegistryResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir)?;
    {
        let mut out = BufWriter::new(tmp.as_file());
        for patient in patients {
            write_record(&mut out, patient)?;
        }
        out.flush()?;
    }
    tmp.persist(path).map_err(|e| RegistryError::Io(e.error))?;
    info!("saved {} patient records to {}", patients.len(), path.display());
    Ok(())
}

fn write_record<W: Write>(out: &mut W, patient: &Patient) -> io::Result<()> {
    writeln!(out, "{}", patient.id)?;
    writeln!(out, "{}", patient.name)?;
    writeln!(out, "{}", patient.age)?;
    writeln!(out, "{}", patient.gender)?;
    writeln!(out, "{}", patient.address)?;
    writeln!(out, "{}", patient.illness)?;
    writeln!(out, "{}", patient.doctor)?;
    writeln!(out, "{}", patient.admission_date)?;
    writeln!(out, "{}", if patient.is_discharged { 1 } else { 0 })
}

/// Reads records back from `path`.
///
/// A missing file is the first-run case and yields an empty list. A
/// truncated or unparseable trailing record ends the read loop; what
/// was read up to that point is kept and the drop is logged, matching
/// the legacy reader's behavior while making it visible.
pub fn load(path: &Path) -> RegistryResult<Vec<Patient>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut lines = BufReader::new(file).lines();
    let mut patients = Vec::new();
    loop {
        let mut block: Vec<String> = Vec::with_capacity(FIELDS_PER_RECORD);
        while block.len() < FIELDS_PER_RECORD {
            match lines.next() {
                Some(line) => block.push(line?),
                None => break,
            }
        }
        if block.is_empty() {
            break;
        }
        if block.len() < FIELDS_PER_RECORD {
            warn!(
                "dropping truncated trailing record ({} of {} lines) in {}",
                block.len(),
                FIELDS_PER_RECORD,
                path.display()
            );
            break;
        }
        match parse_record(&block) {
            Ok(patient) => patients.push(patient),
            Err(e) => {
                warn!("stopping load of {}: {}", path.display(), e);
                break;
            }
        }
    }
    info!("loaded {} patient records from {}", patients.len(), path.display());
    Ok(patients)
}

fn parse_record(lines: &[String]) -> RegistryResult<Patient> {
    let id = lines[0]
        .trim()
        .parse()
        .map_err(|_| RegistryError::Corrupt(format!("bad id line '{}'", lines[0])))?;
    let age = lines[2]
        .trim()
        .parse()
        .map_err(|_| RegistryError::Corrupt(format!("bad age line '{}'", lines[2])))?;
    let gender: Gender = lines[3].trim().parse()?;
    let is_discharged = match lines[8].trim() {
        "0" => false,
        "1" => true,
        other => {
            return Err(RegistryError::Corrupt(format!(
                "bad discharge flag '{}'",
                other
            )))
        }
    };
    Ok(Patient {
        id,
        name: lines[1].clone(),
        age,
        gender,
        address: lines[4].clone(),
        illness: lines[5].clone(),
        doctor: lines[6].clone(),
        admission_date: lines[7].clone(),
        is_discharged,
    })
}

/// Writes the human-readable report: one labeled block per record,
/// divider after each. Overwrites any existing report; the file is
/// write-only output and never read back.
pub fn write_report(path: &Path, patients: &[Patient]) -> RegistryResult<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    for patient in patients {
        writeln!(out, "{}", patient)?;
        writeln!(out, "{}", REPORT_DIVIDER)?;
    }
    out.flush()?;
    info!("wrote report for {} patients to {}", patients.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{Gender, NewPatient};
    use std::fs;
    use tempfile::tempdir;

    fn patient(id: u32, name: &str, discharged: bool) -> Patient {
        let mut p = NewPatient {
            name: name.to_string(),
            age: 30,
            gender: Gender::Female,
            address: "12 Elm St".to_string(),
            illness: "Flu".to_string(),
            doctor: "Dr. Grey".to_string(),
            admission_date: "01/02/2026".to_string(),
        }
        .into_patient(id);
        p.is_discharged = discharged;
        p
    }

    #[test]
    fn load_of_missing_file_is_empty_and_not_an_error() {
        let dir = tempdir().unwrap();
        let loaded = load(&dir.path().join("patient_records.txt")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn empty_store_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("patient_records.txt");
        save(&path, &[]).unwrap();
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn populated_store_round_trips_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("patient_records.txt");
        let records = vec![
            patient(1, "Alice", true),
            patient(5, "Bob", false),
            patient(2, "Carol", false),
        ];
        save(&path, &records).unwrap();
        assert_eq!(load(&path).unwrap(), records);
    }

    #[test]
    fn empty_address_survives_the_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("patient_records.txt");
        let mut record = patient(1, "Alice", false);
        record.address = String::new();
        save(&path, std::slice::from_ref(&record)).unwrap();
        assert_eq!(load(&path).unwrap(), vec![record]);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("patient_records.txt");
        save(&path, &[patient(1, "Alice", false), patient(2, "Bob", false)]).unwrap();
        save(&path, &[patient(3, "Carol", false)]).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Carol");
    }

    #[test]
    fn truncated_trailing_record_is_dropped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("patient_records.txt");
        save(&path, &[patient(1, "Alice", false)]).unwrap();
        let mut contents = fs::read_to_string(&path).unwrap();
        contents.push_str("2\nBob\n45\nM\n");
        fs::write(&path, contents).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Alice");
    }

    #[test]
    fn unparseable_record_ends_the_read_loop() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("patient_records.txt");
        // Second record carries a gender the format never produces.
        let text = "1\nAlice\n30\nF\n12 Elm St\nFlu\nDr. Grey\n01/02/2026\n0\n\
                    2\nBob\n45\nX\nAddr\nFlu\nDr. Grey\n01/02/2026\n0\n";
        fs::write(&path, text).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Alice");
    }

    #[test]
    fn allocator_resumes_above_ids_from_a_prior_save() {
        use crate::store::PatientStore;

        let dir = tempdir().unwrap();
        let path = dir.path().join("patient_records.txt");
        save(&path, &[patient(4, "Alice", false), patient(9, "Bob", true)]).unwrap();

        let mut store = PatientStore::from_records(load(&path).unwrap());
        let next = store.admit(NewPatient {
            name: "Carol".to_string(),
            age: 28,
            gender: Gender::Female,
            address: String::new(),
            illness: "Asthma".to_string(),
            doctor: "Dr. Grey".to_string(),
            admission_date: "02/03/2026".to_string(),
        });
        assert_eq!(next, 10);
    }

    #[test]
    fn report_writes_labeled_blocks_with_dividers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("patient_report.txt");
        write_report(&path, &[patient(1, "Alice", true), patient(2, "Bob", false)]).unwrap();

        let report = fs::read_to_string(&path).unwrap();
        assert!(report.contains("ID: 1"));
        assert!(report.contains("Name: Alice"));
        assert!(report.contains("Discharged: Yes"));
        assert!(report.contains("Name: Bob"));
        assert!(report.contains("Discharged: No"));
        assert_eq!(report.matches(REPORT_DIVIDER).count(), 2);
    }
}
