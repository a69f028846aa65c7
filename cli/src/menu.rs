// cli/src/menu.rs
//
// Interactive numbered menu. Every handler prints its own header and
// outcome; not-found and file errors are messages, never fatal, so the
// loop always regains control.

use std::io::{self, Write};

use crossterm::{
    style::{self, Color},
    ExecutableCommand,
};
use log::error;

use lib::{codec, PatientStore, RegistryConfig};
use models::{NewPatient, Patient, UpdatePatient};

use crate::input;

const DIVIDER: &str = "====================================";

/// Runs the menu loop until the operator exits. Exit is the only way
/// out; every other choice returns here.
pub fn run(mut store: PatientStore, config: &RegistryConfig) -> io::Result<()> {
    greet()?;

    loop {
        print_menu();
        let choice = input::read_line("Enter your choice: ")?;
        match choice.trim() {
            "1" => admit(&mut store)?,
            "2" => discharge(&mut store)?,
            "3" => search_by_id(&store)?,
            "4" => search_by_name(&store)?,
            "5" => list_admitted(&store),
            "6" => list_discharged(&store),
            "7" => list_all(&store),
            "8" => update(&mut store)?,
            "9" => delete(&mut store)?,
            "10" => save(&store, config),
            "11" => {
                store.sort_by_name();
                println!("Patients sorted by name.");
            }
            "12" => {
                store.sort_by_id();
                println!("Patients sorted by ID.");
            }
            "13" => generate_report(&store, config),
            "14" => {
                println!("Exiting program...");
                return Ok(());
            }
            _ => println!("Invalid choice, please try again."),
        }
    }
}

fn greet() -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(style::SetForegroundColor(Color::Cyan))?;
    write!(
        stdout,
        "\nWelcome to the Patient Registry CLI\nPick a menu number and press Enter.\n"
    )?;
    stdout.execute(style::ResetColor)?;
    stdout.flush()
}

fn print_header(title: &str) {
    println!("\n{}", DIVIDER);
    println!("==== {} ====", title);
    println!("{}", DIVIDER);
}

fn print_menu() {
    print_header("Hospital Management System");
    println!("1. Admit Patient");
    println!("2. Discharge Patient");
    println!("3. Search Patient by ID");
    println!("4. Search Patient by Name");
    println!("5. List All Admitted Patients");
    println!("6. List All Discharged Patients");
    println!("7. List All Patients");
    println!("8. Update Patient Record");
    println!("9. Delete Patient Record");
    println!("10. Save Records");
    println!("11. Sort Patients by Name");
    println!("12. Sort Patients by ID");
    println!("13. Generate Patient Report");
    println!("14. Exit");
}

fn print_patient_details(patient: &Patient) {
    println!("Patient ID: {}", patient.id);
    println!("Name: {}", patient.name);
    println!("Age: {}", patient.age);
    println!("Gender: {}", patient.gender);
    println!("Address: {}", patient.address);
    println!("Illness: {}", patient.illness);
    println!("Doctor: {}", patient.doctor);
    println!("Admission Date: {}", patient.admission_date);
    println!("Discharged: {}", patient.status());
}

fn admit(store: &mut PatientStore) -> io::Result<()> {
    print_header("Admit New Patient");

    let name = input::read_line("Enter patient name: ")?;
    let age = input::prompt_age("Enter patient age: ")?;
    let gender = input::prompt_gender("Enter gender (M/F): ")?;
    let address = input::read_line("Enter patient address: ")?;
    let illness = input::read_line("Enter illness: ")?;
    let doctor = input::read_line("Enter doctor name: ")?;
    let admission_date = input::prompt_admission_date()?;

    let id = store.admit(NewPatient {
        name,
        age,
        gender,
        address,
        illness,
        doctor,
        admission_date,
    });

    println!("\nPatient admitted successfully with ID: {}", id);
    println!("{}", DIVIDER);
    Ok(())
}

fn discharge(store: &mut PatientStore) -> io::Result<()> {
    print_header("Discharge Patient");
    let id = input::prompt_id("Enter patient ID to discharge: ")?;

    if store.discharge(id) {
        println!("Patient with ID {} has been discharged.", id);
    } else {
        println!("Patient not found or already discharged.");
    }
    println!("{}", DIVIDER);
    Ok(())
}

fn search_by_id(store: &PatientStore) -> io::Result<()> {
    print_header("Search Patient by ID");
    let id = input::prompt_id("Enter patient ID to search: ")?;

    match store.find_by_id(id) {
        Some(patient) => print_patient_details(patient),
        None => println!("Patient not found."),
    }
    println!("{}", DIVIDER);
    Ok(())
}

fn search_by_name(store: &PatientStore) -> io::Result<()> {
    print_header("Search Patient by Name");
    let name = input::read_line("Enter patient name to search: ")?;

    let matches = store.find_by_name(&name);
    if matches.is_empty() {
        println!("Patient not found.");
    } else {
        for patient in matches {
            print_patient_details(patient);
        }
    }
    println!("{}", DIVIDER);
    Ok(())
}

fn list_admitted(store: &PatientStore) {
    print_header("List of Admitted Patients");
    println!("\nAdmitted Patients:");
    let admitted = store.admitted();
    if admitted.is_empty() {
        println!("No admitted patients found.");
    } else {
        for patient in admitted {
            println!("ID: {} | Name: {}", patient.id, patient.name);
        }
    }
    println!("{}", DIVIDER);
}

fn list_discharged(store: &PatientStore) {
    print_header("List of Discharged Patients");
    println!("\nDischarged Patients:");
    let discharged = store.discharged();
    if discharged.is_empty() {
        println!("No discharged patients found.");
    } else {
        for patient in discharged {
            println!("ID: {} | Name: {}", patient.id, patient.name);
        }
    }
    println!("{}", DIVIDER);
}

fn list_all(store: &PatientStore) {
    print_header("List of All Patients");
    println!("\nAll Patients:");
    if store.is_empty() {
        println!("No patients found.");
    } else {
        for patient in store.all() {
            println!(
                "ID: {} | Name: {} | Discharged: {}",
                patient.id,
                patient.name,
                patient.status()
            );
        }
    }
    println!("{}", DIVIDER);
}

fn update(store: &mut PatientStore) -> io::Result<()> {
    print_header("Update Patient Record");
    let id = input::prompt_id("Enter patient ID to update: ")?;

    let name = match store.find_by_id(id) {
        Some(patient) => patient.name.clone(),
        None => {
            println!("Patient not found.");
            println!("{}", DIVIDER);
            return Ok(());
        }
    };

    println!("\nUpdating record for {} (ID: {})", name, id);
    let changes = UpdatePatient {
        address: input::prompt_optional("Enter new address (or press Enter to keep the same): ")?,
        illness: input::prompt_optional("Enter new illness (or press Enter to keep the same): ")?,
        doctor: input::prompt_optional("Enter new doctor (or press Enter to keep the same): ")?,
    };
    store.update(id, changes);
    println!("Patient record updated.");
    println!("{}", DIVIDER);
    Ok(())
}

fn delete(store: &mut PatientStore) -> io::Result<()> {
    print_header("Delete Patient Record");
    let id = input::prompt_id("Enter patient ID to delete: ")?;

    match store.find_by_id(id).map(|p| p.name.clone()) {
        Some(name) => {
            println!("Deleting patient with ID {} ({}).", id, name);
            store.delete(id);
            println!("Patient record deleted successfully.");
        }
        None => println!("Patient not found."),
    }
    println!("{}", DIVIDER);
    Ok(())
}

fn save(store: &PatientStore, config: &RegistryConfig) {
    match codec::save(&config.records_path, store.all()) {
        Ok(()) => println!("All records saved successfully."),
        Err(e) => {
            error!("save failed: {}", e);
            println!("Error saving records!");
        }
    }
    println!("{}", DIVIDER);
}

fn generate_report(store: &PatientStore, config: &RegistryConfig) {
    match codec::write_report(&config.report_path, store.all()) {
        Ok(()) => println!("Patient report generated successfully."),
        Err(e) => {
            error!("report generation failed: {}", e);
            println!("Error generating report.");
        }
    }
}
