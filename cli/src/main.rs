// cli/src/main.rs

use clap::Parser;
use log::error;

use lib::{PatientStore, RegistryConfig};

mod input;
mod menu;

/// CLI entry point for the patient registry
#[derive(Parser, Debug)]
#[command(name = "registry-cli")]
#[command(version = "0.1.0")]
#[command(about = "Interactive patient record manager", long_about = None)]
struct CliArgs {}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let _args = CliArgs::parse();

    let config = RegistryConfig::default();
    let store = match lib::codec::load(&config.records_path) {
        Ok(records) => {
            if !records.is_empty() {
                println!("Patient records loaded successfully.");
            }
            PatientStore::from_records(records)
        }
        Err(e) => {
            // A broken record file must not keep the operator out.
            error!("failed to load {}: {}", config.records_path.display(), e);
            println!("Error loading records, starting with an empty registry.");
            PatientStore::new()
        }
    };

    menu::run(store, &config)?;
    Ok(())
}
