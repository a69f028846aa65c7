// lib/src/config.rs

use std::path::{Path, PathBuf};

/// Record file name, fixed by convention.
pub const RECORDS_FILE: &str = "patient_records.txt";
/// Report file name, fixed by convention.
pub const REPORT_FILE: &str = "patient_report.txt";

/// File locations for the registry.
///
/// The paths are not user-configurable; the struct exists so the entry
/// point constructs them once and tests can point the codec at a
/// scratch directory.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub records_path: PathBuf,
    pub report_path: PathBuf,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            records_path: PathBuf::from(RECORDS_FILE),
            report_path: PathBuf::from(REPORT_FILE),
        }
    }
}

impl RegistryConfig {
    /// Places both files under `dir`, keeping the conventional names.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        RegistryConfig {
            records_path: dir.join(RECORDS_FILE),
            report_path: dir.join(REPORT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_conventional_names() {
        let config = RegistryConfig::default();
        assert_eq!(config.records_path, PathBuf::from("patient_records.txt"));
        assert_eq!(config.report_path, PathBuf::from("patient_report.txt"));
    }

    #[test]
    fn in_dir_keeps_conventional_names() {
        let config = RegistryConfig::in_dir("/tmp/ward");
        assert_eq!(
            config.records_path,
            PathBuf::from("/tmp/ward/patient_records.txt")
        );
    }
}
