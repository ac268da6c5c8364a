use crate::models::employee::Employee;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What went wrong at the file boundary. "No data" and "corrupt data" are
/// kept distinct here; whether to be lenient about either is the caller's
/// decision, not the store's.
#[derive(Debug)]
pub enum StoreError {
    Missing,
    Malformed(serde_json::Error),
    Io(io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Missing => write!(f, "backing file does not exist"),
            StoreError::Malformed(err) => write!(f, "backing file is not a valid employee array: {}", err),
            StoreError::Io(err) => write!(f, "backing file I/O failed: {}", err),
        }
    }
}

/// Flat-file store for the whole employee collection.
///
/// The backing file is a single pretty-printed JSON array; every `load`
/// reads it in full and every `save` replaces it in full. No caching, no
/// indexing: the collection is small enough that O(n) everywhere is fine.
pub struct EmployeeStore {
    path: PathBuf,
}

impl EmployeeStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the full collection, preserving file order.
    pub fn load(&self) -> Result<Vec<Employee>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Err(StoreError::Missing),
            Err(err) => return Err(StoreError::Io(err)),
        };
        serde_json::from_str(&content).map_err(StoreError::Malformed)
    }

    /// Replace the backing file with the given collection, pretty-printed.
    ///
    /// Writes to a temp file next to the target and renames it into place,
    /// so a concurrent `load` sees either the old or the new array, never a
    /// partial one.
    pub fn save(&self, records: &[Employee]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(records).map_err(StoreError::Malformed)?;

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(StoreError::Io)?;
            }
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).map_err(StoreError::Io)?;
        fs::rename(&tmp_path, &self.path).map_err(StoreError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample(id: &str) -> Employee {
        Employee {
            employee_id: id.to_string(),
            first_name: "Ana".to_string(),
            last_name: "Ruiz".to_string(),
            role: "Engineer".to_string(),
            department: "Platform".to_string(),
            time_at_company: "2 years 1 months".to_string(),
            date_of_creation: "2024-03-11".to_string(),
            email: "ana.ruiz@example.com".to_string(),
            location: "Madrid".to_string(),
            manager: "Luis Vega".to_string(),
            status: "Active".to_string(),
            salary_band: "B3".to_string(),
            skills: vec!["Rust".to_string(), "SQL".to_string()],
        }
    }

    #[test]
    fn load_missing_file_reports_missing() {
        let dir = TempDir::new().unwrap();
        let store = EmployeeStore::new(dir.path().join("employees.json"));

        assert!(matches!(store.load(), Err(StoreError::Missing)));
    }

    #[test]
    fn load_malformed_file_reports_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("employees.json");
        fs::write(&path, "{ this is not json").unwrap();
        let store = EmployeeStore::new(&path);

        assert!(matches!(store.load(), Err(StoreError::Malformed(_))));
    }

    #[test]
    fn save_then_load_round_trips_records_in_order() {
        let dir = TempDir::new().unwrap();
        let store = EmployeeStore::new(dir.path().join("employees.json"));
        let records = vec![sample("EMP001"), sample("EMP002")];

        store.save(&records).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, records);
    }

    #[test]
    fn save_of_unmodified_load_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = EmployeeStore::new(dir.path().join("employees.json"));
        store.save(&[sample("EMP001")]).unwrap();

        let first = store.load().unwrap();
        store.save(&first).unwrap();
        let second = store.load().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn save_creates_missing_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store = EmployeeStore::new(dir.path().join("data").join("employees.json"));

        store.save(&[sample("EMP001")]).unwrap();

        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn save_writes_pretty_printed_json_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("employees.json");
        let store = EmployeeStore::new(&path);

        store.save(&[sample("EMP001")]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n  {"));
        assert!(content.contains("\"employeeId\": \"EMP001\""));
        assert!(!path.with_extension("json.tmp").exists());
    }
}
