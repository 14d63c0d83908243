//! Flat-file employee persistence.
//!
//! The store is the whole-file read-modify-write model of the source system:
//! every operation loads the complete JSON array, mutates it in memory, and
//! writes the complete array back. There is no locking, no transactions, and
//! no durability guarantee beyond `fs::write` - callers own any
//! read-modify-write coordination (the single-tenant dashboard provides
//! none, a preserved limitation).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;

/// Whole-file JSON store for employee records.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::store::FileStore;
///
/// let store = FileStore::new("employee.json");
/// let employees = store.load()?;
/// store.save(&employees)?;
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file does not need to exist yet; a missing file reads as an empty
    /// collection and is created on the first save.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all employee records.
    ///
    /// A missing or empty file yields `Ok(vec![])`. An unreadable file maps
    /// to [`PayrollError::StoreRead`]; invalid JSON maps to
    /// [`PayrollError::StoreParse`].
    pub fn load(&self) -> PayrollResult<Vec<Employee>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let path_str = self.path.display().to_string();
        let content = fs::read_to_string(&self.path).map_err(|e| PayrollError::StoreRead {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| PayrollError::StoreParse {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Writes the complete collection back to the file, pretty-printed.
    pub fn save(&self, employees: &[Employee]) -> PayrollResult<()> {
        let path_str = self.path.display().to_string();

        let json =
            serde_json::to_string_pretty(employees).map_err(|e| PayrollError::StoreWrite {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        fs::write(&self.path, json).map_err(|e| PayrollError::StoreWrite {
            path: path_str,
            message: e.to_string(),
        })
    }
}

/// Allocates the next employee id: one past the highest id in use.
///
/// Deterministic and collision-free under the single-writer whole-file
/// model. An empty collection starts at 1.
///
/// # Examples
///
/// ```
/// use payroll_engine::store::allocate_id;
///
/// assert_eq!(allocate_id(&[]), 1);
/// ```
pub fn allocate_id(employees: &[Employee]) -> u64 {
    employees.iter().map(|e| e.id).max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn temp_store(name: &str) -> FileStore {
        let path = std::env::temp_dir().join(format!(
            "payroll-engine-store-{}-{}.json",
            std::process::id(),
            name
        ));
        let _ = fs::remove_file(&path);
        FileStore::new(path)
    }

    fn create_employee(id: u64, basic: u64) -> Employee {
        Employee {
            id,
            name: format!("Employee {}", id),
            department: "Engineering".to_string(),
            basic_salary: Decimal::from(basic),
        }
    }

    /// FS-001: missing file loads as empty
    #[test]
    fn test_missing_file_loads_as_empty() {
        let store = temp_store("missing");
        assert_eq!(store.load().unwrap(), vec![]);
    }

    /// FS-002: empty file loads as empty
    #[test]
    fn test_empty_file_loads_as_empty() {
        let store = temp_store("empty");
        fs::write(store.path(), "").unwrap();

        assert_eq!(store.load().unwrap(), vec![]);
        fs::remove_file(store.path()).unwrap();
    }

    /// FS-003: save then load round-trips
    #[test]
    fn test_save_then_load_round_trips() {
        let store = temp_store("roundtrip");
        let employees = vec![create_employee(1, 50_000), create_employee(2, 30_000)];

        store.save(&employees).unwrap();
        assert_eq!(store.load().unwrap(), employees);
        fs::remove_file(store.path()).unwrap();
    }

    /// FS-004: invalid JSON maps to a parse error
    #[test]
    fn test_invalid_json_maps_to_parse_error() {
        let store = temp_store("corrupt");
        fs::write(store.path(), "{not json").unwrap();

        match store.load().unwrap_err() {
            PayrollError::StoreParse { path, .. } => {
                assert!(path.contains("corrupt"));
            }
            other => panic!("Expected StoreParse, got {:?}", other),
        }
        fs::remove_file(store.path()).unwrap();
    }

    /// FS-005: records with garbage salaries still load, coerced to zero
    #[test]
    fn test_garbage_salary_records_load_coerced() {
        let store = temp_store("lenient");
        fs::write(
            store.path(),
            r#"[{"id": 1, "name": "A", "department": "Ops", "basicSalary": "abc"}]"#,
        )
        .unwrap();

        let employees = store.load().unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].basic_salary, Decimal::ZERO);
        fs::remove_file(store.path()).unwrap();
    }

    /// FS-006: id allocation is max + 1
    #[test]
    fn test_allocate_id_is_max_plus_one() {
        assert_eq!(allocate_id(&[]), 1);
        assert_eq!(allocate_id(&[create_employee(1, 0)]), 2);
        assert_eq!(
            allocate_id(&[create_employee(7, 0), create_employee(3, 0)]),
            8
        );
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let store = temp_store("overwrite");

        store.save(&[create_employee(1, 10_000)]).unwrap();
        store.save(&[create_employee(2, 20_000)]).unwrap();

        let employees = store.load().unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].id, 2);
        fs::remove_file(store.path()).unwrap();
    }
}
