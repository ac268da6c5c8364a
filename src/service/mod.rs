use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeUpdate, NewEmployee};
use crate::store::{EmployeeStore, StoreError};
use chrono::Utc;
use log::{debug, error, warn};
use std::collections::HashSet;
use std::sync::Mutex;

/// Next free identifier: largest numeric `EMP` suffix currently present,
/// plus one, zero-padded to at least three digits. Empty collection gets
/// `EMP001`. Never collides with an identifier in `records`, even when the
/// collection has holes from deletions or is not in numeric order.
pub fn next_employee_id(records: &[Employee]) -> String {
    let highest = records
        .iter()
        .filter_map(|emp| emp.employee_id.strip_prefix("EMP"))
        .filter_map(|suffix| suffix.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("EMP{:03}", highest + 1)
}

fn dedup_skills(skills: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    skills.into_iter().filter(|skill| seen.insert(skill.clone())).collect()
}

/// CRUD operations over the employee collection.
///
/// Every operation reloads the backing file, mutates an in-memory copy and
/// saves the whole collection back; nothing is cached between calls. The
/// mutex serializes the load-mutate-save sequence of mutating operations
/// against each other. Reads take no lock, matching the original
/// single-user design.
pub struct EmployeeService {
    store: EmployeeStore,
    write_lock: Mutex<()>,
}

impl EmployeeService {
    pub fn new(store: EmployeeStore) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Lenient read: a missing file means an empty directory, and a
    /// malformed or unreadable file is treated the same way after logging.
    fn load_lenient(&self) -> Vec<Employee> {
        match self.store.load() {
            Ok(records) => records,
            Err(StoreError::Missing) => {
                debug!(
                    "employee file {} does not exist yet, treating as empty",
                    self.store.path().display()
                );
                Vec::new()
            }
            Err(err) => {
                warn!(
                    "could not read employee file {}: {}",
                    self.store.path().display(),
                    err
                );
                Vec::new()
            }
        }
    }

    fn save(&self, records: &[Employee]) -> Result<(), AppError> {
        self.store.save(records).map_err(|err| {
            error!(
                "could not write employee file {}: {}",
                self.store.path().display(),
                err
            );
            AppError::PersistenceError("Failed to save employee data".to_string())
        })
    }

    /// All records in store order.
    pub fn list(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.load_lenient())
    }

    pub fn get(&self, employee_id: &str) -> Result<Employee, AppError> {
        self.load_lenient()
            .into_iter()
            .find(|emp| emp.employee_id == employee_id)
            .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", employee_id)))
    }

    /// Build a full record from the partial payload, assign the next
    /// identifier, append and persist. Returns the created record.
    pub fn create(&self, new_employee: NewEmployee) -> Result<Employee, AppError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut records = self.load_lenient();
        let employee = Employee {
            employee_id: next_employee_id(&records),
            first_name: new_employee.first_name,
            last_name: new_employee.last_name,
            role: new_employee.role,
            department: new_employee.department,
            time_at_company: new_employee
                .time_at_company
                .unwrap_or_else(|| "0 years 0 months".to_string()),
            date_of_creation: Utc::now().format("%Y-%m-%d").to_string(),
            email: new_employee.email,
            location: new_employee.location,
            manager: new_employee.manager,
            status: "Active".to_string(),
            salary_band: new_employee.salary_band,
            skills: Vec::new(),
        };

        records.push(employee.clone());
        self.save(&records)?;
        Ok(employee)
    }

    /// Shallow merge: every field present in `updates` overwrites the stored
    /// value; everything else, including the record's position in the
    /// collection, stays put. Returns the merged record.
    pub fn update(&self, employee_id: &str, updates: EmployeeUpdate) -> Result<Employee, AppError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut records = self.load_lenient();
        let employee = records
            .iter_mut()
            .find(|emp| emp.employee_id == employee_id)
            .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", employee_id)))?;

        if let Some(first_name) = updates.first_name {
            employee.first_name = first_name;
        }
        if let Some(last_name) = updates.last_name {
            employee.last_name = last_name;
        }
        if let Some(role) = updates.role {
            employee.role = role;
        }
        if let Some(department) = updates.department {
            employee.department = department;
        }
        if let Some(email) = updates.email {
            employee.email = email;
        }
        if let Some(location) = updates.location {
            employee.location = location;
        }
        if let Some(manager) = updates.manager {
            employee.manager = manager;
        }
        if let Some(status) = updates.status {
            employee.status = status;
        }
        if let Some(salary_band) = updates.salary_band {
            employee.salary_band = salary_band;
        }
        if let Some(time_at_company) = updates.time_at_company {
            employee.time_at_company = time_at_company;
        }
        if let Some(skills) = updates.skills {
            employee.skills = dedup_skills(skills);
        }

        let merged = employee.clone();
        self.save(&records)?;
        Ok(merged)
    }

    /// Remove the record with the given identifier and persist the filtered
    /// collection. Absent identifiers leave the file untouched.
    pub fn delete(&self, employee_id: &str) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut records = self.load_lenient();
        let before = records.len();
        records.retain(|emp| emp.employee_id != employee_id);

        if records.len() == before {
            return Err(AppError::NotFound(format!(
                "Employee {} not found",
                employee_id
            )));
        }

        self.save(&records)
    }
}
