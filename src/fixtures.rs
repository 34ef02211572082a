//! The embedded employee dataset.

use serde::{Deserialize, Serialize};

/// One employee row to be inserted by the seeder.
///
/// The row id is assigned by SQLite on insertion and is never part of
/// the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Employee name. Required; a blank name is rejected at insert time.
    pub name: String,
    /// Job title, if known.
    pub role: Option<String>,
    /// Monthly salary, if known.
    pub salary: Option<f64>,
}

impl EmployeeRecord {
    /// Creates a record with all fields populated.
    pub fn new(name: impl Into<String>, role: impl Into<String>, salary: f64) -> Self {
        Self {
            name: name.into(),
            role: Some(role.into()),
            salary: Some(salary),
        }
    }
}

/// The four fixture employees loaded by a default run.
pub fn default_employees() -> Vec<EmployeeRecord> {
    vec![
        EmployeeRecord::new("João Silva", "Desenvolvedor", 4500.00),
        EmployeeRecord::new("Maria Oliveira", "Analista", 5500.00),
        EmployeeRecord::new("Pedro Souza", "Gerente", 7500.00),
        EmployeeRecord::new("Leo Souza", "Professor", 1.00),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dataset() {
        let employees = default_employees();

        assert_eq!(employees.len(), 4);
        for employee in &employees {
            assert!(!employee.name.trim().is_empty());
            assert!(employee.role.is_some());
            assert!(employee.salary.is_some());
        }
    }

    #[test]
    fn test_dataset_names_are_unique() {
        let employees = default_employees();
        let names: std::collections::HashSet<_> =
            employees.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names.len(), employees.len());
    }
}
