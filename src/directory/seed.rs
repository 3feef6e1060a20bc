//! Sample data for a fresh directory.

use super::model::{
    ApplicationState, Department, Employee, EmployeeId, Position, ViewState,
};

const FIRST_NAMES: [&str; 15] = [
    "John", "Jane", "Michael", "Sarah", "David", "Emily", "Robert", "Lisa", "Daniel", "Anna",
    "Ahmet", "Meryem", "Mehmet", "Ayşe", "Ali",
];

const LAST_NAMES: [&str; 15] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis", "Garcia", "Wilson",
    "Taylor", "Yılmaz", "Kaya", "Demir", "Şahin", "Çelik",
];

/// Fifteen sample employees, `emp-1` through `emp-15`.
///
/// Department and position rotate by index so the seed is reproducible.
pub fn mock_employees() -> Vec<Employee> {
    let departments = Department::all();
    let positions = Position::all();

    FIRST_NAMES
        .iter()
        .zip(LAST_NAMES.iter())
        .enumerate()
        .map(|(index, (first, last))| {
            let n = index + 1;
            Employee {
                id: EmployeeId::new(format!("emp-{n}")),
                first_name: first.to_string(),
                last_name: last.to_string(),
                date_of_employment: "23/09/2022".to_string(),
                date_of_birth: "23/09/1990".to_string(),
                phone: format!("+(90) 532 123 45 {n:02}"),
                email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
                department: departments[index % departments.len()],
                position: positions[index % positions.len()],
            }
        })
        .collect()
}

/// Default state handed to the store before any snapshot is restored.
pub fn initial_state(with_mock_employees: bool) -> ApplicationState {
    ApplicationState {
        employees: if with_mock_employees {
            mock_employees()
        } else {
            Vec::new()
        },
        ui: ViewState::default(),
    }
}
