/// Static employee roster and the fixed job-type assignment rule
use serde::{Deserialize, Serialize};

use super::value_objects::JobType;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    /// Capability set; the current roster keeps one job type per employee
    pub job_types: Vec<JobType>,
    pub contact: String,
}

/// The three-person roster, one employee per job type
pub fn default_roster() -> Vec<Employee> {
    vec![
        Employee {
            id: "employee_1".to_string(),
            name: "Alice Johnson".to_string(),
            job_types: vec![JobType::Electrical],
            contact: "alice@example.com".to_string(),
        },
        Employee {
            id: "employee_2".to_string(),
            name: "Bob Smith".to_string(),
            job_types: vec![JobType::Hvac],
            contact: "bob@example.com".to_string(),
        },
        Employee {
            id: "employee_3".to_string(),
            name: "Chris Brown".to_string(),
            job_types: vec![JobType::Plumbing],
            contact: "chris@example.com".to_string(),
        },
    ]
}

/// Deterministic 1:1 assignment; deliberately simpler than a capability
/// lookup over `Employee::job_types`.
pub fn assign_employee(job_type: JobType) -> String {
    match job_type {
        JobType::Electrical => "employee_1",
        JobType::Hvac => "employee_2",
        JobType::Plumbing => "employee_3",
    }
    .to_string()
}
