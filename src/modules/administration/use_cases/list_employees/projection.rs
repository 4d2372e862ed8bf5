use crate::modules::administration::core::employee::Employee;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeShortResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
}

impl From<Employee> for EmployeeShortResponse {
    fn from(employee: Employee) -> Self {
        Self {
            full_name: employee.full_name(),
            id: employee.id,
            email: employee.email,
        }
    }
}
