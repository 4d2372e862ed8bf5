use crate::modules::administration::core::employee::Employee;
use crate::modules::administration::use_cases::list_roles::projection::RoleItemResponse;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub email: String,
    pub roles: Vec<RoleItemResponse>,
    pub full_name: String,
    pub applied_promocodes_count: u32,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            full_name: employee.full_name(),
            id: employee.id,
            email: employee.email,
            roles: employee.roles.into_iter().map(Into::into).collect(),
            applied_promocodes_count: employee.applied_promocodes_count,
        }
    }
}
