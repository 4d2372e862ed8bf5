use crate::modules::administration::core::employee::Employee;
use crate::modules::administration::core::role::Role;
use crate::modules::administration::use_cases::errors::ApplicationError;
use crate::modules::administration::use_cases::profile::{resolve_roles, validate_profile};
use crate::modules::administration::use_cases::register_employee::command::RegisterEmployee;
use crate::shared::infrastructure::repository::Repository;
use std::sync::Arc;
use uuid::Uuid;

pub struct RegisterEmployeeHandler<TEmployees, TRoles>
where
    TEmployees: Repository<Employee> + ?Sized + 'static,
    TRoles: Repository<Role> + ?Sized + 'static,
{
    employees: Arc<TEmployees>,
    roles: Arc<TRoles>,
}

impl<TEmployees, TRoles> RegisterEmployeeHandler<TEmployees, TRoles>
where
    TEmployees: Repository<Employee> + ?Sized + 'static,
    TRoles: Repository<Role> + ?Sized + 'static,
{
    pub fn new(employees: Arc<TEmployees>, roles: Arc<TRoles>) -> Self {
        Self { employees, roles }
    }

    /// Returns the stored employee, carrying the id the repository assigned.
    pub async fn handle(&self, command: RegisterEmployee) -> Result<Employee, ApplicationError> {
        let errors = validate_profile(&command.first_name, &command.last_name, &command.email);
        if !errors.is_empty() {
            return Err(ApplicationError::Validation(errors));
        }

        let roles = resolve_roles(&*self.roles, &command.role_ids).await?;

        let employee = Employee {
            id: Uuid::nil(),
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            roles,
            applied_promocodes_count: command.applied_promocodes_count,
        };
        Ok(self.employees.insert(employee).await?)
    }
}
