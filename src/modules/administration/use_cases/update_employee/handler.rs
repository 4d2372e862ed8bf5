use crate::modules::administration::core::employee::Employee;
use crate::modules::administration::core::role::Role;
use crate::modules::administration::use_cases::errors::ApplicationError;
use crate::modules::administration::use_cases::profile::{resolve_roles, validate_profile};
use crate::modules::administration::use_cases::update_employee::command::UpdateEmployee;
use crate::shared::infrastructure::repository::Repository;
use std::sync::Arc;

pub struct UpdateEmployeeHandler<TEmployees, TRoles>
where
    TEmployees: Repository<Employee> + ?Sized + 'static,
    TRoles: Repository<Role> + ?Sized + 'static,
{
    employees: Arc<TEmployees>,
    roles: Arc<TRoles>,
}

impl<TEmployees, TRoles> UpdateEmployeeHandler<TEmployees, TRoles>
where
    TEmployees: Repository<Employee> + ?Sized + 'static,
    TRoles: Repository<Role> + ?Sized + 'static,
{
    pub fn new(employees: Arc<TEmployees>, roles: Arc<TRoles>) -> Self {
        Self { employees, roles }
    }

    /// Replaces the whole stored record; fields missing from the command are not merged back.
    pub async fn handle(&self, command: UpdateEmployee) -> Result<(), ApplicationError> {
        let errors = validate_profile(&command.first_name, &command.last_name, &command.email);
        if !errors.is_empty() {
            return Err(ApplicationError::Validation(errors));
        }

        let roles = resolve_roles(&*self.roles, &command.role_ids).await?;

        self.employees
            .update(Employee {
                id: command.id,
                first_name: command.first_name,
                last_name: command.last_name,
                email: command.email,
                roles,
                applied_promocodes_count: command.applied_promocodes_count,
            })
            .await?;
        Ok(())
    }
}
