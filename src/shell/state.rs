use crate::modules::administration::core::employee::Employee;
use crate::modules::administration::core::role::Role;
use crate::modules::administration::use_cases::register_employee::handler::RegisterEmployeeHandler;
use crate::modules::administration::use_cases::update_employee::handler::UpdateEmployeeHandler;
use crate::shared::infrastructure::repository::Repository;
use crate::shared::infrastructure::repository::in_memory::InMemoryRepository;
use std::sync::Arc;

pub type EmployeeRepository = dyn Repository<Employee> + Send + Sync;
pub type RoleRepository = dyn Repository<Role> + Send + Sync;

#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<EmployeeRepository>,
    pub roles: Arc<RoleRepository>,
    pub register_handler: Arc<RegisterEmployeeHandler<EmployeeRepository, RoleRepository>>,
    pub update_handler: Arc<UpdateEmployeeHandler<EmployeeRepository, RoleRepository>>,
}

impl AppState {
    /// Wires every use case against the same pair of repositories, so reads and writes
    /// always see one store per entity type.
    pub fn from_repositories(employees: Arc<EmployeeRepository>, roles: Arc<RoleRepository>) -> Self {
        Self {
            register_handler: Arc::new(RegisterEmployeeHandler::new(
                employees.clone(),
                roles.clone(),
            )),
            update_handler: Arc::new(UpdateEmployeeHandler::new(employees.clone(), roles.clone())),
            employees,
            roles,
        }
    }

    pub fn in_memory(employees: Vec<Employee>, roles: Vec<Role>) -> Self {
        Self::from_repositories(
            Arc::new(InMemoryRepository::new(employees)),
            Arc::new(InMemoryRepository::new(roles)),
        )
    }
}
