// Shared test fixture for the Employee entity.
// Defaults come from `json/employee.json`, setters override single fields.

use crate::modules::administration::core::employee::Employee;
use crate::modules::administration::core::role::Role;
use serde::Deserialize;
use uuid::Uuid;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub applied_promocodes_count: u32,
}

pub struct EmployeeBuilder {
    inner: Employee,
}

impl Default for EmployeeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EmployeeBuilder {
    pub fn new() -> Self {
        let dto: EmployeeDto = serde_json::from_str(include_str!("json/employee.json")).unwrap();

        Self {
            inner: Employee {
                id: dto.id,
                first_name: dto.first_name,
                last_name: dto.last_name,
                email: dto.email,
                roles: Vec::new(),
                applied_promocodes_count: dto.applied_promocodes_count,
            },
        }
    }

    pub fn id(mut self, v: Uuid) -> Self {
        self.inner.id = v;
        self
    }

    pub fn first_name(mut self, v: impl Into<String>) -> Self {
        self.inner.first_name = v.into();
        self
    }

    pub fn last_name(mut self, v: impl Into<String>) -> Self {
        self.inner.last_name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn roles(mut self, v: Vec<Role>) -> Self {
        self.inner.roles = v;
        self
    }

    pub fn applied_promocodes_count(mut self, v: u32) -> Self {
        self.inner.applied_promocodes_count = v;
        self
    }

    pub fn build(self) -> Employee {
        self.inner
    }
}

#[cfg(test)]
mod employee_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = EmployeeBuilder::default().build();
        assert_eq!(
            built.id,
            Uuid::parse_str("0190f5a2-7b1c-7d3e-9a4b-1c2d3e4f5a6b").unwrap()
        );
        assert_eq!(built.first_name, "Anna");
        assert_eq!(built.last_name, "Kuznetsova");
        assert_eq!(built.email, "kuznetsova@somemail.ru");
        assert!(built.roles.is_empty());
        assert_eq!(built.applied_promocodes_count, 3);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let role = Role {
            id: Uuid::from_u128(7),
            name: "Tester".into(),
            description: "Tests things".into(),
        };
        let custom = EmployeeBuilder::new()
            .id(Uuid::from_u128(1))
            .first_name("Boris")
            .last_name("Petrov")
            .email("petrov@somemail.ru")
            .roles(vec![role.clone()])
            .applied_promocodes_count(42)
            .build();

        assert_eq!(custom.id, Uuid::from_u128(1));
        assert_eq!(custom.first_name, "Boris");
        assert_eq!(custom.last_name, "Petrov");
        assert_eq!(custom.email, "petrov@somemail.ru");
        assert_eq!(custom.roles, vec![role]);
        assert_eq!(custom.applied_promocodes_count, 42);
    }
}
