use crate::modules::administration::core::role::Role;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleItemResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

impl From<Role> for RoleItemResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            name: role.name,
            description: role.description,
        }
    }
}
