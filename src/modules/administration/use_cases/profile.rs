// Rules shared by the commands that write an employee profile.

use crate::modules::administration::core::role::Role;
use crate::modules::administration::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::repository::Repository;
use uuid::Uuid;

/// Collects every violated rule, in field order.
pub fn validate_profile(first_name: &str, last_name: &str, email: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if first_name.trim().is_empty() {
        errors.push("first_name must not be empty".to_string());
    }
    if last_name.trim().is_empty() {
        errors.push("last_name must not be empty".to_string());
    }
    if email.trim().is_empty() {
        errors.push("email must not be empty".to_string());
    } else if !email.contains('@') {
        errors.push(format!("email '{email}' is not a valid address"));
    }
    errors
}

/// Looks up each role id, in order. Repeated ids resolve once.
pub async fn resolve_roles<TRoles>(roles: &TRoles, ids: &[Uuid]) -> Result<Vec<Role>, ApplicationError>
where
    TRoles: Repository<Role> + ?Sized,
{
    let mut resolved: Vec<Role> = Vec::with_capacity(ids.len());
    for &id in ids {
        if resolved.iter().any(|role| role.id == id) {
            continue;
        }
        let role = roles
            .get_by_id(id)
            .await?
            .ok_or(ApplicationError::UnknownRole(id))?;
        resolved.push(role);
    }
    Ok(resolved)
}
