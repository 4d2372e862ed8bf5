// Seed collections for the in memory repositories.
//
// Ids are fixed so clients and tests can address the seeded records across restarts.

use crate::modules::administration::core::employee::Employee;
use crate::modules::administration::core::role::Role;
use uuid::{Uuid, uuid};

pub const ADMIN_ROLE_ID: Uuid = uuid!("53729686-a368-4eeb-8bfa-cc69b6050d02");
pub const PARTNER_MANAGER_ROLE_ID: Uuid = uuid!("b0ae7aac-5493-45cd-ad16-87426a5e7665");

pub const IVAN_SERGEEV_ID: Uuid = uuid!("451533d5-d8d5-4a11-9c7b-eb9f14e1a32f");
pub const PETR_ANDREEV_ID: Uuid = uuid!("f766e2bf-340a-46ea-bff3-f1700b435895");

pub fn roles() -> Vec<Role> {
    vec![
        Role {
            id: ADMIN_ROLE_ID,
            name: "Admin".to_string(),
            description: "Administrator".to_string(),
        },
        Role {
            id: PARTNER_MANAGER_ROLE_ID,
            name: "PartnerManager".to_string(),
            description: "Partner manager".to_string(),
        },
    ]
}

pub fn employees() -> Vec<Employee> {
    let roles = roles();
    let role = |id: Uuid| -> Vec<Role> { roles.iter().filter(|r| r.id == id).cloned().collect() };

    vec![
        Employee {
            id: IVAN_SERGEEV_ID,
            first_name: "Ivan".to_string(),
            last_name: "Sergeev".to_string(),
            email: "owner@somemail.ru".to_string(),
            roles: role(ADMIN_ROLE_ID),
            applied_promocodes_count: 5,
        },
        Employee {
            id: PETR_ANDREEV_ID,
            first_name: "Petr".to_string(),
            last_name: "Andreev".to_string(),
            email: "andreev@somemail.ru".to_string(),
            roles: role(PARTNER_MANAGER_ROLE_ID),
            applied_promocodes_count: 10,
        },
    ]
}
