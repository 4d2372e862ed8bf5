use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role_ids: Vec<Uuid>,
    pub applied_promocodes_count: u32,
}
