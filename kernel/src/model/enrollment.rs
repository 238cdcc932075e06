use crate::model::id::{EnrollmentId, UserId};

#[derive(Debug, Clone)]
pub struct Enrollment {
    pub enrollment_id: EnrollmentId,
    pub user_id: UserId,
    pub name: String,
    pub address: Option<Address>,
}

#[derive(Debug, Clone)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}
