use kernel::model::{
    enrollment::{Address, Enrollment},
    id::{EnrollmentId, UserId},
};

// 参加登録を住所つきで取得する際に使う型。
// 住所が未登録の場合は住所カラムがすべて NULL になる
#[derive(sqlx::FromRow)]
pub struct EnrollmentRow {
    pub enrollment_id: EnrollmentId,
    pub user_id: UserId,
    pub name: String,
    pub street: Option<String>,
    pub number: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(value: EnrollmentRow) -> Self {
        let EnrollmentRow {
            enrollment_id,
            user_id,
            name,
            street,
            number,
            city,
            state,
            postal_code,
        } = value;
        let address = match (street, number, city, state, postal_code) {
            (Some(street), Some(number), Some(city), Some(state), Some(postal_code)) => {
                Some(Address {
                    street,
                    number,
                    city,
                    state,
                    postal_code,
                })
            }
            _ => None,
        };
        Enrollment {
            enrollment_id,
            user_id,
            name,
            address,
        }
    }
}
