use kernel::model::{
    id::{EnrollmentId, TicketId, TicketTypeId},
    ticket::{Ticket, TicketStatus, TicketType},
};
use shared::error::AppError;

// チケットをチケット種別ごと取得する際に使う型
#[derive(sqlx::FromRow)]
pub struct TicketRow {
    pub ticket_id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: String,
    pub ticket_type_id: TicketTypeId,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = AppError;

    fn try_from(value: TicketRow) -> Result<Self, Self::Error> {
        let TicketRow {
            ticket_id,
            enrollment_id,
            status,
            ticket_type_id,
            is_remote,
            includes_hotel,
        } = value;
        let status = match status.as_str() {
            "RESERVED" => TicketStatus::Reserved,
            "PAID" => TicketStatus::Paid,
            other => {
                return Err(AppError::ConversionEntityError(format!(
                    "unknown ticket status: {other}"
                )))
            }
        };
        Ok(Ticket {
            ticket_id,
            enrollment_id,
            status,
            ticket_type: TicketType {
                ticket_type_id,
                is_remote,
                includes_hotel,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: &str) -> TicketRow {
        TicketRow {
            ticket_id: TicketId::new(20),
            enrollment_id: EnrollmentId::new(10),
            status: status.into(),
            ticket_type_id: TicketTypeId::new(30),
            is_remote: false,
            includes_hotel: true,
        }
    }

    #[test]
    fn known_statuses_are_converted() {
        assert_eq!(
            Ticket::try_from(row("PAID")).unwrap().status,
            TicketStatus::Paid
        );
        assert_eq!(
            Ticket::try_from(row("RESERVED")).unwrap().status,
            TicketStatus::Reserved
        );
    }

    #[test]
    fn unknown_status_is_a_conversion_error() {
        let res = Ticket::try_from(row("CANCELLED"));
        assert!(matches!(res, Err(AppError::ConversionEntityError(_))));
    }
}
