use crate::model::id::{EnrollmentId, TicketId, TicketTypeId};

#[derive(Debug, Clone)]
pub struct Ticket {
    pub ticket_id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
}

#[derive(Debug, Clone)]
pub struct TicketType {
    pub ticket_type_id: TicketTypeId,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Reserved,
    Paid,
}

impl Ticket {
    /// 宿泊の権利があるチケットかどうかを判定する。
    /// リモート参加・宿泊なしプラン・未入金（RESERVED）のチケットは対象外
    pub fn entitles_hotel_stay(&self) -> bool {
        !self.ticket_type.is_remote
            && self.ticket_type.includes_hotel
            && self.status != TicketStatus::Reserved
    }
}
