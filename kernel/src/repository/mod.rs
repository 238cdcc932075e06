pub mod auth;
pub mod booking;
pub mod enrollment;
pub mod health;
pub mod hotel;
pub mod ticket;
