pub mod api;
pub mod fine;
pub mod payment;
pub mod user;
