pub mod prelude;

pub mod gavel_fine;
pub mod gavel_payment;
pub mod gavel_user;
pub mod sea_orm_active_enums;
