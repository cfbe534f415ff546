pub use super::gavel_fine::Entity as GavelFine;
pub use super::gavel_payment::Entity as GavelPayment;
pub use super::gavel_user::Entity as GavelUser;
