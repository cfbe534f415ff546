//! Fine reference generation.

use rand::Rng;

/// Generates a human-readable fine reference such as `FN-09AC41F7`.
///
/// References appear on printed notices and are read out over the phone, so the
/// format stays short: a fixed `FN-` prefix followed by eight uppercase hex digits
/// drawn from the process RNG. Uniqueness is enforced by the database constraint
/// on the reference column, not by this function.
///
/// # Returns
/// An 11 character reference string in the form `FN-XXXXXXXX`.
pub fn generate_fine_reference() -> String {
    format!("FN-{:08X}", rand::rng().random::<u32>())
}
