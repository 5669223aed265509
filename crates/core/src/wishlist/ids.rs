use rand::Rng;

/// Generate a fresh entity identifier.
///
/// A random 128-bit value rendered as 32 lowercase hex characters. No
/// uniqueness check is made at write time.
pub fn new_id() -> String {
    let value: u128 = rand::rng().random();
    format!("{value:032x}")
}
