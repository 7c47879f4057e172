//! bcrypt wrappers for storing and checking passwords.

/// Fixed work factor for new hashes.
pub const HASH_COST: u32 = 10;

/// Salted one-way hash of `password`, suitable for storage.
pub fn hash(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, HASH_COST)
}

/// Compare a candidate password against a stored hash.
pub fn verify(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(password, hash)
}
