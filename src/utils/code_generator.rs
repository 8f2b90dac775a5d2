//! Short code generation.

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 6;

/// Generates a random short code.
///
/// Uses `nanoid` with its default URL-safe alphabet (`A-Z a-z 0-9 _ -`) and a
/// cryptographically strong random source. The generator itself gives no
/// uniqueness guarantee; the store's unique constraint on `short_code` does,
/// backed by bounded retry in
/// [`crate::application::services::LinkService`].
pub fn generate_code() -> String {
    nanoid::nanoid!(CODE_LENGTH)
}
