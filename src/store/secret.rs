//! Random human-typeable secrets for auto-provisioned credentials
//!
//! Secrets are drawn from lowercase letters and the digits 1-9. They are
//! meant to be typed by hand, not to act as cryptographic keys.

use std::ops::RangeInclusive;

use rand::Rng;

/// Characters a secret may contain. `0` is excluded.
pub const SECRET_CHARACTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz123456789";

/// Length range for generated usernames
pub const USER_LENGTH: RangeInclusive<usize> = 4..=8;

/// Length range for generated passwords
pub const PASSWORD_LENGTH: RangeInclusive<usize> = 8..=15;

/// Generate a secret whose length is uniform in `min..=max`
pub fn generate_secret(min: usize, max: usize) -> String {
    generate_secret_with(&mut rand::thread_rng(), min, max)
}

/// Generate a secret using the given random number generator
pub fn generate_secret_with<R: Rng + ?Sized>(rng: &mut R, min: usize, max: usize) -> String {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    let len = rng.gen_range(min..=max);

    (0..len)
        .map(|_| SECRET_CHARACTERS[rng.gen_range(0..SECRET_CHARACTERS.len())] as char)
        .collect()
}

pub fn generate_user() -> String {
    generate_secret(*USER_LENGTH.start(), *USER_LENGTH.end())
}

pub fn generate_password() -> String {
    generate_secret(*PASSWORD_LENGTH.start(), *PASSWORD_LENGTH.end())
}
