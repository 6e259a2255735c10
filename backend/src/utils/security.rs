use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Generates an opaque password-reset token.
pub fn generate_reset_token() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Only the SHA-256 digest of a reset token is persisted.
pub fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.trim().as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_token_is_stable_hex() {
        let a = hash_token("abc");
        assert_eq!(a.len(), 64);
        assert_eq!(a, hash_token(" abc "));
        assert_eq!(
            a,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn generated_tokens_are_unique() {
        let first = generate_reset_token();
        let second = generate_reset_token();
        assert_eq!(first.len(), 32);
        assert_ne!(first, second);
    }
}
