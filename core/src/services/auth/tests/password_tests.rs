use crate::services::auth::{hash_password, verify_password};

#[test]
fn test_hash_and_verify() {
    let hash = hash_password("senha123").unwrap();
    assert!(hash.starts_with("$2"));
    assert_ne!(hash, "senha123");
    assert!(verify_password("senha123", &hash));
    assert!(!verify_password("senha124", &hash));
}

#[test]
fn test_hashes_are_salted() {
    let first = hash_password("senha123").unwrap();
    let second = hash_password("senha123").unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_garbage_hash_never_matches() {
    assert!(!verify_password("senha123", "not-a-bcrypt-hash"));
}
