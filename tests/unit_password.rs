use flexfit::utils::password::{hash_password, verify_password};

#[test]
fn test_hash_password_success() {
    let password = "testpassword123";
    let hash = hash_password(password).unwrap();

    assert!(!hash.is_empty());
    assert_ne!(hash, password);
}

#[test]
fn test_verify_password_correct() {
    let password = "correctpassword";
    let hash = hash_password(password).unwrap();

    assert!(verify_password(password, &hash).unwrap());
}

#[test]
fn test_verify_password_incorrect() {
    let password = "correctpassword";
    let hash = hash_password(password).unwrap();

    assert!(!verify_password("wrongpassword", &hash).unwrap());
}

#[test]
fn test_verify_password_invalid_hash() {
    let result = verify_password("testpassword", "not_a_valid_bcrypt_hash");

    assert!(result.is_err());
}

#[test]
fn test_hash_generates_unique_hashes() {
    let password = "samepassword";
    let hash1 = hash_password(password).unwrap();
    let hash2 = hash_password(password).unwrap();

    assert_ne!(hash1, hash2);
    assert!(verify_password(password, &hash1).unwrap());
    assert!(verify_password(password, &hash2).unwrap());
}

#[test]
fn test_verify_case_sensitive() {
    let password = "Password123";
    let hash = hash_password(password).unwrap();

    assert!(!verify_password("password123", &hash).unwrap());
    assert!(!verify_password("PASSWORD123", &hash).unwrap());
}
