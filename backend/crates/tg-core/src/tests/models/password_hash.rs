use crate::PasswordHash;

#[test]
fn given_hash_when_debug_formatted_then_digest_is_redacted() {
    let hash = PasswordHash::new("$2b$04$abcdefghijklmnopqrstuv");

    let rendered = format!("{hash:?}");

    assert!(!rendered.contains("abcdefghijklmnopqrstuv"));
    assert!(rendered.contains("redacted"));
}

#[test]
fn given_hash_when_as_str_then_returns_stored_digest() {
    let hash = PasswordHash::new("$2b$04$digest");
    assert_eq!(hash.as_str(), "$2b$04$digest");
}
