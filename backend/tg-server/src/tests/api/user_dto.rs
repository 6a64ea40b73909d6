use crate::UserDto;

use tg_core::{PasswordHash, User};

#[test]
fn test_user_dto_never_serializes_hash() {
    let user = User::new(
        "ada@example.com".into(),
        PasswordHash::new("$2b$04$abcdefghijklmnopqrstuv"),
        "Ada".into(),
    );

    let json = serde_json::to_value(UserDto::from(user)).unwrap();
    let text = json.to_string();

    assert_eq!(json["email"], "ada@example.com");
    assert!(json.get("password_hash").is_none());
    assert!(json.get("password").is_none());
    assert!(!text.contains("$2b$"));
}
