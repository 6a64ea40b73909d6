use crate::{NewUser, PasswordHash, ProfileUpdate, User};

fn sample_user() -> User {
    User::new(
        "ada@example.com".to_string(),
        PasswordHash::new("$2b$04$secretdigestvalue"),
        "Ada".to_string(),
    )
}

#[test]
fn test_user_new() {
    let user = sample_user();

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.name, "Ada");
    assert_eq!(user.bio, None);
    assert_eq!(user.created_at, user.updated_at);
}

#[test]
fn given_user_when_serialized_then_hash_is_absent() {
    let user = sample_user();

    let json = serde_json::to_string(&user).unwrap();

    assert!(!json.contains("password"));
    assert!(!json.contains("secretdigestvalue"));
    assert!(json.contains("ada@example.com"));
}

#[test]
fn given_profile_update_when_applied_then_only_present_fields_change() {
    let mut user = sample_user();
    let before = user.updated_at;

    user.apply(ProfileUpdate {
        bio: Some(Some("Mathematician".to_string())),
        ..Default::default()
    });

    assert_eq!(user.name, "Ada");
    assert_eq!(user.bio.as_deref(), Some("Mathematician"));
    assert!(user.updated_at >= before);
}

#[test]
fn given_bio_set_when_cleared_then_bio_is_none() {
    let mut user = sample_user();
    user.apply(ProfileUpdate {
        bio: Some(Some("Mathematician".to_string())),
        ..Default::default()
    });

    user.apply(ProfileUpdate {
        bio: Some(None),
        ..Default::default()
    });

    assert_eq!(user.bio, None);
    assert_eq!(user.name, "Ada");
}

#[test]
fn given_empty_update_when_applied_then_timestamp_untouched() {
    let mut user = sample_user();
    let before = user.updated_at;

    let update = ProfileUpdate::default();
    assert!(update.is_empty());
    user.apply(update);

    assert_eq!(user.updated_at, before);
}

#[test]
fn given_new_user_when_debug_formatted_then_secret_is_redacted() {
    let new_user = NewUser {
        email: "ada@example.com".to_string(),
        secret: "hunter22".to_string(),
        name: "Ada".to_string(),
    };

    assert!(!format!("{new_user:?}").contains("hunter22"));
}
