use tg_core::ProfileUpdate;

use serde::{Deserialize, Deserializer};

/// Request body for updating the caller's profile; absent fields are kept.
///
/// `"bio": null` clears the bio, which is distinct from omitting it.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub bio: Option<Option<String>>,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            name: req.name.map(|n| n.trim().to_string()),
            bio: req.bio,
            email: req.email,
        }
    }
}

/// Only called when the key is present, so `null` becomes `Some(None)`
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
