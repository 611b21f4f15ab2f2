use serde::{Deserialize, Serialize};

/// Account record as exchanged over HTTP and held by repositories.
///
/// `id` is `None` until the record has been saved once. Passwords are kept
/// and compared as plain strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl User {
    /// Same record with the identifier cleared, so saving it inserts.
    pub fn into_new(self) -> Self {
        Self { id: None, ..self }
    }

    /// Copy of `self` with name, email and password taken from `update`.
    /// Identifier, image and phone are kept.
    pub fn with_profile(&self, update: &User) -> Self {
        Self {
            name: update.name.clone(),
            email: update.email.clone(),
            password: update.password.clone(),
            ..self.clone()
        }
    }

    /// Copy of `self` with only the image reference replaced.
    pub fn with_image_url(&self, image_url: Option<String>) -> Self {
        Self { image_url, ..self.clone() }
    }
}

impl From<models::user::Model> for User {
    fn from(m: models::user::Model) -> Self {
        Self {
            id: Some(m.id),
            name: m.name,
            email: m.email,
            password: m.password,
            image_url: m.image_url,
            phone: m.phone,
        }
    }
}
