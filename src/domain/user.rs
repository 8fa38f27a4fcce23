use serde::{Deserialize, Serialize};

/// Complete snapshot of a user's profile.
///
/// # Actor Framework
/// This struct implements the [`Entity`](crate::actor_framework::Entity) trait,
/// keyed by `username`, so it can be held by a
/// [`ResourceActor`](crate::actor_framework::ResourceActor).
///
/// Values are never mutated in place. Every `with_*` builder and every
/// [`UserPatch::apply_to`] call returns a new record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    username: String,
    name: String,
    lastname: String,
    description: String,
    picture: String,
    password: String,
}

impl Default for UserRecord {
    fn default() -> Self {
        Self {
            username: "aramirez".to_string(),
            name: String::new(),
            lastname: String::new(),
            description: String::new(),
            picture: String::new(),
            password: "qwe".to_string(),
        }
    }
}

impl UserRecord {
    /// Creates a fully populated record.
    ///
    /// # Arguments
    /// * `username` - Primary key of the user
    /// * `name` - Display first name
    /// * `lastname` - Display family name
    /// * `description` - Free-text bio
    /// * `picture` - URI or path of the avatar image
    /// * `password` - Credential, stored as given
    pub fn new(
        username: impl Into<String>,
        name: impl Into<String>,
        lastname: impl Into<String>,
        description: impl Into<String>,
        picture: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            name: name.into(),
            lastname: lastname.into(),
            description: description.into(),
            picture: picture.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Store key, same value as [`UserRecord::username`].
    pub(crate) fn username_key(&self) -> &String {
        &self.username
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lastname(&self) -> &str {
        &self.lastname
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn picture(&self) -> &str {
        &self.picture
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn with_username(self, username: impl Into<String>) -> Self {
        Self { username: username.into(), ..self }
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self { name: name.into(), ..self }
    }

    pub fn with_lastname(self, lastname: impl Into<String>) -> Self {
        Self { lastname: lastname.into(), ..self }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self { description: description.into(), ..self }
    }

    pub fn with_picture(self, picture: impl Into<String>) -> Self {
        Self { picture: picture.into(), ..self }
    }

    pub fn with_password(self, password: impl Into<String>) -> Self {
        Self { password: password.into(), ..self }
    }

    /// Read-side view that never carries the password.
    pub fn public_profile(&self) -> PublicProfile {
        PublicProfile {
            username: self.username.clone(),
            name: self.name.clone(),
            lastname: self.lastname.clone(),
            description: self.description.clone(),
            picture: self.picture.clone(),
        }
    }
}

/// Sparse set of changes to one [`UserRecord`], keyed by `username`.
///
/// Each optional field is tri-state: `None` leaves the record's value alone,
/// `Some("")` clears it, `Some(value)` replaces it. Absent fields are left out
/// of the serialized form entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPatch {
    username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<String>,
}

impl UserPatch {
    /// Creates an empty patch targeting `username`.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn lastname(&self) -> Option<&str> {
        self.lastname.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn picture(&self) -> Option<&str> {
        self.picture.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..self }
    }

    pub fn with_lastname(self, lastname: impl Into<String>) -> Self {
        Self { lastname: Some(lastname.into()), ..self }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self { description: Some(description.into()), ..self }
    }

    pub fn with_picture(self, picture: impl Into<String>) -> Self {
        Self { picture: Some(picture.into()), ..self }
    }

    pub fn with_password(self, password: impl Into<String>) -> Self {
        Self { password: Some(password.into()), ..self }
    }

    /// True when no optional field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.lastname.is_none()
            && self.description.is_none()
            && self.picture.is_none()
            && self.password.is_none()
    }

    /// Names of the optional fields this patch sets, in declaration order.
    ///
    /// Safe to log: carries no values.
    pub fn set_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("lastname", &self.lastname),
            ("description", &self.description),
            ("picture", &self.picture),
            ("password", &self.password),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_some())
        .map(|(field, _)| field)
        .collect()
    }

    /// Produces a new record with every present field of this patch applied.
    ///
    /// The result keeps `record.username`; the patch's username only selects
    /// which record to change.
    pub fn apply_to(&self, record: &UserRecord) -> UserRecord {
        let pick = |change: &Option<String>, current: &String| {
            change.clone().unwrap_or_else(|| current.clone())
        };
        UserRecord {
            username: record.username.clone(),
            name: pick(&self.name, &record.name),
            lastname: pick(&self.lastname, &record.lastname),
            description: pick(&self.description, &record.description),
            picture: pick(&self.picture, &record.picture),
            password: pick(&self.password, &record.password),
        }
    }
}

/// Merges `patch` into `record`, see [`UserPatch::apply_to`].
pub fn apply(record: &UserRecord, patch: &UserPatch) -> UserRecord {
    patch.apply_to(record)
}

/// Profile as exposed on reads. Has no password field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicProfile {
    pub username: String,
    pub name: String,
    pub lastname: String,
    pub description: String,
    pub picture: String,
}
