use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(UserId);

/// One of the four user attributes that can be edited locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Name,
    Email,
    Phone,
    Website,
}

impl RecordField {
    pub const ALL: [RecordField; 4] = [
        RecordField::Name,
        RecordField::Email,
        RecordField::Phone,
        RecordField::Website,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RecordField::Name => "name",
            RecordField::Email => "email",
            RecordField::Phone => "phone",
            RecordField::Website => "website",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RecordField::Name => "Name:",
            RecordField::Email => "Email:",
            RecordField::Phone => "Phone:",
            RecordField::Website => "Website:",
        }
    }
}

/// A user entry as served by the directory endpoint.
///
/// Attributes other than the editable four are kept in `extra` so that a local
/// update leaves them untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        website: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            website: website.into(),
            extra: Map::new(),
        }
    }
}
