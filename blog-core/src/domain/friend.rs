use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LinkKind {
    #[default]
    PersonalSite,
    CodeHosting,
}

impl TryFrom<u8> for LinkKind {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::PersonalSite),
            1 => Ok(Self::CodeHosting),
            other => Err(format!("unknown url_type: {other}")),
        }
    }
}

impl From<LinkKind> for u8 {
    fn from(kind: LinkKind) -> Self {
        match kind {
            LinkKind::PersonalSite => 0,
            LinkKind::CodeHosting => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    pub avatar: String,
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub url_type: LinkKind,
}

impl Friend {
    pub fn new(
        avatar: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        url_type: LinkKind,
    ) -> Self {
        Self {
            avatar: avatar.into(),
            name: name.into(),
            description: description.into(),
            url: url.into(),
            url_type,
        }
    }
}
