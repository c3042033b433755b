use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// 分组（标签）id，平台上既有数字 id 也有字符串 id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupId {
    Numeric(u64),
    Named(String),
}

impl GroupId {
    fn is_empty(&self) -> bool {
        matches!(self, GroupId::Named(name) if name.is_empty())
    }
}

impl From<u64> for GroupId {
    fn from(id: u64) -> Self {
        GroupId::Numeric(id)
    }
}

impl From<&str> for GroupId {
    fn from(id: &str) -> Self {
        GroupId::Named(id.to_owned())
    }
}

impl From<String> for GroupId {
    fn from(id: String) -> Self {
        GroupId::Named(id)
    }
}

/// Who receives a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Target {
    /// Every subscriber.
    #[default]
    All,
    /// A single subscriber, by openid or display name depending on use.
    User(String),
    Users(Vec<String>),
    Group(GroupId),
}

impl Target {
    pub fn user(id: impl Into<String>) -> Self {
        Target::User(id.into())
    }

    pub fn users<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Target::Users(ids.into_iter().map(Into::into).collect())
    }

    pub fn group(id: impl Into<GroupId>) -> Self {
        Target::Group(id.into())
    }

    /// `All` is not empty: it names every subscriber.
    pub fn is_empty(&self) -> bool {
        match self {
            Target::All => false,
            Target::User(id) => id.is_empty(),
            Target::Users(ids) => ids.is_empty(),
            Target::Group(id) => id.is_empty(),
        }
    }

    /// The target value with no transformation, `None` for `All`.
    pub fn raw_value(&self) -> Option<Value> {
        match self {
            Target::All => None,
            Target::User(id) => Some(json!(id)),
            Target::Users(ids) => Some(json!(ids)),
            Target::Group(id) => Some(json!(id)),
        }
    }
}

impl From<Vec<String>> for Target {
    fn from(ids: Vec<String>) -> Self {
        Target::Users(ids)
    }
}

impl From<GroupId> for Target {
    fn from(id: GroupId) -> Self {
        Target::Group(id)
    }
}

/// Recipient key used by the preview endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewBy {
    OpenId,
    Name,
}

impl PreviewBy {
    pub const OPENID_KEY: &'static str = "touser";
    pub const NAME_KEY: &'static str = "towxname";

    pub fn key(self) -> &'static str {
        match self {
            PreviewBy::OpenId => Self::OPENID_KEY,
            PreviewBy::Name => Self::NAME_KEY,
        }
    }
}
