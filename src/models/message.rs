use std::str::FromStr;

use serde_json::{Map, Value};
use strum::{AsRefStr, Display, EnumString};

/// Wire discriminators accepted by the mass-send API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
pub enum MsgType {
    #[strum(serialize = "text")]
    Text,
    #[strum(serialize = "mpnews")]
    News,
    #[strum(serialize = "image")]
    Image,
    #[strum(serialize = "voice")]
    Voice,
    #[strum(serialize = "mpvideo")]
    Video,
    #[strum(serialize = "wxcard")]
    Card,
}

/// Content to broadcast or preview.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Text { content: String },
    /// 图文消息，media_id 来自素材上传
    News { media_id: String },
    Image { media_id: String },
    Voice { media_id: String },
    Video { media_id: String },
    /// 卡券
    Card { card_id: String },
    /// Already encoded fragment, passed through after validation.
    Raw(RawMessage),
}

impl Message {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    pub fn news(media_id: impl Into<String>) -> Self {
        Self::News {
            media_id: media_id.into(),
        }
    }

    pub fn image(media_id: impl Into<String>) -> Self {
        Self::Image {
            media_id: media_id.into(),
        }
    }

    pub fn voice(media_id: impl Into<String>) -> Self {
        Self::Voice {
            media_id: media_id.into(),
        }
    }

    pub fn video(media_id: impl Into<String>) -> Self {
        Self::Video {
            media_id: media_id.into(),
        }
    }

    pub fn card(card_id: impl Into<String>) -> Self {
        Self::Card {
            card_id: card_id.into(),
        }
    }

    pub fn raw(fields: Map<String, Value>) -> Self {
        Self::Raw(RawMessage::new(fields))
    }

    /// `None` when the type cannot be determined, which only happens for raw messages.
    pub fn msg_type(&self) -> Option<MsgType> {
        match self {
            Message::Text { .. } => Some(MsgType::Text),
            Message::News { .. } => Some(MsgType::News),
            Message::Image { .. } => Some(MsgType::Image),
            Message::Voice { .. } => Some(MsgType::Voice),
            Message::Video { .. } => Some(MsgType::Video),
            Message::Card { .. } => Some(MsgType::Card),
            Message::Raw(raw) => raw.msg_type(),
        }
    }
}

/// A content fragment built elsewhere, e.g. deserialized from a template.
///
/// Only the envelope and text content are checked; other body fields pass through as given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMessage {
    fields: Map<String, Value>,
}

impl RawMessage {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn msgtype(&self) -> Option<&str> {
        self.fields.get("msgtype").and_then(Value::as_str)
    }

    /// `None` when `msgtype` is missing or not one of [`MsgType`].
    pub fn msg_type(&self) -> Option<MsgType> {
        self.msgtype().and_then(|t| MsgType::from_str(t).ok())
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for RawMessage {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}
