use serde_json::{Map, Value, json};
use tracing::debug;

use crate::{
    config::Config,
    models::{
        content_error::ContentError,
        message::{Message, MsgType, RawMessage},
    },
};

/// Keys owned by the recipient fragment; a content fragment may not carry them.
pub const RECIPIENT_KEYS: [&str; 4] = ["touser", "towxname", "filter", "clientmsgid"];

/// Turns a message into its content fragment (`msgtype` plus the typed body).
pub trait MessageTransformer {
    fn transform(&self, message: &Message) -> Result<Map<String, Value>, ContentError>;
}

impl<T: MessageTransformer + ?Sized> MessageTransformer for &T {
    fn transform(&self, message: &Message) -> Result<Map<String, Value>, ContentError> {
        (**self).transform(message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DefaultTransformer {
    config: Config,
}

impl DefaultTransformer {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl MessageTransformer for DefaultTransformer {
    fn transform(&self, message: &Message) -> Result<Map<String, Value>, ContentError> {
        let fragment = match message {
            Message::Text { content } => {
                if content.is_empty() {
                    return Err(ContentError::EmptyContent);
                }
                typed(MsgType::Text, json!({ "content": content }))
            }
            Message::News { media_id } => {
                let mut fragment = media(MsgType::News, media_id)?;
                fragment.insert(
                    "send_ignore_reprint".to_owned(),
                    json!(u8::from(self.config.ignore_reprint)),
                );
                fragment
            }
            Message::Image { media_id } => media(MsgType::Image, media_id)?,
            Message::Voice { media_id } => media(MsgType::Voice, media_id)?,
            Message::Video { media_id } => media(MsgType::Video, media_id)?,
            Message::Card { card_id } => {
                if card_id.is_empty() {
                    return Err(ContentError::MissingCardId);
                }
                typed(MsgType::Card, json!({ "card_id": card_id }))
            }
            Message::Raw(raw) => validate_raw(raw)?,
        };

        debug!("transformed message: msgtype={:?}", message.msg_type());
        Ok(fragment)
    }
}

fn typed(msg_type: MsgType, body: Value) -> Map<String, Value> {
    let mut fragment = Map::new();
    fragment.insert("msgtype".to_owned(), json!(msg_type.as_ref()));
    fragment.insert(msg_type.to_string(), body);
    fragment
}

fn media(msg_type: MsgType, media_id: &str) -> Result<Map<String, Value>, ContentError> {
    if media_id.is_empty() {
        return Err(ContentError::MissingMediaId(msg_type.to_string()));
    }
    Ok(typed(msg_type, json!({ "media_id": media_id })))
}

fn validate_raw(raw: &RawMessage) -> Result<Map<String, Value>, ContentError> {
    let msgtype = match raw.msgtype() {
        Some(t) if !t.is_empty() => t,
        _ => return Err(ContentError::MissingType),
    };
    let msg_type = raw
        .msg_type()
        .ok_or_else(|| ContentError::UnknownType(msgtype.to_owned()))?;

    let body = match raw.fields().get(msgtype) {
        Some(Value::Object(body)) => body,
        _ => return Err(ContentError::MissingBody(msgtype.to_owned())),
    };

    if msg_type == MsgType::Text
        && body
            .get("content")
            .and_then(Value::as_str)
            .is_none_or(str::is_empty)
    {
        return Err(ContentError::EmptyContent);
    }

    if let Some(key) = RECIPIENT_KEYS
        .iter()
        .find(|key| raw.fields().contains_key(**key))
    {
        return Err(ContentError::ReservedKey((*key).to_owned()));
    }

    Ok(raw.fields().clone())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::config::ReprintPolicy;

    fn raw(value: Value) -> Message {
        match value {
            Value::Object(map) => Message::raw(map),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_text() {
        let fragment = DefaultTransformer::default()
            .transform(&Message::text("hi"))
            .unwrap();
        assert_eq!(
            Value::Object(fragment),
            json!({ "msgtype": "text", "text": { "content": "hi" } })
        );
    }

    #[test]
    fn test_media_kinds() {
        let transformer = DefaultTransformer::default();
        let cases = [
            (Message::image("m1"), json!({ "msgtype": "image", "image": { "media_id": "m1" } })),
            (Message::voice("m2"), json!({ "msgtype": "voice", "voice": { "media_id": "m2" } })),
            (
                Message::video("m3"),
                json!({ "msgtype": "mpvideo", "mpvideo": { "media_id": "m3" } }),
            ),
            (
                Message::card("c1"),
                json!({ "msgtype": "wxcard", "wxcard": { "card_id": "c1" } }),
            ),
        ];

        for (message, expected) in cases {
            assert_eq!(Value::Object(transformer.transform(&message).unwrap()), expected);
        }
    }

    #[test]
    fn test_news_carries_reprint_policy() {
        let config = Config::default().with_ignore_reprint(ReprintPolicy::Continue);
        let fragment = DefaultTransformer::new(&config)
            .transform(&Message::news("n1"))
            .unwrap();
        assert_eq!(
            Value::Object(fragment),
            json!({
                "msgtype": "mpnews",
                "mpnews": { "media_id": "n1" },
                "send_ignore_reprint": 1
            })
        );
    }

    #[test]
    fn test_rejects_empty_fields() {
        let transformer = DefaultTransformer::default();
        assert_eq!(
            transformer.transform(&Message::text("")),
            Err(ContentError::EmptyContent)
        );
        assert_eq!(
            transformer.transform(&Message::video("")),
            Err(ContentError::MissingMediaId("mpvideo".into()))
        );
        assert_eq!(
            transformer.transform(&Message::card("")),
            Err(ContentError::MissingCardId)
        );
    }

    #[test]
    fn test_raw_passthrough() {
        let message = raw(json!({
            "msgtype": "image",
            "image": { "media_id": "m" },
            "need_open_comment": 1
        }));
        let fragment = DefaultTransformer::default().transform(&message).unwrap();
        assert_eq!(fragment.get("need_open_comment"), Some(&json!(1)));
    }

    #[test]
    fn test_raw_validation() {
        let transformer = DefaultTransformer::default();
        assert_eq!(
            transformer.transform(&raw(json!({ "text": { "content": "hi" } }))),
            Err(ContentError::MissingType)
        );
        assert_eq!(
            transformer.transform(&raw(json!({ "msgtype": "" }))),
            Err(ContentError::MissingType)
        );
        assert_eq!(
            transformer.transform(&raw(json!({ "msgtype": "music", "music": {} }))),
            Err(ContentError::UnknownType("music".into()))
        );
        assert_eq!(
            transformer.transform(&raw(json!({ "msgtype": "text" }))),
            Err(ContentError::MissingBody("text".into()))
        );
        assert_eq!(
            transformer.transform(&raw(json!({ "msgtype": "text", "text": { "content": "" } }))),
            Err(ContentError::EmptyContent)
        );
        assert_eq!(
            transformer.transform(&raw(json!({ "msgtype": "text", "text": {} }))),
            Err(ContentError::EmptyContent)
        );
        assert_eq!(
            transformer.transform(&raw(json!({
                "msgtype": "text",
                "text": { "content": "hi" },
                "filter": { "is_to_all": true }
            }))),
            Err(ContentError::ReservedKey("filter".into()))
        );
    }
}
