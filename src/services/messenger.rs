use serde_json::{Value, json};
use tracing::debug;

use crate::{
    models::{
        configuration_error::ConfigurationError,
        error::BuildError,
        message::Message,
        payload::Payload,
        target::{PreviewBy, Target},
    },
    services::{
        mass::{BroadcastRequest, Endpoint},
        transformer::{DefaultTransformer, MessageTransformer},
    },
};


/// 群发消息构建器：先设置消息和接收者，再调用 `build` 或 `preview_*` 生成请求体
#[derive(Debug, Clone)]
pub struct Messenger<T = DefaultTransformer> {
    /// 接收者，未设置时群发给全部用户
    to: Option<Target>,
    message: Option<Message>,
    /// 群发去重 id
    client_msg_id: Option<String>,
    transformer: T,
}

impl Messenger {
    pub fn new() -> Self {
        Self::with_transformer(DefaultTransformer::default())
    }
}

impl Default for Messenger {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MessageTransformer> Messenger<T> {
    pub fn with_transformer(transformer: T) -> Self {
        Self {
            to: None,
            message: None,
            client_msg_id: None,
            transformer,
        }
    }

    pub fn message(mut self, message: Message) -> Self {
        self.message = Some(message);
        self
    }

    pub fn to(mut self, to: impl Into<Target>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Sent as `clientmsgid` by [`build`](Self::build); previews ignore it.
    pub fn client_msg_id(mut self, client_msg_id: impl Into<String>) -> Self {
        self.client_msg_id = Some(client_msg_id.into());
        self
    }

    pub fn get_message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn get_target(&self) -> Option<&Target> {
        self.to.as_ref()
    }

    /// Broadcast payload: recipient selector followed by the message content.
    pub fn build(&self) -> Result<Payload, BuildError> {
        let message = self
            .message
            .as_ref()
            .ok_or(ConfigurationError::MissingMessage)?;

        let mut recipient = build_group(self.to.as_ref())?;
        if let Some(client_msg_id) = &self.client_msg_id {
            recipient = recipient.with("clientmsgid", json!(client_msg_id));
        }

        let content = self.transformer.transform(message)?;
        let payload = recipient.merge(content)?;

        debug!("Built broadcast payload: {:?}", payload);
        Ok(payload)
    }

    pub fn preview_by_open_id(&self) -> Result<Payload, BuildError> {
        self.build_preview(PreviewBy::OpenId)
    }

    pub fn preview_by_name(&self) -> Result<Payload, BuildError> {
        self.build_preview(PreviewBy::Name)
    }

    /// [`build`](Self::build) paired with `send` or `sendall` depending on the recipients.
    pub fn request(&self) -> Result<BroadcastRequest, BuildError> {
        let payload = self.build()?;
        Ok(BroadcastRequest::new(Endpoint::for_broadcast(&payload), payload))
    }

    pub fn preview_request(&self, by: PreviewBy) -> Result<BroadcastRequest, BuildError> {
        let payload = self.build_preview(by)?;
        Ok(BroadcastRequest::new(Endpoint::Preview, payload))
    }

    fn build_preview(&self, by: PreviewBy) -> Result<Payload, BuildError> {
        let message = self
            .message
            .as_ref()
            .ok_or(ConfigurationError::MissingMessage)?;

        let to = self
            .to
            .as_ref()
            .filter(|to| !to.is_empty())
            .and_then(Target::raw_value)
            .ok_or(ConfigurationError::MissingTarget)?;

        let content = self.transformer.transform(message)?;
        let payload = build_to(to, by).merge(content)?;

        debug!("Built preview payload: {:?}", payload);
        Ok(payload)
    }
}

fn build_group(to: Option<&Target>) -> Result<Payload, ConfigurationError> {
    let to = match to {
        Some(to) if to.is_empty() => return Err(ConfigurationError::EmptyTarget),
        Some(to) => to,
        None => &Target::All,
    };

    let payload = match to {
        Target::All => Payload::new().with("filter", json!({ "is_to_all": true })),
        Target::User(id) => Payload::new().with("touser", json!([id])),
        Target::Users(ids) => Payload::new().with("touser", json!(ids)),
        Target::Group(group_id) => Payload::new().with(
            "filter",
            json!({ "is_to_all": false, "group_id": group_id }),
        ),
    };
    Ok(payload)
}

fn build_to(to: Value, by: PreviewBy) -> Payload {
    Payload::new().with(by.key(), to)
}
