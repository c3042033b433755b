use serde::Serialize;
use serde_json::json;
use strum::{AsRefStr, Display};

use crate::models::payload::Payload;

/// Mass-send API paths, relative to the platform base url.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
pub enum Endpoint {
    /// 按分组或全部用户群发
    #[strum(serialize = "cgi-bin/message/mass/sendall")]
    #[serde(rename = "cgi-bin/message/mass/sendall")]
    SendAll,
    /// 按 openid 列表群发
    #[strum(serialize = "cgi-bin/message/mass/send")]
    #[serde(rename = "cgi-bin/message/mass/send")]
    Send,
    #[strum(serialize = "cgi-bin/message/mass/preview")]
    #[serde(rename = "cgi-bin/message/mass/preview")]
    Preview,
    #[strum(serialize = "cgi-bin/message/mass/delete")]
    #[serde(rename = "cgi-bin/message/mass/delete")]
    Delete,
    #[strum(serialize = "cgi-bin/message/mass/get")]
    #[serde(rename = "cgi-bin/message/mass/get")]
    Status,
}

impl Endpoint {
    /// Openid lists go to `send`, everything else to `sendall`.
    pub fn for_broadcast(payload: &Payload) -> Self {
        if payload.contains_key("touser") {
            Endpoint::Send
        } else {
            Endpoint::SendAll
        }
    }
}

/// A payload paired with the endpoint it must be posted to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BroadcastRequest {
    pub endpoint: Endpoint,
    pub payload: Payload,
}

impl BroadcastRequest {
    pub fn new(endpoint: Endpoint, payload: Payload) -> Self {
        Self { endpoint, payload }
    }

    pub fn path(&self) -> &str {
        self.endpoint.as_ref()
    }
}

/// Deletes a sent broadcast. `article_idx` picks one article of a news message, 0 or none deletes all.
pub fn delete_request(msg_id: u64, article_idx: Option<u32>) -> BroadcastRequest {
    let payload = Payload::new()
        .with("msg_id", json!(msg_id))
        .with("article_idx", json!(article_idx.unwrap_or(0)));
    BroadcastRequest::new(Endpoint::Delete, payload)
}

pub fn status_request(msg_id: u64) -> BroadcastRequest {
    BroadcastRequest::new(Endpoint::Status, Payload::new().with("msg_id", json!(msg_id)))
}
