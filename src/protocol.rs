//! Wire protocol
//!
//! One JSON request per connection, one JSON response back, each
//! terminated by a newline.
//!
//! Request: `{"type": "type"|"stream"|"key"|"ping", "payload": {...}}`
//! Response: `{"success": bool, "error"?: string, "message"?: string}`

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::input::KeyCode;

pub const CMD_TYPE: &str = "type";
pub const CMD_STREAM: &str = "stream";
pub const CMD_KEY: &str = "key";
pub const CMD_PING: &str = "ping";

/// Raw envelope; the payload is decoded once the type is known
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Command {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub payload: Value,
}

/// "type": batch typing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypePayload {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
}

/// "stream": typing with word and character delays (0 = server default)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamPayload {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    /// Delay after each inter-word space
    #[serde(default, skip_serializing_if = "is_zero")]
    pub delay_ms: u64,
    /// Delay after each character
    #[serde(default, skip_serializing_if = "is_zero")]
    pub char_delay: u64,
}

/// "key": one raw key press
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPayload {
    pub keycode: KeyCode,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub modifier: String,
}

fn is_zero(v: &u64) -> bool {
    *v == 0
}

/// Decoded request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Type(TypePayload),
    Stream(StreamPayload),
    Key(KeyPayload),
    Ping,
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("failed to decode command: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("unknown command type: {0}")]
    UnknownCommand(String),

    #[error("invalid {kind} payload: {source}")]
    InvalidPayload {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("message exceeds {limit} bytes")]
    TooLarge { limit: usize },

    #[error("failed to read message: {0}")]
    Io(#[from] std::io::Error),
}

impl Request {
    /// Decode one request line
    pub fn parse(bytes: &[u8]) -> Result<Self, ProtocolError> {
        let command: Command = serde_json::from_slice(bytes).map_err(ProtocolError::Malformed)?;
        Self::from_command(command)
    }

    pub fn from_command(command: Command) -> Result<Self, ProtocolError> {
        match command.kind.as_str() {
            CMD_TYPE => payload(CMD_TYPE, command.payload).map(Self::Type),
            CMD_STREAM => payload(CMD_STREAM, command.payload).map(Self::Stream),
            CMD_KEY => payload(CMD_KEY, command.payload).map(Self::Key),
            CMD_PING => Ok(Self::Ping),
            _ => Err(ProtocolError::UnknownCommand(command.kind)),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Type(_) => CMD_TYPE,
            Self::Stream(_) => CMD_STREAM,
            Self::Key(_) => CMD_KEY,
            Self::Ping => CMD_PING,
        }
    }

    pub fn to_command(&self) -> Result<Command, serde_json::Error> {
        let payload = match self {
            Self::Type(p) => serde_json::to_value(p)?,
            Self::Stream(p) => serde_json::to_value(p)?,
            Self::Key(p) => serde_json::to_value(p)?,
            Self::Ping => Value::Null,
        };
        Ok(Command {
            kind: self.kind().to_string(),
            payload,
        })
    }

    /// Newline-terminated JSON
    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        encode_line(&self.to_command()?)
    }
}

fn payload<T: serde::de::DeserializeOwned>(kind: &'static str, value: Value) -> Result<T, ProtocolError> {
    serde_json::from_value(value).map_err(|source| ProtocolError::InvalidPayload { kind, source })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Response {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            error: None,
            message: Some(message.into()),
        }
    }

    pub fn error(err: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            error: Some(err.to_string()),
            message: None,
        }
    }

    pub fn parse(bytes: &[u8]) -> Result<Self, ProtocolError> {
        serde_json::from_slice(bytes).map_err(ProtocolError::Malformed)
    }

    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        encode_line(self)
    }
}

fn encode_line<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut line = serde_json::to_vec(value)?;
    line.push(b'\n');
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_type() {
        let req = Request::parse(br#"{"type":"type","payload":{"text":"hi","layout":"fr"}}"#).unwrap();
        assert_eq!(
            req,
            Request::Type(TypePayload {
                text: "hi".to_string(),
                layout: Some("fr".to_string()),
            })
        );
    }

    #[test]
    fn test_parse_stream_defaults() {
        let req = Request::parse(br#"{"type":"stream","payload":{"text":"a b"}}"#).unwrap();
        let Request::Stream(p) = req else {
            panic!("expected stream, got {:?}", req);
        };
        assert_eq!(p.delay_ms, 0);
        assert_eq!(p.char_delay, 0);
        assert!(p.layout.is_none());
    }

    #[test]
    fn test_parse_key_and_ping() {
        let req = Request::parse(br#"{"type":"key","payload":{"keycode":28}}"#).unwrap();
        assert_eq!(
            req,
            Request::Key(KeyPayload {
                keycode: 28,
                modifier: String::new(),
            })
        );
        assert_eq!(Request::parse(br#"{"type":"ping"}"#).unwrap(), Request::Ping);
        assert_eq!(Request::parse(br#"{"type":"ping","payload":{}}"#).unwrap(), Request::Ping);
    }

    #[test]
    fn test_parse_errors() {
        let err = Request::parse(br#"{"type":"dance"}"#).unwrap_err();
        assert_eq!(err.to_string(), "unknown command type: dance");

        let err = Request::parse(br#"{"type":"key","payload":{"keycode":"enter"}}"#).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidPayload { kind: "key", .. }));

        let err = Request::parse(br#"{"type":"type"}"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid type payload"));

        assert!(matches!(Request::parse(b"not json"), Err(ProtocolError::Malformed(_))));
    }

    #[test]
    fn test_encode_omits_defaults() {
        let req = Request::Stream(StreamPayload {
            text: "x".to_string(),
            layout: None,
            delay_ms: 0,
            char_delay: 15,
        });
        let line = req.encode().unwrap();
        assert_eq!(line.last(), Some(&b'\n'));
        let text = std::str::from_utf8(&line).unwrap().trim_end();
        assert_eq!(text, r#"{"type":"stream","payload":{"char_delay":15,"text":"x"}}"#);

        let ping = Request::Ping.encode().unwrap();
        assert_eq!(ping, b"{\"type\":\"ping\"}\n");
    }

    #[test]
    fn test_response_shapes() {
        let ok = Response::ok("pong").encode().unwrap();
        assert_eq!(ok, b"{\"success\":true,\"message\":\"pong\"}\n");

        let err = Response::error("boom");
        assert_eq!(Response::parse(&err.encode().unwrap()).unwrap(), err);
        assert_eq!(err.error.as_deref(), Some("boom"));
    }
}
