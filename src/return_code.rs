use crate::{builder::MessageBuilder, error::Result, message::Message};
use std::fmt;
use thiserror::Error;

/// Well-known return codes for method-style request/response exchanges.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MethodReturnCode {
    Success = 0,
    ClientError = 1,
    ServerError = 2,
    TransportError = 3,
    PayloadError = 4,
    ClientSerializationError = 5,
    ClientDeserializationError = 6,
    ServerSerializationError = 7,
    ServerDeserializationError = 8,
    MethodNotFound = 9,
    Unauthorized = 10,
    Timeout = 11,
    OutOfSync = 12,
    UnknownError = 13,
    NotImplemented = 14,
    ServiceUnavailable = 15,
}

impl MethodReturnCode {
    pub const fn code(self) -> u16 {
        self as u16
    }
}

impl From<MethodReturnCode> for u16 {
    fn from(code: MethodReturnCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for MethodReturnCode {
    type Error = u16;

    fn try_from(value: u16) -> std::result::Result<Self, u16> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::ClientError),
            2 => Ok(Self::ServerError),
            3 => Ok(Self::TransportError),
            4 => Ok(Self::PayloadError),
            5 => Ok(Self::ClientSerializationError),
            6 => Ok(Self::ClientDeserializationError),
            7 => Ok(Self::ServerSerializationError),
            8 => Ok(Self::ServerDeserializationError),
            9 => Ok(Self::MethodNotFound),
            10 => Ok(Self::Unauthorized),
            11 => Ok(Self::Timeout),
            12 => Ok(Self::OutOfSync),
            13 => Ok(Self::UnknownError),
            14 => Ok(Self::NotImplemented),
            15 => Ok(Self::ServiceUnavailable),
            other => Err(other),
        }
    }
}

impl fmt::Display for MethodReturnCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Success => "success",
            Self::ClientError => "client error",
            Self::ServerError => "server error",
            Self::TransportError => "transport error",
            Self::PayloadError => "payload error",
            Self::ClientSerializationError => "client serialization error",
            Self::ClientDeserializationError => "client deserialization error",
            Self::ServerSerializationError => "server serialization error",
            Self::ServerDeserializationError => "server deserialization error",
            Self::MethodNotFound => "method not found",
            Self::Unauthorized => "unauthorized",
            Self::Timeout => "timeout",
            Self::OutOfSync => "out of sync",
            Self::UnknownError => "unknown error",
            Self::NotImplemented => "not implemented",
            Self::ServiceUnavailable => "service unavailable",
        };
        f.write_str(name)
    }
}

/// A failed method call, convertible into an error-response envelope.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct MethodError {
    pub code: MethodReturnCode,
    pub message: String,
}

impl MethodError {
    pub fn new(code: MethodReturnCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Render this failure as an error response to the given request.
    pub fn to_response_message(
        &self,
        response_topic: impl Into<String>,
        correlation_id: impl Into<String>,
    ) -> Result<Message> {
        MessageBuilder::error_response_message(
            response_topic,
            self.code.code(),
            correlation_id,
            Some(self.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{DEBUG_INFO_KEY, RETURN_CODE_KEY};

    #[test]
    fn test_code_round_trip() {
        for raw in 0u16..16 {
            let code = MethodReturnCode::try_from(raw).unwrap();
            assert_eq!(code.code(), raw);
        }
        assert_eq!(MethodReturnCode::try_from(16), Err(16));
    }

    #[test]
    fn test_to_response_message() {
        let err = MethodError::new(MethodReturnCode::Timeout, "no reply within 5s");
        let msg = err.to_response_message("svc/reply", "req-42").unwrap();

        assert_eq!(msg.user_property(RETURN_CODE_KEY), Some("11"));
        assert_eq!(
            msg.user_property(DEBUG_INFO_KEY),
            Some("timeout: no reply within 5s")
        );
        assert_eq!(msg.correlation_id.as_deref(), Some("req-42"));
        assert_eq!(msg.payload, b"{}".to_vec());
    }
}
