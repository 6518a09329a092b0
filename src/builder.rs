use crate::{
    error::Result,
    message::{
        Message, QoS, CONTENT_TYPE_JSON, DEBUG_INFO_KEY, PROPERTY_VERSION_KEY, RETURN_CODE_KEY,
    },
    Error,
};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Named constructors for the fixed message kinds of the protocol.
///
/// Every constructor returns an at-least-once envelope whose metadata shape
/// is identical for all messages of that kind, so consumers can classify
/// incoming traffic by the presence of `response_topic`, `correlation_id`
/// and specific user property keys without inspecting the payload.
pub struct MessageBuilder;

impl MessageBuilder {
    /// One-time, non-persisted notification.
    pub fn signal_message<T: Serialize>(topic: impl Into<String>, payload: &T) -> Result<Message> {
        Ok(Message {
            topic: non_empty("topic", topic.into())?,
            payload: serde_json::to_vec(payload)?,
            qos: QoS::AtLeastOnce,
            retain: false,
            content_type: None,
            message_expiry_seconds: None,
            correlation_id: None,
            response_topic: None,
            user_properties: HashMap::new(),
        })
    }

    /// Retained status that the broker discards after `expiry_seconds`.
    pub fn status_message<T: Serialize>(
        topic: impl Into<String>,
        payload: &T,
        expiry_seconds: u32,
    ) -> Result<Message> {
        if expiry_seconds == 0 {
            return Err(Error::InvalidArgument(
                "expiry_seconds must be positive".to_string(),
            ));
        }
        Ok(Message {
            topic: non_empty("topic", topic.into())?,
            payload: serde_json::to_vec(payload)?,
            qos: QoS::AtLeastOnce,
            retain: true,
            content_type: None,
            message_expiry_seconds: Some(expiry_seconds),
            correlation_id: None,
            response_topic: None,
            user_properties: HashMap::new(),
        })
    }

    /// Response to a request that could not be fulfilled.
    ///
    /// The correlation id is mandatory: an error response must reference a
    /// concrete prior request, so none is ever generated here.
    pub fn error_response_message(
        topic: impl Into<String>,
        return_code: u16,
        correlation_id: impl Into<String>,
        debug_info: Option<String>,
    ) -> Result<Message> {
        let mut user_properties = HashMap::new();
        user_properties.insert(RETURN_CODE_KEY.to_string(), return_code.to_string());
        if let Some(debug_info) = debug_info {
            user_properties.insert(DEBUG_INFO_KEY.to_string(), debug_info);
        }
        Ok(Message {
            topic: non_empty("topic", topic.into())?,
            payload: b"{}".to_vec(),
            qos: QoS::AtLeastOnce,
            retain: false,
            content_type: None,
            message_expiry_seconds: None,
            correlation_id: Some(non_empty("correlation_id", correlation_id.into())?),
            response_topic: None,
            user_properties,
        })
    }

    /// Successful response to a request.
    pub fn response_message<T: Serialize>(
        topic: impl Into<String>,
        payload: &T,
        return_code: u16,
        correlation_id: impl Into<String>,
    ) -> Result<Message> {
        Ok(Message {
            topic: non_empty("topic", topic.into())?,
            payload: serde_json::to_vec(payload)?,
            qos: QoS::AtLeastOnce,
            retain: false,
            content_type: None,
            message_expiry_seconds: None,
            correlation_id: Some(non_empty("correlation_id", correlation_id.into())?),
            response_topic: None,
            user_properties: HashMap::from([(
                RETURN_CODE_KEY.to_string(),
                return_code.to_string(),
            )]),
        })
    }

    /// Retained message carrying the current value of a property, so late
    /// subscribers immediately see the last known state.
    pub fn property_state_message<T: Serialize>(
        topic: impl Into<String>,
        payload: &T,
        state_version: u32,
    ) -> Result<Message> {
        Ok(Message {
            topic: non_empty("topic", topic.into())?,
            payload: serde_json::to_vec(payload)?,
            qos: QoS::AtLeastOnce,
            retain: true,
            content_type: Some(CONTENT_TYPE_JSON.to_string()),
            message_expiry_seconds: None,
            correlation_id: None,
            response_topic: None,
            user_properties: HashMap::from([(
                PROPERTY_VERSION_KEY.to_string(),
                state_version.to_string(),
            )]),
        })
    }

    /// Request to update a property to a new value.
    pub fn property_update_request_message<T: Serialize>(
        topic: impl Into<String>,
        payload: &T,
        version: u32,
        response_topic: impl Into<String>,
        correlation_id: Option<String>,
    ) -> Result<Message> {
        Ok(Message {
            topic: non_empty("topic", topic.into())?,
            payload: serde_json::to_vec(payload)?,
            qos: QoS::AtLeastOnce,
            retain: false,
            content_type: None,
            message_expiry_seconds: None,
            correlation_id: Some(correlation_id_or_generated(correlation_id)?),
            response_topic: Some(non_empty("response_topic", response_topic.into())?),
            user_properties: HashMap::from([(
                PROPERTY_VERSION_KEY.to_string(),
                version.to_string(),
            )]),
        })
    }

    /// Response to a property update request.
    pub fn property_response_message<T: Serialize>(
        topic: impl Into<String>,
        payload: &T,
        version: u32,
        return_code: u16,
        correlation_id: impl Into<String>,
        debug_info: Option<String>,
    ) -> Result<Message> {
        let mut user_properties = HashMap::from([
            (RETURN_CODE_KEY.to_string(), return_code.to_string()),
            (PROPERTY_VERSION_KEY.to_string(), version.to_string()),
        ]);
        if let Some(debug_info) = debug_info {
            user_properties.insert(DEBUG_INFO_KEY.to_string(), debug_info);
        }
        Ok(Message {
            topic: non_empty("topic", topic.into())?,
            payload: serde_json::to_vec(payload)?,
            qos: QoS::AtLeastOnce,
            retain: false,
            content_type: None,
            message_expiry_seconds: None,
            correlation_id: Some(non_empty("correlation_id", correlation_id.into())?),
            response_topic: None,
            user_properties,
        })
    }

    /// Generic request expecting a reply on `response_topic`.
    pub fn request_message<T: Serialize>(
        topic: impl Into<String>,
        payload: &T,
        response_topic: impl Into<String>,
        correlation_id: Option<String>,
    ) -> Result<Message> {
        Ok(Message {
            topic: non_empty("topic", topic.into())?,
            payload: serde_json::to_vec(payload)?,
            qos: QoS::AtLeastOnce,
            retain: false,
            content_type: None,
            message_expiry_seconds: None,
            correlation_id: Some(correlation_id_or_generated(correlation_id)?),
            response_topic: Some(non_empty("response_topic", response_topic.into())?),
            user_properties: HashMap::new(),
        })
    }
}

fn non_empty(field: &str, value: String) -> Result<String> {
    if value.is_empty() {
        return Err(Error::InvalidArgument(format!("{} must not be empty", field)));
    }
    Ok(value)
}

// An explicitly supplied empty id is a caller bug, not a request for a
// generated one.
fn correlation_id_or_generated(correlation_id: Option<String>) -> Result<String> {
    match correlation_id {
        Some(id) => non_empty("correlation_id", id),
        None => {
            let id = Uuid::new_v4().to_string();
            debug!("Generated correlation id '{}'", id);
            Ok(id)
        }
    }
}
