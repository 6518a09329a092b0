use std::collections::HashMap;

/// User property key carrying the numeric return code of a response.
pub const RETURN_CODE_KEY: &str = "ReturnCode";
/// User property key carrying optional human-readable failure detail.
pub const DEBUG_INFO_KEY: &str = "DebugInfo";
/// User property key carrying the version of a property value.
pub const PROPERTY_VERSION_KEY: &str = "PropertyVersion";

pub(crate) const CONTENT_TYPE_JSON: &str = "application/json";

/// MQTT quality-of-service level.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum QoS {
    AtMostOnce = 0,
    AtLeastOnce = 1,
    ExactlyOnce = 2,
}

impl QoS {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(QoS::AtMostOnce),
            1 => Some(QoS::AtLeastOnce),
            2 => Some(QoS::ExactlyOnce),
            _ => None,
        }
    }
}

/// A fully-populated MQTT 5 publish envelope, ready to hand to a transport.
///
/// The transport maps `user_properties` to MQTT 5 User Properties,
/// `correlation_id` to Correlation Data, `response_topic` to Response Topic
/// and `message_expiry_seconds` to the Message Expiry Interval. Values are
/// immutable once built; construct them through [`MessageBuilder`].
///
/// [`MessageBuilder`]: crate::MessageBuilder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub topic: String,
    pub payload: Vec<u8>,
    pub qos: QoS,
    pub retain: bool,
    pub content_type: Option<String>,
    pub message_expiry_seconds: Option<u32>,
    pub correlation_id: Option<String>,
    pub response_topic: Option<String>,
    pub user_properties: HashMap<String, String>,
}

impl Message {
    pub fn user_property(&self, key: &str) -> Option<&str> {
        self.user_properties.get(key).map(String::as_str)
    }
}
