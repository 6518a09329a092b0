pub mod builder;
pub mod error;
pub mod message;
pub mod return_code;

pub use builder::MessageBuilder;
pub use error::{Error, Result};
pub use message::{Message, QoS, DEBUG_INFO_KEY, PROPERTY_VERSION_KEY, RETURN_CODE_KEY};
pub use return_code::{MethodError, MethodReturnCode};
