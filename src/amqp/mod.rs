//! Helpers for configuring AMQP connections and handling AMQP errors.

pub mod configuration;
pub mod connection_string;
pub mod properties;
pub mod protocol_error;
mod status_code;

pub use connection_string::{parse_connection_string, ParseOptions, ParsedConfiguration};
pub use protocol_error::{is_protocol_error, ErrorShape};
pub use status_code::AmqpResponseStatusCode;
