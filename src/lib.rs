//! `amqp-connection-core` holds the building blocks an AMQP client needs before it opens a
//! connection and after a broker reports a failure.
//!
//! - [`parse_connection_string`](crate::amqp::parse_connection_string) turns a
//!   `key=value;key=value` string into a [`ParsedConfiguration`](crate::amqp::ParsedConfiguration),
//!   and [`ConnectionConfig`](crate::amqp::configuration::ConnectionConfig) validates it into
//!   the parameters required to connect.
//! - [`is_protocol_error`](crate::amqp::is_protocol_error) tells whether an arbitrary error
//!   value has the shape of an AMQP error, without relying on the type that produced it.
//!
//! [`AmqpResponseStatusCode`](crate::amqp::AmqpResponseStatusCode) and the
//! [`properties`](crate::amqp::properties) tables are the constants shared with the rest of
//! the client.

pub mod amqp;
mod error;
pub mod util;

pub use error::Error;
