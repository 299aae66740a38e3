//! Well-known field names of the AMQP 1.0 message `properties` and `header` sections.

/// Field names of the immutable `properties` section of an AMQP message.
pub const MESSAGE_PROPERTIES: [&str; 13] = [
    "message_id",
    "reply_to",
    "to",
    "correlation_id",
    "content_type",
    "absolute_expiry_time",
    "group_id",
    "group_sequence",
    "reply_to_group_id",
    "content_encoding",
    "creation_time",
    "subject",
    "user_id",
];

/// Field names of the `header` section of an AMQP message.
pub const MESSAGE_HEADER: [&str; 5] = [
    "first_acquirer",
    "delivery_count",
    "ttl",
    "durable",
    "priority",
];

/// Whether `name` is one of the [`MESSAGE_PROPERTIES`].
pub fn is_message_property(name: &str) -> bool {
    MESSAGE_PROPERTIES.contains(&name)
}

/// Whether `name` is one of the [`MESSAGE_HEADER`] fields.
pub fn is_message_header(name: &str) -> bool {
    MESSAGE_HEADER.contains(&name)
}
