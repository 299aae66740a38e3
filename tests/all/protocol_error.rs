use amqp_connection_core::amqp::protocol_error::{classify, AmqpErrorRecord};
use amqp_connection_core::amqp::{is_protocol_error, ErrorShape};
use amqp_connection_core::Error;
use lapin::protocol::{AMQPError, AMQPHardError};
use serde_json::json;

#[test]
fn recognised_shapes() {
    let cases = [
        (
            json!({ "condition": "amqp:not-found", "description": "x" }),
            Some(ErrorShape::ConditionDescription),
        ),
        (json!({ "value": [1, 2, 3] }), Some(ErrorShape::ValueArray)),
        (
            json!({ "condition": "amqp:link:detach-forced", "value": ["amqp:link:detach-forced"] }),
            Some(ErrorShape::ValueArray),
        ),
        (
            json!({ "condition": "amqp:link:stolen", "value": "link stolen" }),
            Some(ErrorShape::DescribedRecord),
        ),
        (json!({}), None),
    ];
    for (candidate, expected) in cases {
        assert_eq!(classify(&candidate).unwrap(), expected, "{candidate}");
        assert_eq!(is_protocol_error(&candidate).unwrap(), expected.is_some());
    }
}

#[test]
fn null_is_an_invalid_argument() {
    let outcome = is_protocol_error(&serde_json::Value::Null);
    assert!(matches!(outcome, Err(Error::InvalidArgument(_))));
}

#[test]
fn structured_records_carry_extra_information() {
    let candidate = json!({
        "condition": "com.microsoft:server-busy",
        "description": "The server is busy.",
        "info": { "retry-after": 5 },
    });

    let record = AmqpErrorRecord::from_candidate(&candidate).unwrap();

    assert_eq!(record.condition, "com.microsoft:server-busy");
    assert_eq!(record.info.unwrap()["retry-after"], json!(5));
}

#[test]
fn connection_level_protocol_errors_keep_their_reply_code() {
    let error = AMQPError::new(AMQPHardError::NOTALLOWED.into(), "vhost not allowed".into());

    let record = AmqpErrorRecord::from(&error);

    assert_eq!(record.condition, "amqp:hard:notallowed");
    assert_eq!(record.info.as_ref().unwrap()["reply-code"], json!(530));
    assert!(is_protocol_error(&record.to_value()).unwrap());
}
