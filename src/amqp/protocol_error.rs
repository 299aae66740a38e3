//! Structural recognition of AMQP protocol errors.
//!
//! Errors reach the application in different representations: a `condition`/`description`
//! pair, an encoded error frame carrying its fields in a `value` array, or the protocol
//! library's own described error record. [`classify`] tells them apart by looking at the fields
//! they carry, never at the name of the type that produced them.
use crate::error::Error;
use lapin::protocol::{AMQPError, AMQPErrorKind};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// The representation an AMQP error was recognised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorShape {
    /// A `condition` string together with a `description` string.
    ConditionDescription,
    /// An encoded error frame: the fields are carried, in order, in a `value` array.
    ValueArray,
    /// A described error record, as produced by the protocol library: a `condition` string
    /// together with a non-null `value`.
    DescribedRecord,
}

/// Determine which AMQP error representation `candidate` matches, if any.
///
/// Returns `Ok(None)` for a well-formed candidate that is not an AMQP error.
/// `null` and scalar candidates are rejected with [`Error::InvalidArgument`]; arrays are
/// accepted but never match, since they carry no named fields.
pub fn classify(candidate: &Value) -> Result<Option<ErrorShape>, Error> {
    let fields = match candidate {
        Value::Object(fields) => fields,
        Value::Array(_) => return Ok(None),
        Value::Null => {
            return Err(Error::invalid_argument(
                "'candidate' is a required parameter and must not be null.",
            ));
        }
        _ => {
            return Err(Error::invalid_argument(
                "'candidate' must be of type 'object'.",
            ));
        }
    };

    let condition = fields.get("condition").and_then(Value::as_str);
    let value = fields.get("value").filter(|v| !v.is_null());

    let has_description = fields.get("description").is_some_and(Value::is_string);

    let shape = if condition.is_some() && has_description {
        Some(ErrorShape::ConditionDescription)
    } else if value.is_some_and(Value::is_array) {
        Some(ErrorShape::ValueArray)
    } else if condition.is_some() && value.is_some() {
        Some(ErrorShape::DescribedRecord)
    } else {
        None
    };
    Ok(shape)
}

/// Check whether `candidate` looks like an AMQP protocol error.
///
/// ```rust
/// use amqp_connection_core::amqp::protocol_error::is_protocol_error;
/// use serde_json::json;
///
/// let error = json!({ "condition": "amqp:not-found", "description": "x" });
/// assert!(is_protocol_error(&error).unwrap());
/// assert!(!is_protocol_error(&json!({})).unwrap());
/// assert!(is_protocol_error(&json!(null)).is_err());
/// ```
pub fn is_protocol_error(candidate: &Value) -> Result<bool, Error> {
    classify(candidate).map(|shape| shape.is_some())
}

/// An AMQP error in its structured `condition`/`description` form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmqpErrorRecord {
    /// A symbolic error condition, e.g. `amqp:not-found`.
    pub condition: String,
    /// A human readable description of the error.
    pub description: String,
    /// Additional, condition specific, information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<Map<String, Value>>,
}

impl AmqpErrorRecord {
    /// Extract a record from a candidate with the [`ErrorShape::ConditionDescription`] shape.
    ///
    /// An `info` field that is not an object is dropped. Returns `None` for any other candidate.
    pub fn from_candidate(candidate: &Value) -> Option<Self> {
        if !matches!(classify(candidate), Ok(Some(ErrorShape::ConditionDescription))) {
            return None;
        }
        let fields = candidate.as_object()?;
        Some(Self {
            condition: fields.get("condition")?.as_str()?.to_owned(),
            description: fields.get("description")?.as_str()?.to_owned(),
            info: fields.get("info").and_then(Value::as_object).cloned(),
        })
    }

    pub fn to_value(&self) -> Value {
        let mut value = json!({
            "condition": self.condition,
            "description": self.description,
        });
        if let (Some(info), Value::Object(fields)) = (&self.info, &mut value) {
            fields.insert("info".into(), Value::Object(info.clone()));
        }
        value
    }
}

impl From<&AMQPError> for AmqpErrorRecord {
    fn from(error: &AMQPError) -> Self {
        let condition = match error.kind() {
            AMQPErrorKind::Soft(kind) => format!("amqp:soft:{kind:?}"),
            AMQPErrorKind::Hard(kind) => format!("amqp:hard:{kind:?}"),
        };
        // AMQP 0-9-1 reply codes only partially overlap with the HTTP-style status codes.
        let mut info = Map::new();
        info.insert("reply-code".into(), json!(error.get_id()));
        Self {
            condition: condition.to_lowercase(),
            description: error.get_message().as_str().to_owned(),
            info: Some(info),
        }
    }
}
