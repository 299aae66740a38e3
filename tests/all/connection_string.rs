use amqp_connection_core::amqp::{parse_connection_string, ParseOptions, ParsedConfiguration};
use amqp_connection_core::Error;
use serde::Deserialize;

#[test]
fn parsing_a_namespace_connection_string_works() {
    // Arrange
    let (connection_string, key) = crate::helpers::get_connection_string("test.windows.net");

    // Act
    let parsed = parse_connection_string(connection_string.as_str(), None).unwrap();

    // Assert
    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed.get("Endpoint"), Some("sb://test.windows.net/"));
    assert_eq!(parsed.get("SharedAccessKeyName"), Some("RootManageSharedAccessKey"));
    assert_eq!(parsed.get("SharedAccessKey"), Some(key.as_str()));
}

#[test]
fn base64_padding_in_values_is_preserved() {
    let parsed: ParsedConfiguration = "SharedAccessKey=abc+def/ghi==;EntityPath=q".parse().unwrap();
    assert_eq!(parsed.get("SharedAccessKey"), Some("abc+def/ghi=="));
    assert_eq!(parsed.get("EntityPath"), Some("q"));
}

#[test]
fn options_can_be_deserialized() {
    let options: ParseOptions =
        serde_json::from_str(r#"{ "entitySeparator": "&", "keyValueSeparator": ":" }"#).unwrap();

    let parsed = parse_connection_string("a:1&b:2", Some(&options)).unwrap();

    assert_eq!(parsed.get("a"), Some("1"));
    assert_eq!(parsed.get("b"), Some("2"));
    assert_eq!(parsed.to_connection_string(&options), "a:1&b:2");
}

#[test]
fn parsed_configuration_serializes_as_a_flat_map() {
    let parsed = parse_connection_string("A=B", None).unwrap();
    assert_eq!(serde_json::to_value(&parsed).unwrap(), serde_json::json!({ "A": "B" }));
}

#[test]
fn schema_validation_is_a_separate_step() {
    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "PascalCase", deny_unknown_fields)]
    struct Strict {
        #[allow(dead_code)]
        endpoint: String,
    }

    // Parsing never fails on unexpected keys...
    let parsed = parse_connection_string("Endpoint=sb://a/;Unexpected=1", None).unwrap();

    // ...validating against a strict schema does.
    let outcome = parsed.deserialize_into::<Strict>();
    assert!(matches!(outcome, Err(Error::Configuration(_))));
}

#[test]
fn missing_input_is_reported_as_an_invalid_argument() {
    let outcome = parse_connection_string(None::<&str>, Some(&ParseOptions::default()));
    assert!(matches!(outcome, Err(Error::InvalidArgument(_))));
}
