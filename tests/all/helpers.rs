use fake::faker::lorem::en::Word;
use fake::Fake;

/// A connection string for a namespace with a randomly generated shared access key.
pub fn get_connection_string(host: &str) -> (String, String) {
    let key: String = Word().fake();
    let connection_string =
        format!("Endpoint=sb://{host}/;SharedAccessKeyName=RootManageSharedAccessKey;SharedAccessKey={key}");
    (connection_string, key)
}
