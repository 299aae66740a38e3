mod connection_string;
mod helpers;
mod protocol_error;
