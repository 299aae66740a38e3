/// The error type returned by the parsing, classification and configuration helpers.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required input was missing or did not have the expected shape.
    ///
    /// This signals a programming error on the caller's side: it is never used to report that
    /// a well-formed input simply did not match (e.g. a value that is not an AMQP error).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A parsed connection string could not be turned into a valid configuration.
    #[error(transparent)]
    Configuration(#[from] anyhow::Error),
}

impl Error {
    pub(crate) fn invalid_argument<T: Into<String>>(message: T) -> Self {
        Self::InvalidArgument(message.into())
    }
}
