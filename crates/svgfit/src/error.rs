pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed input: {message}")]
    MalformedInput { message: String },

    #[error("document yielded zero sample points; refusing to derive a transform")]
    EmptyGeometry,
}

impl Error {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }
}
