use thiserror::Error;

/// Decoding errors
///
/// Latin-1 accepts every byte value, so with the current encoding list this
/// never fires; it exists to keep extending the list safe.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("content is not valid in any supported encoding")]
    UnsupportedEncoding,
}

/// Glob-pattern compilation errors
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("invalid glob pattern `{pattern}`: {message}")]
    Invalid { pattern: String, message: String },

    #[error("glob pattern produced an invalid expression: {0}")]
    Regex(#[from] regex::Error),
}
