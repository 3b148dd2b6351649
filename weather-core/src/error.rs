use thiserror::Error;

/// Why a provider payload could not be turned into domain values.
///
/// Transport failures never surface as their own variant: the fetch layer
/// hands the parser an empty body, which becomes [`ParseError::EmptyBody`].
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("empty response body")]
    EmptyBody,

    #[error("malformed JSON payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("required field `{0}` is missing")]
    MissingField(&'static str),

    #[error("field `{0}` has an unexpected type")]
    InvalidField(&'static str),
}

#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("favorites file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Empty names and names containing line breaks cannot be stored in a
    /// newline-delimited file without corrupting it.
    #[error("invalid city name {0:?}")]
    InvalidName(String),
}
