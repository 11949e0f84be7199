use serde::Deserialize;

/// One page as returned by the user listing endpoint. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawPage {
    pub results: Vec<RawUser>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawUser {
    pub login: RawLogin,
    pub name: RawName,
    pub picture: RawPicture,
    pub location: RawLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawLogin {
    pub uuid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawName {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawPicture {
    pub medium: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawLocation {
    pub city: String,
    pub country: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid page body: {message}")]
    InvalidBody { message: String },
}

/// Parse a page body. A body without a `results` array is an error, an empty
/// array is not.
pub fn decode_page(bytes: &[u8]) -> Result<Vec<RawUser>, DecodeError> {
    serde_json::from_slice::<RawPage>(bytes)
        .map(|page| page.results)
        .map_err(|err| DecodeError::InvalidBody {
            message: err.to_string(),
        })
}
