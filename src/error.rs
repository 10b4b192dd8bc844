use std::{error::Error as StdError, fmt, io};

/// Failure while talking to or decoding an upstream paper API. The two
/// variants get different treatment downstream: a network failure degrades
/// the day's card, a decode failure aborts the run.
#[derive(Debug)]
pub enum FetchError {
    Network(String),
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {}", msg),
            FetchError::Decode(msg) => write!(f, "decode error: {}", msg),
        }
    }
}

impl StdError for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Network(e.to_string())
    }
}

impl From<quick_xml::DeError> for FetchError {
    fn from(e: quick_xml::DeError) -> Self {
        FetchError::Decode(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

/// Failure while reading or writing the card file.
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "card file io error: {}", e),
            StoreError::Json(e) => write!(f, "card file is not valid card JSON: {}", e),
        }
    }
}

impl StdError for StoreError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}
