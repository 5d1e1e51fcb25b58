use std::fmt;

#[derive(Debug)]
pub enum ListingError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidRecords(String),
    UnknownKind(String),
}

impl fmt::Display for ListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingError::Io(e) => write!(f, "IO error: {}", e),
            ListingError::Json(e) => write!(f, "JSON parsing error: {}", e),
            ListingError::InvalidRecords(e) => write!(f, "Invalid record list: {}", e),
            ListingError::UnknownKind(e) => write!(f, "Unknown list kind: {}", e),
        }
    }
}

impl std::error::Error for ListingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListingError::Io(e) => Some(e),
            ListingError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ListingError {
    fn from(err: serde_json::Error) -> Self {
        ListingError::Json(err)
    }
}

impl From<std::io::Error> for ListingError {
    fn from(err: std::io::Error) -> Self {
        ListingError::Io(err)
    }
}
