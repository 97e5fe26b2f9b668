use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlmagestError {
    #[error("Latitude out of range [-90, 90]: {0}")]
    InvalidLatitude(f64),

    #[error("Longitude out of range [-180, 180]: {0}")]
    InvalidLongitude(f64),

    #[error("UTC offset out of range [-14, 14] hours: {0}")]
    InvalidUtcOffset(f64),

    #[error("Invalid civil date: {0}")]
    InvalidDate(#[from] hifitime::HifitimeError),

    #[error("Unknown body: {0}")]
    UnknownBody(String),

    #[error("Invalid chart configuration: {0}")]
    InvalidConfig(String),
}

impl From<toml::de::Error> for AlmagestError {
    fn from(err: toml::de::Error) -> Self {
        AlmagestError::InvalidConfig(err.to_string())
    }
}

impl PartialEq for AlmagestError {
    fn eq(&self, other: &Self) -> bool {
        use AlmagestError::*;
        match (self, other) {
            (InvalidLatitude(a), InvalidLatitude(b)) => a == b,
            (InvalidLongitude(a), InvalidLongitude(b)) => a == b,
            (InvalidUtcOffset(a), InvalidUtcOffset(b)) => a == b,

            // hifitime errors are compared by variant only
            (InvalidDate(_), InvalidDate(_)) => true,

            (UnknownBody(a), UnknownBody(b)) => a == b,
            (InvalidConfig(a), InvalidConfig(b)) => a == b,

            _ => false,
        }
    }
}
