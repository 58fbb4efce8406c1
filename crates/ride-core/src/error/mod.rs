use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid user role: {value} {location}")]
    InvalidUserRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid trip status: {value} {location}")]
    InvalidTripStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid booking status: {value} {location}")]
    InvalidBookingStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Driver record {id} is missing license or vehicle data {location}")]
    IncompleteDriverRecord { id: Uuid, location: ErrorLocation },
}

pub type Result<T> = StdResult<T, CoreError>;
