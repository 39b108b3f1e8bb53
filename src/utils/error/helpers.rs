//! Helper functions for creating specific error types

use super::types::ServiceError;

impl ServiceError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode(message.into())
    }

    pub fn sort_unit<S: Into<String>>(message: S) -> Self {
        Self::SortUnit(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }
}
