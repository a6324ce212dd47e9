//! Error types for the pricing and hedging core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HedgeError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Expired contract: {0}")]
    ExpiredContract(String),

    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Numerical error: {0}")]
    Numerical(String),

    #[error("Data error: {0}")]
    Data(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type HedgeResult<T> = Result<T, HedgeError>;

impl HedgeError {
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    pub fn expired_contract(msg: impl Into<String>) -> Self {
        Self::ExpiredContract(msg.into())
    }

    pub fn data_unavailable(msg: impl Into<String>) -> Self {
        Self::DataUnavailable(msg.into())
    }

    pub fn numerical(msg: impl Into<String>) -> Self {
        Self::Numerical(msg.into())
    }

    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }
}
