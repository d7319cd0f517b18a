//! Alert dispatcher port for delivering emergency alerts.
//!
//! Implementations send one alert to every listed contact. A returned
//! error means nothing was delivered and the alert may be retried.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::alert::{AlertRequest, DispatchReceipt};

#[async_trait]
pub trait AlertDispatcher: Send + Sync {
    async fn dispatch(&self, request: &AlertRequest) -> Result<DispatchReceipt, DispatchError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("alert delivery service unavailable: {0}")]
    Unavailable(String),

    #[error("alert rejected: {0}")]
    Rejected(String),
}
