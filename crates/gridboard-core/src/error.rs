//! Engine error taxonomy.
//!
//! No error here is fatal: the controller catches every one, logs it, and
//! degrades the offending event to a no-op. Only seed parsing surfaces an
//! error to the caller, at startup.

use thiserror::Error;

use crate::catalog::{CategoryId, WidgetId};

/// Errors produced by engine operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("category not found: {0}")]
    CategoryNotFound(CategoryId),
    #[error("widget not found: {0}")]
    WidgetNotFound(WidgetId),
    #[error("invalid transition: {0}")]
    InvalidTransition(&'static str),
    #[error("seed error: {0}")]
    Seed(#[from] serde_json::Error),
}

/// Result type for engine operations.
pub type DashboardResult<T> = Result<T, DashboardError>;
