// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use thiserror::Error;

/// Error taxonomy at the remote-service boundary.
///
/// None of these are fatal to the console: a fetch failure leaves the last
/// good page in place, a command failure leaves all local state unchanged,
/// and the operator retries by re-triggering the operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog fetch failed: {0}")]
    Fetch(String),
    #[error("malformed catalog response: {0}")]
    Decode(String),
    #[error("command failed: {0}")]
    Command(String),
}

impl CatalogError {
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    pub fn command(message: impl Into<String>) -> Self {
        Self::Command(message.into())
    }
}
