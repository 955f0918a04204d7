//! Typed errors for the session store and query submission

use thiserror::Error;

use crate::types::QueryStatus;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no query with id {0}")]
    QueryNotFound(String),

    #[error("query {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: QueryStatus,
        to: QueryStatus,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("query text is empty")]
    EmptyQuery,
}
