//! Error types for the serverless event adapter.
//!
//! Route dispatch itself cannot fail; only decoding an incoming event and
//! encoding the response envelope can.

use std::fmt;

#[derive(Debug)]
pub enum EventError {
    /// The event payload was not a valid API gateway event.
    InvalidEvent(String),

    /// The response envelope could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventError::InvalidEvent(msg) => write!(f, "invalid event: {msg}"),
            EventError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for EventError {}
