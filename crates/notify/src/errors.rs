use thiserror::Error;

/// Errors surfaced by a notification send.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The request could not be delivered to the notification server.
    #[error("Notification request failed: {0}")]
    Network(String),

    /// The notification server answered with a non-success status.
    #[error("Notification rejected: HTTP {status} - {body}")]
    Status { status: u16, body: String },

    /// A header could not be encoded.
    #[error("Invalid notification header: {0}")]
    InvalidHeader(String),
}
