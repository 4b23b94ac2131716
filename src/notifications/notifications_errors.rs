use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Failed to deliver message: {0}")]
    Delivery(String),

    #[error("Invalid notification data: {0}")]
    InvalidData(String),
}
