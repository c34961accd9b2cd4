use thiserror::Error;

/// Rejections produced by the pure validators in [`crate::validation`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid input. This field cannot be empty. Please try again.")]
    Empty,

    #[error("Invalid email format. Please enter a valid email.")]
    InvalidEmail,

    #[error("Invalid phone number. Please enter a 10-digit numeric phone number.")]
    InvalidPhone,

    #[error("Invalid ID, please enter a numeric ID.")]
    InvalidId,
}
