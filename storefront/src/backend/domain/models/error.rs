//! Errors raised by order configuration and message formatting.

/// Domain errors for the order configurator and message composer.
///
/// Out-of-range quantities are not errors: they are ignored and the last
/// valid quantity stays in place.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("Unknown size '{0}'")]
    InvalidSize(String),
    #[error("Unknown add-on '{0}'")]
    UnknownAddOn(String),
    #[error("Order is missing required field '{0}'")]
    IncompleteOrder(&'static str),
}
