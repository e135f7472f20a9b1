use thiserror::Error;

/// Errors raised while translating a single AIS message.
///
/// Every variant concerns one message only; callers are expected to log it,
/// drop the message and carry on with the next one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("message has no 'id' field")]
    MissingMessageType,

    #[error("code {code} is not a valid {table}")]
    EnumerationLookup { table: &'static str, code: i64 },

    #[error("field '{field}' must be {expected}")]
    InvalidFieldType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("field '{field}' is required but missing")]
    MissingField { field: &'static str },
}

pub type Result<T> = std::result::Result<T, TranslateError>;
