use super::Error;

/// Error when a condition node's payload does not fit its kind.
#[derive(Debug)]
pub(super) struct MalformedConditionError {
    message: Box<str>,
}

impl std::error::Error for MalformedConditionError {}

impl core::fmt::Display for MalformedConditionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "malformed condition: {}", self.message)
    }
}

impl Error {
    /// Creates a malformed condition error.
    pub fn malformed_condition(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MalformedCondition(
            MalformedConditionError {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a malformed condition error.
    pub fn is_malformed_condition(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::MalformedCondition(_))
    }
}
