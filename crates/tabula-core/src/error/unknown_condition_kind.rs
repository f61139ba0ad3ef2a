use super::Error;

/// Error when a condition kind code matches no known kind.
#[derive(Debug)]
pub(super) struct UnknownConditionKindError {
    code: u8,
}

impl std::error::Error for UnknownConditionKindError {}

impl core::fmt::Display for UnknownConditionKindError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown condition kind: {}", self.code)
    }
}

impl Error {
    /// Creates an unknown condition kind error.
    pub fn unknown_condition_kind(code: u8) -> Error {
        Error::from(super::ErrorKind::UnknownConditionKind(
            UnknownConditionKindError { code },
        ))
    }

    /// Returns `true` if this error is an unknown condition kind error.
    pub fn is_unknown_condition_kind(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::UnknownConditionKind(_))
    }
}
