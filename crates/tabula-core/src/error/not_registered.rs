use super::Error;

/// Error when binding an instance of a type that was never registered.
#[derive(Debug)]
pub(super) struct NotRegisteredError {
    type_name: &'static str,
}

impl std::error::Error for NotRegisteredError {}

impl core::fmt::Display for NotRegisteredError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "model not registered: {}", self.type_name)
    }
}

impl Error {
    /// Creates a not registered error for the given type name.
    pub fn not_registered(type_name: &'static str) -> Error {
        Error::from(super::ErrorKind::NotRegistered(NotRegisteredError {
            type_name,
        }))
    }

    /// Returns `true` if this error is a not registered error.
    pub fn is_not_registered(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::NotRegistered(_))
    }
}
