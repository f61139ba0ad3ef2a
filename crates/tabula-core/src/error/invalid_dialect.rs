use super::Error;

/// Error when a dialect identifier does not name a supported SQL flavor.
#[derive(Debug)]
pub(super) struct InvalidDialectError {
    name: Box<str>,
}

impl std::error::Error for InvalidDialectError {}

impl core::fmt::Display for InvalidDialectError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported SQL dialect: `{}`", self.name)
    }
}

impl Error {
    /// Creates an error for an unknown dialect identifier.
    pub fn invalid_dialect(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidDialect(InvalidDialectError {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid dialect error.
    pub fn is_invalid_dialect(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::InvalidDialect(_))
    }
}
