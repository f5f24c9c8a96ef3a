use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("{kind}")]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error { kind }
    }

    /// Return the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::new(kind)
    }
}

/// The kind of an error that can occur.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Some, but not all, of the four fields needed to seed a filter were given.
    #[error("All Filter fields are required. Missing: {}.", .missing.join(", "))]
    PartialSeed { missing: Vec<&'static str> },

    #[error("Filter has no where clause.")]
    EmptyFilter,

    /// The number of conjunctions is not one less than the number of clauses.
    #[error("Filter has {clauses} clause(s) but {conjunctions} conjunction(s).")]
    ConjunctionMismatch { clauses: usize, conjunctions: usize },

    #[error("{0}")]
    InvalidProperties(String),

    #[error("{0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::new(ErrorKind::PartialSeed {
            missing: vec!["comparator", "value"],
        });
        assert_eq!(
            err.to_string(),
            "All Filter fields are required. Missing: comparator, value."
        );
        let err = Error::from(ErrorKind::ConjunctionMismatch {
            clauses: 3,
            conjunctions: 1,
        });
        assert_eq!(
            err.to_string(),
            "Filter has 3 clause(s) but 1 conjunction(s)."
        );
        assert_eq!(
            err.kind(),
            &ErrorKind::ConjunctionMismatch {
                clauses: 3,
                conjunctions: 1
            }
        );
    }
}
