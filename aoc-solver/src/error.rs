use thiserror::Error;

/// Raised while turning puzzle text into shared data.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    #[error("invalid input: {0}")]
    InvalidFormat(String),
    /// A section or value the puzzle needs is absent
    #[error("missing {0}")]
    MissingData(String),
}

impl ParseError {
    /// Shorthand for `map_err` on anything displayable.
    pub fn invalid(err: impl std::fmt::Display) -> Self {
        Self::InvalidFormat(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum SolveError {
    /// Inside `1..=PARTS` but the solver has no answer for it
    #[error("part {0} has no implementation")]
    PartNotImplemented(u8),
    #[error("part {0} is outside the solver's parts")]
    PartOutOfRange(u8),
    #[error("solving failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Everything that can go wrong between a year/day lookup and an answer.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("no solver registered for {0}/{1:02}")]
    NotFound(u16, u8),
    #[error("{0}/{1:02} is not a valid puzzle")]
    InvalidYearDay(u16, u8),
    #[error(transparent)]
    ParseError(#[from] ParseError),
    #[error(transparent)]
    SolveError(#[from] SolveError),
}

#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    #[error("{0}/{1:02} is registered twice")]
    DuplicateSolver(u16, u8),
    #[error("cannot register {0}/{1:02}: no such puzzle")]
    InvalidYearDay(u16, u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_errors_name_the_puzzle() {
        assert_eq!(
            SolverError::NotFound(2023, 5).to_string(),
            "no solver registered for 2023/05"
        );
        assert_eq!(
            RegistrationError::DuplicateSolver(2023, 12).to_string(),
            "2023/12 is registered twice"
        );
    }

    #[test]
    fn wrapped_errors_keep_their_message() {
        let err = SolverError::from(ParseError::MissingData("seeds".into()));
        assert_eq!(err.to_string(), "missing seeds");
    }
}
