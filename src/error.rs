use thiserror::Error;

/// Outcome of a failed demo run
///
/// Setup failures come from the symbolic stage (the formula could not be parsed or is not a
/// polynomial in x and y). Evaluation failures come from the numeric stage or from rendering.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DemoError {
    #[error("setup failed: {0}")]
    Setup(String),

    #[error("evaluation failed: {0}")]
    Evaluation(String),
}

impl DemoError {
    /// Returns true if the error happened before any point was evaluated
    pub fn is_setup(&self) -> bool {
        matches!(self, DemoError::Setup(_))
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_works() {
        let err = DemoError::Setup("unexpected end of formula".to_string());
        assert_eq!(format!("{}", err), "setup failed: unexpected end of formula");
        assert!(err.is_setup());
        let err = DemoError::Evaluation("x0 is not finite".to_string());
        assert_eq!(format!("{}", err), "evaluation failed: x0 is not finite");
        assert!(!err.is_setup());
    }
}
