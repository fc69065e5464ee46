use thiserror::Error;

/// Errors raised while preparing a timetable run or decoding its solution.
///
/// An unsatisfiable or timed-out solve is not an error; it is reported as a
/// [`crate::solver::SolveOutcome::NoSolution`] value.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Invalid counts or empty catalogs in the configuration.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// An eligibility sample was requested that is larger than its pool.
    #[error("{kind} pool exhausted: requested {requested} candidates from a pool of {available}")]
    PoolExhausted {
        kind: &'static str,
        requested: usize,
        available: usize,
    },

    /// The engine reported a satisfying assignment that violates the model's
    /// exactly-one contract. Indicates a defect, never a valid outcome.
    #[error("inconsistent solution: {0}")]
    InconsistentSolution(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_part() {
        let error = ScheduleError::PoolExhausted {
            kind: "room",
            requested: 3,
            available: 2,
        };
        assert_eq!(
            error.to_string(),
            "room pool exhausted: requested 3 candidates from a pool of 2"
        );

        let error = ScheduleError::Configuration("slotsPerDay must be at least 1".to_owned());
        assert!(error.to_string().starts_with("invalid configuration:"));
    }
}
