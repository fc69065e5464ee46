use crate::catalog;
use crate::config::TimetableConfig;
use crate::data::Timetable;
use crate::decode;
use crate::error::ScheduleError;
use crate::model;
use crate::pools;
use good_lp::{
    Constraint, ProblemVariables, ResolutionError, Solution, SolverModel, default_solver,
};
use log::info;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::fmt;
use std::time::Instant;

/// Terminal outcome of a run. Failing to find a timetable is a normal,
/// expected outcome, not an error.
#[derive(Debug)]
pub enum SolveOutcome {
    Solved(Timetable),
    NoSolution(NoSolutionReason),
}

/// Why no timetable was produced. The engine cannot always separate "proved
/// unsatisfiable" from "gave up within the time budget"; where it can, the
/// distinction is preserved here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoSolutionReason {
    /// The constraints were proved unsatisfiable.
    Infeasible,
    /// The engine stopped without a verdict (time limit or internal failure).
    Unsolved(String),
}

impl fmt::Display for NoSolutionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoSolutionReason::Infeasible => write!(f, "the constraints are unsatisfiable"),
            NoSolutionReason::Unsolved(message) => {
                write!(f, "the engine stopped without a solution: {message}")
            }
        }
    }
}

/// Runs the whole pipeline: catalog expansion, eligibility sampling, model
/// construction, the external solve, and solution decoding.
pub fn generate_timetable(config: &TimetableConfig) -> Result<SolveOutcome, ScheduleError> {
    config.validate()?;
    let catalog = catalog::expand(config)?;

    // one seeding per run; pool generation consumes the stream in a fixed order
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let pools = pools::generate(config, &catalog, &mut rng)?;

    let model = model::build(config, &catalog, &pools);
    let variables = model.variables;

    info!(
        "Starting solver with a time limit of {}s...",
        config.time_limit_seconds
    );
    let start_time = Instant::now();
    match run_engine(model.problem, model.constraints, config) {
        Ok(solution) => {
            info!("Solution found in {:.2?}", start_time.elapsed());
            let assignments =
                decode::decode_assignments(&variables, &catalog, &pools, |var| {
                    solution.value(var)
                })?;
            let divisions = decode::build_grids(config, &catalog, &assignments)?;
            Ok(SolveOutcome::Solved(Timetable {
                assignments,
                divisions,
            }))
        }
        Err(ResolutionError::Infeasible) => {
            info!("Proved infeasible in {:.2?}", start_time.elapsed());
            Ok(SolveOutcome::NoSolution(NoSolutionReason::Infeasible))
        }
        Err(other) => {
            info!("Solver gave up after {:.2?}: {other}", start_time.elapsed());
            Ok(SolveOutcome::NoSolution(NoSolutionReason::Unsolved(
                other.to_string(),
            )))
        }
    }
}

// The solving-engine boundary: a constant objective (feasibility only), a
// wall-clock budget, and reproducibility options. Everything past this call
// is HiGHS.
fn run_engine(
    problem: ProblemVariables,
    constraints: Vec<Constraint>,
    config: &TimetableConfig,
) -> Result<impl Solution, ResolutionError> {
    let mut engine = problem
        .minimise(0.0)
        .using(default_solver)
        .set_option("threads", 1) // limit to 1 thread for reproducibility
        .set_option("random_seed", engine_seed(config.seed))
        .set_option("log_to_console", "false")
        .set_option("time_limit", config.time_limit_seconds);
    for constraint in constraints {
        engine.add_constraint(constraint);
    }
    engine.solve()
}

// HiGHS takes a 32-bit seed; fold the 64-bit run seed into range instead of
// truncating, so distinct large seeds keep distinct engine seeds.
fn engine_seed(seed: u64) -> i32 {
    (seed % i32::MAX as u64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_seed_stays_in_range_without_truncation() {
        assert_eq!(engine_seed(42), 42);
        let high = engine_seed(u64::MAX);
        let next = engine_seed(u64::MAX - 1);
        assert!(high >= 0);
        assert!(next >= 0);
        // neighbouring seeds never collapse onto one engine seed
        assert_ne!(high, next);
    }
}
