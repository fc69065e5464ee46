use timetable_solver::config::TimetableConfig;
use timetable_solver::render;
use timetable_solver::server;
use timetable_solver::solver::{self, SolveOutcome};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // with no arguments, expose the solver over HTTP; otherwise solve the
    // given JSON config ("demo" for the built-in one) and print the grids
    match std::env::args().nth(1) {
        None => server::run_server().await,
        Some(arg) => run_once(&arg),
    }
}

fn run_once(arg: &str) {
    let config = if arg == "demo" {
        TimetableConfig::demo()
    } else {
        match TimetableConfig::from_json_file(arg) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
    };

    match solver::generate_timetable(&config) {
        Ok(SolveOutcome::Solved(timetable)) => {
            print!("{}", render::render_all(&config.days, &timetable.divisions));
        }
        Ok(SolveOutcome::NoSolution(reason)) => {
            println!("No solution found: {reason}");
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
