//! Weekly shift-leader rostering via genetic-algorithm search.
//!
//! Assigns people to time-boxed shifts across a week, subject to
//! per-person availability windows and per-shift requirements (slot
//! counts, car for driving shifts). The search is evolutionary, not
//! exact: there is no optimality or even feasibility guarantee, only
//! convergence pressure toward high-fitness schedules over a fixed
//! generation budget.
//!
//! # Modules
//!
//! - **`models`**: domain types — `Shift`, `Person`, `Roster`, `Weekday`,
//!   `TimeWindow`
//! - **`validation`**: load-time integrity checks (duplicate names,
//!   zero-slot shifts, inverted windows)
//! - **`constraints`**: hard/soft constraint predicates and fitness
//! - **`ga`**: genome encoding, genetic operators, evolution runner
//! - **`report`**: weekly plain-text schedule rendering
//!
//! # Example
//!
//! ```
//! use rota_ga::ga::{EvolutionConfig, EvolutionRunner, RosterProblem};
//! use rota_ga::models::{Person, Roster, Shift, Weekday};
//! use rota_ga::validation::validate_input;
//!
//! let shifts = vec![
//!     Shift::new("Bar", Weekday::Monday, 9.0, 4.0),
//!     Shift::new("Supply run", Weekday::Monday, 9.0, 4.0).with_kind(3),
//! ];
//! let people = vec![
//!     Person::new("Alice").with_window(Weekday::Monday, 8.0, 17.0),
//!     Person::new("Bob").with_window(Weekday::Monday, 8.0, 17.0).with_car(),
//! ];
//! validate_input(&shifts, &people).expect("structurally sound input");
//!
//! let problem = RosterProblem::new(shifts, Roster::new(people));
//! let config = EvolutionConfig::default()
//!     .with_population_size(20)
//!     .with_generation_limit(5)
//!     .with_seed(42);
//! let outcome = EvolutionRunner::run(&problem, &config).unwrap();
//!
//! println!("{}", rota_ga::report::render(problem.shifts(), &outcome.best));
//! println!("fitness: {} ({:.0}%)", outcome.best_fitness, outcome.normalized() * 100.0);
//! ```

pub mod constraints;
mod error;
pub mod ga;
pub mod models;
pub mod report;
pub mod validation;

pub use error::EvolutionError;
