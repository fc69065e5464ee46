//! Weekly class timetable generation for multiple academic divisions.
//!
//! The pipeline runs strictly forward: the catalog is expanded into class
//! instances, bounded eligibility pools are sampled from a seeded random
//! source, the assignment problem is encoded as a binary feasibility model,
//! an external ILP engine (HiGHS) searches for a satisfying assignment, and
//! the solution is decoded into one weekly grid per division.

pub mod catalog;
pub mod config;
pub mod data;
pub mod decode;
pub mod error;
pub mod model;
pub mod pools;
pub mod render;
pub mod server;
pub mod solver;
