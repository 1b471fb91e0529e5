pub mod config;
pub mod constants;
pub mod error;
pub mod experiment;
pub mod film;
pub mod geometry;
pub mod interaction;
pub mod math;
pub mod operations;
pub mod scene;
pub mod simulation;

pub use config::ExperimentConfig;
pub use error::{Result, SoapFilmError};
pub use experiment::Experiment;
