//! Deferred units of work.
//!
//! This is the host side of task handling: a [`TaskContainer`] collects
//! registrations during wiring, and a [`TaskExecutor`] later runs a
//! [`TaskGraph`] built from it.

pub mod container;
pub mod executor;

pub use container::{Registration, Task, TaskAction, TaskContainer};
pub use executor::{ExecutionReport, TaskExecutor, TaskGraph, TaskOutcome, TaskReport};

use thiserror::Error;

/// Error building a task graph.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task `{name}` not found")]
    UnknownTask { name: String },

    #[error("task `{task}` depends on unknown task `{dependency}`")]
    UnknownDependency { task: String, dependency: String },

    #[error("dependency cycle detected involving task `{task}`")]
    Cycle { task: String },
}
