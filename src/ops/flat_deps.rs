//! `flatdeps run` - wire a project and execute its flatdeps tasks.

use anyhow::{bail, Result};

use crate::core::naming::AGGREGATE_TASK;
use crate::core::HostProject;
use crate::ops::wire::{wire, WireOptions, WireSummary};
use crate::tasks::{ExecutionReport, TaskContainer, TaskError, TaskExecutor, TaskGraph, TaskReport};

/// Options for a flatdeps run.
#[derive(Debug, Clone, Default)]
pub struct FlatDepsOptions {
    /// Tasks to run; empty means the aggregate task
    pub tasks: Vec<String>,

    /// Maximum number of tasks running at once
    pub jobs: Option<usize>,

    pub wire: WireOptions,
}

/// Outcome of a flatdeps run.
#[derive(Debug)]
pub struct FlatDepsResult {
    pub summary: WireSummary,
    pub report: ExecutionReport,
}

/// Register a project's tasks into a fresh container.
pub fn wire_project(
    project: &dyn HostProject,
    opts: &WireOptions,
) -> Result<(TaskContainer, WireSummary)> {
    let mut tasks = TaskContainer::new();
    let summary = wire(project, &mut tasks, opts)?;
    Ok((tasks, summary))
}

/// Wire the project and run the requested tasks.
///
/// `on_start` receives the number of tasks about to run; `on_finish` is
/// called once per task, possibly from several threads at once.
///
/// Task failures do not make this return an error; they are reported in
/// the [`ExecutionReport`]. Errors are reserved for requests that cannot be
/// scheduled at all.
pub fn flat_deps<S, F>(
    project: &dyn HostProject,
    opts: &FlatDepsOptions,
    on_start: S,
    on_finish: F,
) -> Result<FlatDepsResult>
where
    S: FnOnce(usize),
    F: Fn(&TaskReport) + Sync,
{
    let (tasks, summary) = wire_project(project, &opts.wire)?;

    if !summary.has_aggregate() {
        bail!(
            "project has no variant API; no flatdeps tasks were registered\n\
             help: declare variants under [components] or [legacy] in the build model"
        );
    }

    let requested = if opts.tasks.is_empty() {
        vec![AGGREGATE_TASK.to_string()]
    } else {
        opts.tasks.clone()
    };

    let graph = TaskGraph::for_tasks(&tasks, &requested).map_err(|e| match e {
        TaskError::UnknownTask { name } => {
            let available: Vec<&str> = tasks.iter().map(|t| t.name()).collect();
            anyhow::anyhow!(
                "task `{}` not found\nhelp: available tasks: {}",
                name,
                available.join(", ")
            )
        }
        other => other.into(),
    })?;

    tracing::debug!("running {} task(s)", graph.len());
    on_start(graph.len());
    let report = TaskExecutor::new().jobs(opts.jobs).execute(&graph, on_finish)?;

    Ok(FlatDepsResult { summary, report })
}
