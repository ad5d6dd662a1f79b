//! Task graph execution.
//!
//! The requested tasks and everything they depend on are laid out as a
//! petgraph DAG and executed layer by layer: every task of a layer only
//! depends on tasks of earlier layers, so a layer runs in parallel on the
//! rayon pool. A failing task never stops unrelated tasks; tasks that depend
//! on it are reported as skipped.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use rayon::prelude::*;

use crate::tasks::container::{Task, TaskContainer};
use crate::tasks::TaskError;

/// The requested tasks plus their transitive dependencies.
///
/// An edge `a -> b` means "a must run before b".
#[derive(Debug)]
pub struct TaskGraph<'a> {
    graph: DiGraph<&'a Task, ()>,
}

impl<'a> TaskGraph<'a> {
    /// Build the graph for a set of requested task names.
    pub fn for_tasks(container: &'a TaskContainer, requested: &[String]) -> Result<Self, TaskError> {
        let mut graph = DiGraph::new();
        let mut nodes: HashMap<&'a str, NodeIndex> = HashMap::new();
        let mut stack: Vec<&'a Task> = Vec::new();

        for name in requested {
            let task = container.get(name).ok_or_else(|| TaskError::UnknownTask {
                name: name.clone(),
            })?;
            stack.push(task);
        }

        while let Some(task) = stack.pop() {
            if nodes.contains_key(task.name()) {
                continue;
            }
            nodes.insert(task.name(), graph.add_node(task));

            for dep in task.dependencies() {
                let dep_task = container
                    .get(dep)
                    .ok_or_else(|| TaskError::UnknownDependency {
                        task: task.name().to_string(),
                        dependency: dep.to_string(),
                    })?;
                stack.push(dep_task);
            }
        }

        let edges: Vec<(NodeIndex, NodeIndex)> = graph
            .node_indices()
            .flat_map(|node| {
                let task: &Task = graph[node];
                task.dependencies()
                    .map(|dep| (nodes[dep], node))
                    .collect::<Vec<_>>()
            })
            .collect();
        for (from, to) in edges {
            graph.add_edge(from, to, ());
        }

        toposort(&graph, None).map_err(|cycle| TaskError::Cycle {
            task: graph[cycle.node_id()].name().to_string(),
        })?;

        Ok(TaskGraph { graph })
    }

    /// Number of tasks in the graph.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Group tasks into layers that can each run in parallel.
    ///
    /// Within a layer tasks are sorted by name so reports are stable.
    pub fn layers(&self) -> Vec<Vec<&'a Task>> {
        let mut depth: HashMap<NodeIndex, usize> = HashMap::new();

        // The graph is acyclic (checked on construction)
        let order = toposort(&self.graph, None).unwrap_or_default();
        for node in order {
            let level = self
                .graph
                .neighbors_directed(node, Direction::Incoming)
                .map(|dep| depth[&dep] + 1)
                .max()
                .unwrap_or(0);
            depth.insert(node, level);
        }

        let count = depth.values().max().map_or(0, |max| max + 1);
        let mut layers: Vec<Vec<&'a Task>> = vec![Vec::new(); count];
        for (node, level) in depth {
            layers[level].push(self.graph[node]);
        }
        for layer in &mut layers {
            layer.sort_by(|a, b| a.name().cmp(b.name()));
        }
        layers
    }
}

/// How a task ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Succeeded,
    Failed(String),
    /// Not run because a dependency did not succeed.
    Skipped(String),
}

impl TaskOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TaskOutcome::Succeeded)
    }
}

/// Report for one executed (or skipped) task.
#[derive(Debug, Clone)]
pub struct TaskReport {
    pub name: String,
    pub outcome: TaskOutcome,
    pub outputs: Vec<PathBuf>,
    pub duration: Duration,
}

/// Reports for every task in the graph, in execution order.
#[derive(Debug, Clone, Default)]
pub struct ExecutionReport {
    reports: Vec<TaskReport>,
}

impl ExecutionReport {
    pub fn reports(&self) -> &[TaskReport] {
        &self.reports
    }

    /// Report for a task by name.
    pub fn get(&self, name: &str) -> Option<&TaskReport> {
        self.reports.iter().find(|r| r.name == name)
    }

    /// True if every task succeeded.
    pub fn is_success(&self) -> bool {
        self.reports.iter().all(|r| r.outcome.is_success())
    }

    /// Tasks that failed or were skipped.
    pub fn unsuccessful(&self) -> impl Iterator<Item = &TaskReport> {
        self.reports.iter().filter(|r| !r.outcome.is_success())
    }
}

/// Runs a [`TaskGraph`].
#[derive(Debug, Clone, Default)]
pub struct TaskExecutor {
    jobs: Option<usize>,
}

impl TaskExecutor {
    /// Create a new executor using rayon's default parallelism.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the number of tasks running at once.
    pub fn jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs;
        self
    }

    /// Execute every task of the graph.
    ///
    /// `on_finish` is called once per task as soon as its outcome is known,
    /// possibly from several threads at once.
    pub fn execute<F>(&self, graph: &TaskGraph<'_>, on_finish: F) -> Result<ExecutionReport>
    where
        F: Fn(&TaskReport) + Sync,
    {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(jobs) = self.jobs {
            builder = builder.num_threads(jobs);
        }
        let pool = builder.build().context("failed to start task thread pool")?;

        let mut succeeded: HashSet<String> = HashSet::new();
        let mut report = ExecutionReport::default();

        for layer in graph.layers() {
            let layer_reports: Vec<TaskReport> = pool.install(|| {
                layer
                    .par_iter()
                    .map(|task| {
                        let task_report = run_task(task, &succeeded);
                        on_finish(&task_report);
                        task_report
                    })
                    .collect()
            });

            for task_report in layer_reports {
                if task_report.outcome.is_success() {
                    succeeded.insert(task_report.name.clone());
                }
                report.reports.push(task_report);
            }
        }

        Ok(report)
    }
}

fn run_task(task: &Task, succeeded: &HashSet<String>) -> TaskReport {
    let start = Instant::now();

    let blocked: Vec<&str> = task
        .dependencies()
        .filter(|dep| !succeeded.contains(*dep))
        .collect();

    let outcome = if !blocked.is_empty() {
        TaskOutcome::Skipped(format!("dependency failed: {}", blocked.join(", ")))
    } else {
        tracing::debug!("running task `{}`", task.name());
        match task.run() {
            Ok(()) => TaskOutcome::Succeeded,
            Err(e) => TaskOutcome::Failed(format!("{:#}", e)),
        }
    };

    TaskReport {
        name: task.name().to_string(),
        outcome,
        outputs: task.outputs().to_vec(),
        duration: start.elapsed(),
    }
}
