//! Task registration.
//!
//! Registration is cheap and eager: a [`Task`] is a name, some display
//! metadata, its dependency edges and a deferred action. Nothing runs until
//! the [`TaskExecutor`](crate::tasks::TaskExecutor) picks the task up.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use crate::tasks::TaskError;

/// A deferred unit of work.
pub type TaskAction = Arc<dyn Fn() -> Result<()> + Send + Sync>;

/// A registered task.
#[derive(Clone)]
pub struct Task {
    name: String,
    group: Option<String>,
    description: Option<String>,
    depends_on: BTreeSet<String>,
    outputs: Vec<PathBuf>,
    action: Option<TaskAction>,
}

impl Task {
    /// Create a task with no action and no dependencies.
    pub fn new(name: impl Into<String>) -> Self {
        Task {
            name: name.into(),
            group: None,
            description: None,
            depends_on: BTreeSet::new(),
            outputs: Vec::new(),
            action: None,
        }
    }

    /// Set the task group.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Set the task description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Declare a file the task produces.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.outputs.push(output.into());
        self
    }

    /// Set the action run when the task executes.
    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn() -> Result<()> + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Add a dependency on another task. Adding the same edge twice is a no-op.
    pub fn depends_on(&mut self, task: impl Into<String>) {
        self.depends_on.insert(task.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Names of the tasks this one depends on, sorted.
    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        self.depends_on.iter().map(String::as_str)
    }

    pub fn outputs(&self) -> &[PathBuf] {
        &self.outputs
    }

    /// Run the task's action. Tasks without an action succeed trivially.
    pub fn run(&self) -> Result<()> {
        match &self.action {
            Some(action) => action(),
            None => Ok(()),
        }
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("name", &self.name)
            .field("group", &self.group)
            .field("depends_on", &self.depends_on)
            .field("outputs", &self.outputs)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

/// Result of registering a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Registered,
    /// A task with this name already existed and was kept as-is.
    AlreadyRegistered,
}

/// All registered tasks of a project, by name.
#[derive(Debug, Clone, Default)]
pub struct TaskContainer {
    tasks: BTreeMap<String, Task>,
}

impl TaskContainer {
    /// Create a new empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task. Duplicate names are ignored.
    pub fn register(&mut self, task: Task) -> Registration {
        if self.tasks.contains_key(task.name()) {
            tracing::debug!("task `{}` is already registered", task.name());
            return Registration::AlreadyRegistered;
        }

        self.tasks.insert(task.name().to_string(), task);
        Registration::Registered
    }

    /// Mutate a registered task.
    pub fn configure<F>(&mut self, name: &str, f: F) -> Result<(), TaskError>
    where
        F: FnOnce(&mut Task),
    {
        let task = self.tasks.get_mut(name).ok_or_else(|| TaskError::UnknownTask {
            name: name.to_string(),
        })?;
        f(task);
        Ok(())
    }

    /// Get a task by name.
    pub fn get(&self, name: &str) -> Option<&Task> {
        self.tasks.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tasks.contains_key(name)
    }

    /// Iterate over all tasks, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    /// Tasks belonging to a group, sorted by name.
    pub fn in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Task> {
        self.tasks.values().filter(move |t| t.group() == Some(group))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
