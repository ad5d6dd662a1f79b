//! Task wiring.
//!
//! For every variant with a compile-dependency configuration, register a
//! `flatDeps<Variant>` task that flattens the configuration and writes its
//! manifest; then make the aggregate `flatDeps` task depend on all of them.
//! Registration does no resolution work; everything expensive happens in the
//! task actions.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::naming::{
    aggregate_task_description, variant_task_description, AGGREGATE_TASK, DEFAULT_LOGS_DIR,
    TASK_GROUP,
};
use crate::core::{HostProject, Variant, VariantApi};
use crate::ops::configuration::resolve_configuration;
use crate::ops::flatten::flatten;
use crate::ops::locate::locate;
use crate::ops::write::write_manifest;
use crate::tasks::{Registration, Task, TaskContainer, TaskError};

/// Options for wiring a project.
#[derive(Debug, Clone)]
pub struct WireOptions {
    /// Manifest directory, relative to the project's build directory
    pub logs_dir: PathBuf,
}

impl Default for WireOptions {
    fn default() -> Self {
        WireOptions {
            logs_dir: PathBuf::from(DEFAULT_LOGS_DIR),
        }
    }
}

impl WireOptions {
    /// Absolute manifest directory for a project.
    pub fn output_dir(&self, project: &dyn HostProject) -> PathBuf {
        project.build_dir().join(&self.logs_dir)
    }
}

/// A variant that got a task.
#[derive(Debug, Clone, Serialize)]
pub struct WiredVariant {
    pub variant: Variant,
    pub configuration: String,
    pub task: String,
    pub output: PathBuf,
}

/// What wiring did.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WireSummary {
    /// Detected variant API, `None` if the project is not variant-aware
    pub api: Option<VariantApi>,

    /// Variants with a registered task
    pub wired: Vec<WiredVariant>,

    /// Variants without a matching configuration, or whose task name was
    /// already taken
    pub skipped: Vec<Variant>,
}

impl WireSummary {
    /// Whether the aggregate task was registered.
    pub fn has_aggregate(&self) -> bool {
        self.api.is_some()
    }
}

/// Register the flatdeps tasks of a project.
///
/// A project without any variant API gets no tasks at all. Wiring the same
/// project twice into the same container is harmless.
pub fn wire(
    project: &dyn HostProject,
    tasks: &mut TaskContainer,
    opts: &WireOptions,
) -> Result<WireSummary, TaskError> {
    let Some(source) = locate(project) else {
        tracing::debug!("project has no variant API, no tasks registered");
        return Ok(WireSummary::default());
    };

    let mut summary = WireSummary {
        api: Some(source.api()),
        ..WireSummary::default()
    };

    let output_dir = opts.output_dir(project);

    source.for_each_variant(project, &mut |variant| {
        // Variants without a configuration are expected; skip them quietly
        let Some(configuration) = resolve_configuration(project, &variant) else {
            summary.skipped.push(variant);
            return;
        };

        let task_name = variant.task_name();
        let output = manifest_path(&output_dir, &variant);

        let action_output = output.clone();
        let action_configuration = configuration.clone();
        let task = Task::new(&task_name)
            .with_group(TASK_GROUP)
            .with_description(variant_task_description(variant.name()))
            .with_output(&output)
            .with_action(move || {
                let manifest = flatten(&*action_configuration);
                write_manifest(&manifest, &action_output)
            });

        if tasks.register(task) == Registration::AlreadyRegistered {
            tracing::debug!(
                "task `{}` already registered, variant `{}` not wired",
                task_name,
                variant
            );
            summary.skipped.push(variant);
            return;
        }

        tracing::debug!(
            "registered `{}` for variant `{}` using `{}`",
            task_name,
            variant,
            configuration.name()
        );
        summary.wired.push(WiredVariant {
            configuration: configuration.name().to_string(),
            task: task_name,
            output,
            variant,
        });
    });

    tasks.register(
        Task::new(AGGREGATE_TASK)
            .with_group(TASK_GROUP)
            .with_description(aggregate_task_description()),
    );
    tasks.configure(AGGREGATE_TASK, |aggregate| {
        for wired in &summary.wired {
            aggregate.depends_on(&wired.task);
        }
    })?;

    Ok(summary)
}

/// Manifest path of a variant under an output directory.
pub fn manifest_path(output_dir: &Path, variant: &Variant) -> PathBuf {
    output_dir.join(variant.manifest_file_name())
}
