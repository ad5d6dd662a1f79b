//! `flatdeps run` command

use std::path::Path;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use anyhow::{bail, Result};

use crate::cli::RunArgs;
use crate::commands::Workspace;
use flatdeps::ops::{flat_deps, FlatDepsOptions};
use flatdeps::tasks::{TaskOutcome, TaskReport};
use flatdeps::util::fs::relative_path;
use flatdeps::util::shell::{Progress, Shell, Status};

pub fn execute(args: RunArgs, model: Option<&Path>, shell: &Arc<Shell>) -> Result<()> {
    let ws = Workspace::load(model)?;

    // Jobs: CLI > config > None (auto-detect)
    let opts = FlatDepsOptions {
        tasks: args.tasks,
        jobs: args.jobs.or(ws.config.tasks.jobs),
        wire: ws.wire_options(),
    };

    let root = ws.project.root();
    let start = Instant::now();
    let progress: OnceLock<Progress> = OnceLock::new();

    let result = flat_deps(
        &ws.project,
        &opts,
        |total| {
            shell.status(
                Status::Running,
                format!("{} task(s) for `{}`", total, ws.project.name()),
            );
            let _ = progress.set(shell.progress(total as u64, "Flattening"));
        },
        |report| {
            match progress.get() {
                Some(progress) => {
                    print_report(shell, Some(progress), root, report);
                    progress.inc(1);
                }
                None => print_report(shell, None, root, report),
            }
        },
    )?;

    if let Some(progress) = progress.get() {
        progress.finish();
    }

    let total = result.report.reports().len();
    let failed = result.report.unsuccessful().count();

    if shell.is_json() {
        shell.json_event(&serde_json::json!({
            "reason": "run-finished",
            "success": failed == 0,
            "tasks": total,
            "unsuccessful": failed,
        }));
    }

    if failed > 0 {
        bail!("{} of {} task(s) did not succeed", failed, total);
    }

    shell.status(
        Status::Finished,
        format!("{} task(s) in {:.2}s", total, start.elapsed().as_secs_f64()),
    );
    Ok(())
}

fn print_report(shell: &Shell, progress: Option<&Progress>, root: &Path, report: &TaskReport) {
    if shell.is_json() {
        let (outcome, message) = match &report.outcome {
            TaskOutcome::Succeeded => ("succeeded", None),
            TaskOutcome::Failed(msg) => ("failed", Some(msg)),
            TaskOutcome::Skipped(reason) => ("skipped", Some(reason)),
        };
        shell.json_event(&serde_json::json!({
            "reason": "task-finished",
            "task": report.name,
            "outcome": outcome,
            "message": message,
            "outputs": report.outputs,
            "duration_ms": report.duration.as_millis() as u64,
        }));
        return;
    }

    let status = |status: Status, msg: String| match progress {
        Some(progress) => progress.status(status, msg),
        None => shell.status(status, msg),
    };

    match &report.outcome {
        TaskOutcome::Succeeded => {
            for output in &report.outputs {
                status(
                    Status::Flattened,
                    format!(
                        "{} -> {}",
                        report.name,
                        relative_path(root, output).display()
                    ),
                );
            }
        }
        TaskOutcome::Failed(msg) => status(Status::Failed, format!("{}: {}", report.name, msg)),
        TaskOutcome::Skipped(reason) => {
            status(Status::Skipped, format!("{}: {}", report.name, reason))
        }
    }
}
