//! `flatdeps tasks` command

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::cli::TasksArgs;
use crate::commands::Workspace;
use flatdeps::core::naming::TASK_GROUP;
use flatdeps::ops::wire_project;
use flatdeps::tasks::Task;
use flatdeps::util::Shell;

pub fn execute(args: TasksArgs, model: Option<&Path>, shell: &Arc<Shell>) -> Result<()> {
    let ws = Workspace::load(model)?;
    let (tasks, summary) = wire_project(&ws.project, &ws.wire_options())?;

    if !summary.has_aggregate() {
        shell.note(format!(
            "project `{}` has no variant API; no tasks registered",
            ws.project.name()
        ));
        return Ok(());
    }

    let listed: Vec<&Task> = if args.all {
        tasks.iter().collect()
    } else {
        tasks.in_group(TASK_GROUP).collect()
    };

    if shell.is_json() {
        for task in &listed {
            let dependencies: Vec<&str> = task.dependencies().collect();
            shell.json_event(&serde_json::json!({
                "reason": "task",
                "name": task.name(),
                "group": task.group(),
                "description": task.description(),
                "dependencies": dependencies,
                "outputs": task.outputs(),
            }));
        }
        return Ok(());
    }

    let title = "Dependency tasks";
    shell.println(title);
    shell.println("-".repeat(title.len()));
    for task in &listed {
        let mut line = task.name().to_string();
        if let Some(description) = task.description() {
            line.push_str(" - ");
            line.push_str(description);
        }
        if args.all {
            let dependencies: Vec<&str> = task.dependencies().collect();
            if !dependencies.is_empty() {
                line.push_str(&format!(" [depends on: {}]", dependencies.join(", ")));
            }
        }
        shell.println(line);
    }

    Ok(())
}
