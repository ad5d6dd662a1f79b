//! `flatdeps variants` command

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::commands::Workspace;
use flatdeps::core::HostProject;
use flatdeps::ops::{collect_variants, resolve_configuration};
use flatdeps::util::Shell;

pub fn execute(model: Option<&Path>, shell: &Arc<Shell>) -> Result<()> {
    let ws = Workspace::load(model)?;
    let project = &ws.project;

    let Some(api) = project.variant_api() else {
        if shell.is_json() {
            shell.json_event(&serde_json::json!({ "reason": "variant-api", "api": null }));
        } else {
            shell.note(format!("project `{}` has no variant API", project.name()));
        }
        return Ok(());
    };

    if shell.is_json() {
        shell.json_event(&serde_json::json!({ "reason": "variant-api", "api": api }));
    } else {
        shell.println(format!("{} ({} variant API)", project.name(), api));
    }

    for variant in collect_variants(project) {
        let configuration = resolve_configuration(project, &variant);

        if shell.is_json() {
            shell.json_event(&serde_json::json!({
                "reason": "variant",
                "name": variant.name(),
                "configuration": configuration.as_ref().map(|c| c.name()),
                "task": configuration.as_ref().map(|_| variant.task_name()),
            }));
            continue;
        }

        match configuration {
            Some(configuration) => shell.println(format!(
                "  {} -> {} ({})",
                variant,
                configuration.name(),
                variant.task_name()
            )),
            None => shell.println(format!("  {} -> skipped (no configuration)", variant)),
        }
    }

    Ok(())
}
