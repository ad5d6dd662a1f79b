//! Naming conventions derived from a variant name.
//!
//! Two forms are in play and must not be mixed up:
//! - configuration identifiers use the variant name as-is (`debugCompileClasspath`)
//! - task identifiers and manifest file names capitalize it (`flatDepsDebug`)

/// Name of the aggregate task.
pub const AGGREGATE_TASK: &str = "flatDeps";

/// Group every task registered by flatdeps belongs to.
pub const TASK_GROUP: &str = "dependency";

/// Suffix of the compile-classpath configuration.
pub const COMPILE_CLASSPATH_SUFFIX: &str = "CompileClasspath";

/// Suffix of the legacy compile configuration.
pub const LEGACY_COMPILE_SUFFIX: &str = "Compile";

/// Default manifest directory, relative to the build directory.
pub const DEFAULT_LOGS_DIR: &str = "outputs/logs";

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Task identifier for a variant, e.g. `flatDepsDebug`.
pub fn variant_task_name(variant: &str) -> String {
    format!("{}{}", AGGREGATE_TASK, capitalize(variant))
}

/// Primary configuration identifier, e.g. `debugCompileClasspath`.
pub fn compile_classpath_configuration(variant: &str) -> String {
    format!("{}{}", variant, COMPILE_CLASSPATH_SUFFIX)
}

/// Legacy configuration identifier, e.g. `debugCompile`.
pub fn legacy_compile_configuration(variant: &str) -> String {
    format!("{}{}", variant, LEGACY_COMPILE_SUFFIX)
}

/// Configuration identifiers to try, in lookup order.
pub fn configuration_candidates(variant: &str) -> [String; 2] {
    [
        compile_classpath_configuration(variant),
        legacy_compile_configuration(variant),
    ]
}

/// Manifest file name for a variant, e.g. `flatDepsDebug.txt`.
pub fn manifest_file_name(variant: &str) -> String {
    format!("{}.txt", variant_task_name(variant))
}

/// Description of a per-variant task.
pub fn variant_task_description(variant: &str) -> String {
    format!("Flat all dependencies for variant {}", capitalize(variant))
}

/// Description of the aggregate task.
pub fn aggregate_task_description() -> &'static str {
    "Flat all dependencies for all variants"
}
