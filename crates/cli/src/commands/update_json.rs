use serde_json::Value;
use std::path::PathBuf;
use tasksmith_core::TaskContext;
use tasksmith_task::{execute_to_code, UpdateJsonFileTask};

pub struct Options {
    pub file: PathBuf,
    pub updates: Vec<(String, Value)>,
    pub output: Option<PathBuf>,
    pub allow_missing: bool,
    pub fail_on_type_mismatch: bool,
}

pub fn execute(ctx: &mut TaskContext, options: Options) -> i32 {
    let mut task = UpdateJsonFileTask::new(options.file)
        .update_many(options.updates)
        .fail_if_property_not_found(!options.allow_missing)
        .fail_on_type_mismatch(options.fail_on_type_mismatch);

    if let Some(output) = options.output {
        task = task.output(output);
    }

    execute_to_code(&task, ctx)
}
