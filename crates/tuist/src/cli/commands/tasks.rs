//! Implementation of `tuist tasks`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use tuist_dispatch::system_search_path;

use crate::cli::{
    args::TasksCommand,
    context::CommandContext,
    output::{JsonTask, JsonTaskList, report_error},
};

/// Lists tasks available to the project.
pub fn run(ctx: &CommandContext, cmd: &TasksCommand) -> ExitCode {
    let root = ctx.project_root(cmd.path.path.as_deref());
    let tasks = match ctx
        .dispatcher
        .available_tasks(&root, &system_search_path())
    {
        Ok(tasks) => tasks,
        Err(e) => return report_error(&e),
    };

    if cmd.json {
        let output = JsonTaskList {
            tasks: tasks.iter().map(JsonTask::from).collect(),
        };
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize tasks: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    if tasks.is_empty() {
        println!("No tasks available.");
        return ExitCode::SUCCESS;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Task", "Source", "Path"]);
    for task in &tasks {
        table.add_row(vec![
            Cell::new(&task.name),
            Cell::new(task.source.as_str()),
            Cell::new(task.path.display()),
        ]);
    }
    println!("{table}");

    ExitCode::SUCCESS
}
