//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command
//!
//! Editing commands restore the session, dispatch one edit and print the
//! resulting editor view.

use clap::Subcommand;
use serde::Serialize;

pub mod clear;
pub mod completions;
pub mod export;
pub mod meta;
pub mod module;
pub mod objective;
pub mod open;
pub mod show;
pub mod skill;
pub mod validate;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json};
use crate::editor::{EditOutcome, Editor};
use crate::error::Result;
use crate::model::{Module, Skillmap};
use crate::storage::KeyValueStore;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a skillmap JSON file into the editor
    Open(open::OpenArgs),

    /// Check a skillmap file without loading it
    Validate(validate::ValidateArgs),

    /// Show the current skillmap
    Show(show::ShowArgs),

    /// View or edit the title and description
    Meta(meta::MetaArgs),

    /// Add, remove, reorder or select modules
    Module(module::ModuleArgs),

    /// Edit the objectives of a module
    Objective(objective::ObjectiveArgs),

    /// Edit the skills of an objective
    Skill(skill::SkillArgs),

    /// Write the skillmap back to a JSON file
    Export(export::ExportArgs),

    /// Discard the current skillmap
    Clear(clear::ClearArgs),

    /// Generate shell completion scripts
    Completions(completions::CompletionsArgs),
}

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Open(args) => open::run(ctx, args),
        Commands::Validate(args) => validate::run(ctx, args),
        Commands::Show(args) => show::run(ctx, args),
        Commands::Meta(args) => meta::run(ctx, args),
        Commands::Module(args) => module::run(ctx, args),
        Commands::Objective(args) => objective::run(ctx, args),
        Commands::Skill(args) => skill::run(ctx, args),
        Commands::Export(args) => export::run(ctx, args),
        Commands::Clear(args) => clear::run(ctx, args),
        Commands::Completions(args) => completions::run(args),
    }
}

#[derive(Serialize)]
struct SessionView<'a> {
    loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    selected_module: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    document: Option<&'a Skillmap>,
}

/// Print the editor view. `all` expands every module instead of just the selected one.
pub(crate) fn emit_session<S: KeyValueStore>(
    ctx: &AppContext,
    editor: &Editor<S>,
    all: bool,
) -> Result<()> {
    let document = editor.document();
    if ctx.output_format == OutputFormat::Json {
        return emit_json(&SessionView {
            loaded: document.is_some(),
            file_name: document.map(|_| editor.file_name()),
            selected_module: document.map(|_| editor.selected_module()),
            document,
        });
    }

    let mut layout = HumanLayout::new();
    let Some(document) = document else {
        layout.push_line("No skillmap loaded. Run `skillmap open <FILE>` to start.");
        emit_human(layout);
        return Ok(());
    };

    let selected = editor.selected_module();
    layout.title("Skillmap");
    layout.kv("File", editor.file_name());
    layout.kv("Title", &document.title);
    layout.kv("Description", &document.description);

    layout.section("Modules");
    for (index, module) in document.modules.iter().enumerate() {
        let marker = if index == selected { ">" } else { " " };
        layout.push_line(format!(
            "{marker} {index}. {} ({})",
            display_title(index, module),
            plural(module.objectives.len(), "objective")
        ));
    }

    for (index, module) in document.modules.iter().enumerate() {
        if all || index == selected {
            render_module(&mut layout, index, module);
        }
    }

    emit_human(layout);
    Ok(())
}

/// Print the view after an edit, or a note when the user declined it.
pub(crate) fn emit_outcome<S: KeyValueStore>(
    ctx: &AppContext,
    editor: &Editor<S>,
    outcome: EditOutcome,
) -> Result<()> {
    match outcome {
        EditOutcome::Applied => emit_session(ctx, editor, false),
        EditOutcome::Declined => {
            let mut layout = HumanLayout::new();
            layout.push_line("Cancelled; no changes made.");
            emit_human(layout);
            Ok(())
        }
    }
}

fn render_module(layout: &mut HumanLayout, index: usize, module: &Module) {
    layout.section(&format!("Module {index}: {}", display_title(index, module)));
    if module.objectives.is_empty() {
        layout.push_line("(no objectives)");
    }
    for (objective_index, objective) in module.objectives.iter().enumerate() {
        layout.bullet(&format!("{objective_index}. {}", objective.goal));
        for (skill_index, skill) in objective.skills.iter().enumerate() {
            layout.push_indented(1, &format!("{skill_index}. {skill}"));
        }
    }
}

/// Untitled modules are labelled by their 1-based position.
fn display_title(index: usize, module: &Module) -> String {
    if module.title.is_empty() {
        format!("Module {}", index + 1)
    } else {
        module.title.clone()
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
