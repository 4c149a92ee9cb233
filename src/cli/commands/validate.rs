//! skillmap validate - Check a file without loading it

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::commands::open::{display_name, read_file};
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json};
use crate::error::Result;
use crate::model::Skillmap;
use crate::transfer::{self, FilenamePolicy};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Skillmap JSON file
    pub file: PathBuf,
}

#[derive(Serialize)]
struct ValidateReport {
    file: String,
    valid: bool,
    modules: usize,
    objectives: usize,
    skills: usize,
}

pub fn run(ctx: &AppContext, args: &ValidateArgs) -> Result<()> {
    let name = display_name(&args.file);
    transfer::check_extension(&name)?;
    let raw = read_file(&args.file)?;
    let imported = transfer::import_file(&raw, &name, FilenamePolicy::Preserve)?;
    let report = build_report(&args.file.display().to_string(), &imported.document);

    if ctx.output_format == OutputFormat::Json {
        return emit_json(&report);
    }

    let mut layout = HumanLayout::new();
    layout.title("Validation");
    layout.kv("File", &report.file);
    layout.kv("Modules", &report.modules.to_string());
    layout.kv("Objectives", &report.objectives.to_string());
    layout.kv("Skills", &report.skills.to_string());
    layout.section("Status");
    layout.bullet("OK");
    emit_human(layout);
    Ok(())
}

fn build_report(file: &str, document: &Skillmap) -> ValidateReport {
    ValidateReport {
        file: file.to_string(),
        valid: true,
        modules: document.modules.len(),
        objectives: document.modules.iter().map(|m| m.objectives.len()).sum(),
        skills: document.skill_count(),
    }
}
