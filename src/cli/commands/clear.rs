//! skillmap clear - Discard the session

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::confirm::ConsoleConfirm;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ClearArgs {}

#[derive(Serialize)]
struct ClearReport {
    cleared: bool,
}

pub fn run(ctx: &AppContext, _args: &ClearArgs) -> Result<()> {
    let mut editor = ctx.open_editor()?;
    let cleared = editor.clear(&mut ConsoleConfirm::from_context(ctx))?;

    if ctx.output_format == OutputFormat::Json {
        return emit_json(&ClearReport { cleared });
    }

    let mut layout = HumanLayout::new();
    layout.push_line(if cleared {
        "Cleared the current skillmap."
    } else {
        "Cancelled; no changes made."
    });
    emit_human(layout);
    Ok(())
}
