//! skillmap meta - Title and description

use clap::Args;

use crate::app::AppContext;
use crate::cli::commands::{emit_outcome, emit_session};
use crate::cli::confirm::ConsoleConfirm;
use crate::editor::Edit;
use crate::error::{Result, SkillmapError};

#[derive(Args, Debug)]
pub struct MetaArgs {
    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,
}

pub fn run(ctx: &AppContext, args: &MetaArgs) -> Result<()> {
    let mut editor = ctx.open_editor()?;
    let document = editor.document().ok_or(SkillmapError::NoDocument)?;

    if args.title.is_none() && args.description.is_none() {
        return emit_session(ctx, &editor, false);
    }

    let edit = Edit::SetMetadata {
        title: args.title.clone().unwrap_or_else(|| document.title.clone()),
        description: args
            .description
            .clone()
            .unwrap_or_else(|| document.description.clone()),
    };
    let outcome = editor.apply(edit, &mut ConsoleConfirm::from_context(ctx))?;
    emit_outcome(ctx, &editor, outcome)
}
