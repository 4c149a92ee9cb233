//! skillmap show - Editor view of the current session

use clap::Args;

use crate::app::AppContext;
use crate::cli::commands::emit_session;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Expand every module, not only the selected one
    #[arg(long)]
    pub all: bool,
}

pub fn run(ctx: &AppContext, args: &ShowArgs) -> Result<()> {
    let editor = ctx.open_editor()?;
    emit_session(ctx, &editor, args.all)
}
