//! skillmap open - Load a file into the editor

use std::path::{Path, PathBuf};

use clap::Args;

use crate::app::AppContext;
use crate::cli::commands::emit_session;
use crate::error::{Result, SkillmapError};
use crate::transfer;

#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Skillmap JSON file
    pub file: PathBuf,
}

pub fn run(ctx: &AppContext, args: &OpenArgs) -> Result<()> {
    let name = display_name(&args.file);
    transfer::check_extension(&name)?;
    let raw = read_file(&args.file)?;

    let mut editor = ctx.open_editor()?;
    editor.load_file(&raw, &name)?;
    emit_session(ctx, &editor, false)
}

pub(crate) fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|err| {
        SkillmapError::Io(std::io::Error::new(
            err.kind(),
            format!("read {}: {err}", path.display()),
        ))
    })
}

/// The bare file name, as a browser upload would report it.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}
