//! skillmap export - "Download JSON"

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json};
use crate::error::{Result, SkillmapError};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Destination file or directory (default: the session filename in the cwd)
    #[arg(long, short, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Write the JSON to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Serialize)]
struct ExportReport {
    path: String,
    filename: String,
    content_type: &'static str,
    bytes: usize,
}

pub fn run(ctx: &AppContext, args: &ExportArgs) -> Result<()> {
    let editor = ctx.open_editor()?;
    let payload = editor.export()?;

    if args.stdout {
        let mut out = std::io::stdout().lock();
        out.write_all(&payload.bytes)?;
        writeln!(out)?;
        return Ok(());
    }

    let path = destination(args.output.as_deref(), &payload.filename)?;
    write_atomic(&path, &payload.bytes)?;

    let report = ExportReport {
        path: path.display().to_string(),
        filename: payload.filename,
        content_type: payload.content_type,
        bytes: payload.bytes.len(),
    };
    if ctx.output_format == OutputFormat::Json {
        return emit_json(&report);
    }

    let mut layout = HumanLayout::new();
    layout.title("Export");
    layout.kv("File", &report.path);
    layout.kv("Bytes", &report.bytes.to_string());
    emit_human(layout);
    Ok(())
}

fn destination(output: Option<&Path>, filename: &str) -> Result<PathBuf> {
    match output {
        Some(path) if path.is_dir() => Ok(path.join(filename)),
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(std::env::current_dir()?.join(filename)),
    }
}

/// Write through a sibling temp file so a failed export never truncates the target.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| SkillmapError::Io(err.error))?;
    debug!(path = %path.display(), "wrote export");
    Ok(())
}
