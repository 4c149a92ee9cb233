//! Interactive confirmation for destructive edits

use std::io::{self, BufRead, Write};

use crate::editor::Confirm;
use crate::error::{Result, SkillmapError};

/// Asks on the terminal unless the answer is already known.
///
/// Robot mode never blocks on stdin: without `--yes` a destructive edit
/// fails with `approval_required`.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleConfirm {
    assume_yes: bool,
    robot: bool,
}

impl ConsoleConfirm {
    pub const fn new(assume_yes: bool, robot: bool) -> Self {
        Self { assume_yes, robot }
    }

    pub fn from_context(ctx: &crate::app::AppContext) -> Self {
        Self::new(
            ctx.assume_yes || !ctx.config.editor.confirm_destructive,
            ctx.robot,
        )
    }

    fn ask(prompt: &str, input: &mut impl BufRead) -> Result<bool> {
        eprint!("{prompt} [y/N] ");
        io::stderr().flush()?;
        let mut answer = String::new();
        input.read_line(&mut answer)?;
        Ok(is_yes(&answer))
    }
}

impl Confirm for ConsoleConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        if self.robot {
            return Err(SkillmapError::ApprovalRequired(format!(
                "{prompt} (re-run with --yes)"
            )));
        }
        Self::ask(prompt, &mut io::stdin().lock())
    }
}

fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
