//! skillmap module - Sidebar actions on the module list

use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::cli::commands::emit_outcome;
use crate::cli::confirm::ConsoleConfirm;
use crate::editor::Edit;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ModuleArgs {
    #[command(subcommand)]
    pub command: ModuleCommand,
}

#[derive(Subcommand, Debug)]
pub enum ModuleCommand {
    /// Append a module and select it
    Add {
        /// Title for the new module
        #[arg(long)]
        title: Option<String>,
    },

    /// Remove a module (asks for confirmation)
    Remove {
        /// Module index
        index: usize,
    },

    /// Move one module to a new position
    Move {
        /// Current index
        from: usize,
        /// Target index
        to: usize,
    },

    /// Rearrange all modules; lists the old indices in their new order
    Reorder {
        #[arg(required = true, num_args = 1..)]
        order: Vec<usize>,
    },

    /// Rename a module
    Rename {
        /// Module index
        index: usize,
        /// New title
        title: String,
    },

    /// Select the module edited by `objective` and `skill`
    Select {
        /// Module index
        index: usize,
    },
}

pub fn run(ctx: &AppContext, args: &ModuleArgs) -> Result<()> {
    let mut editor = ctx.open_editor()?;
    let mut confirm = ConsoleConfirm::from_context(ctx);

    let outcome = match &args.command {
        ModuleCommand::Add { title } => editor.apply(
            Edit::AddModule {
                title: title.clone(),
            },
            &mut confirm,
        )?,
        ModuleCommand::Remove { index } => {
            editor.apply(Edit::RemoveModule { index: *index }, &mut confirm)?
        }
        ModuleCommand::Move { from, to } => editor.apply(
            Edit::MoveModule {
                from: *from,
                to: *to,
            },
            &mut confirm,
        )?,
        ModuleCommand::Reorder { order } => editor.apply(
            Edit::ReorderModules {
                order: order.clone(),
            },
            &mut confirm,
        )?,
        ModuleCommand::Rename { index, title } => editor.apply(
            Edit::RenameModule {
                index: *index,
                title: title.clone(),
            },
            &mut confirm,
        )?,
        ModuleCommand::Select { index } => {
            editor.apply(Edit::SelectModule { index: *index }, &mut confirm)?
        }
    };

    emit_outcome(ctx, &editor, outcome)
}
