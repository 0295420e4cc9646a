//! Filesystem commands.
//!
//! Every path argument is resolved against the session's current directory
//! before it reaches the file system.

use crate::command::CommandContext;
use crate::commands::Command;
use crate::error::{Result, ShellError};
use crate::{Output, Session};

fn required<'a>(ctx: &CommandContext<'a>, usage: &'static str) -> Result<&'a str> {
    ctx.args.get(0).ok_or(ShellError::Usage(usage))
}

/// Create a file.
pub static CREATE_FILE: CreateFileCommand = CreateFileCommand;

pub struct CreateFileCommand;

impl Command for CreateFileCommand {
    fn name(&self) -> &'static str {
        "createfile"
    }

    fn description(&self) -> &'static str {
        "Create a file with optional content"
    }

    fn usage(&self) -> &'static str {
        "Usage: createfile <name> [content]"
    }

    fn category(&self) -> &'static str {
        "filesystem"
    }

    fn execute(&self, ctx: &CommandContext<'_>, session: &mut Session) -> Result<Output> {
        let path = session.resolve(required(ctx, self.usage())?);
        session.fs_mut().create_file(&path, ctx.rest(1))?;
        Ok(Output::text("File created successfully."))
    }
}

/// Print a file.
pub static READ_FILE: ReadFileCommand = ReadFileCommand;

pub struct ReadFileCommand;

impl Command for ReadFileCommand {
    fn name(&self) -> &'static str {
        "readfile"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["cat"]
    }

    fn description(&self) -> &'static str {
        "Print the content of a file"
    }

    fn usage(&self) -> &'static str {
        "Usage: readfile <name>"
    }

    fn category(&self) -> &'static str {
        "filesystem"
    }

    fn execute(&self, ctx: &CommandContext<'_>, session: &mut Session) -> Result<Output> {
        let path = session.resolve(required(ctx, self.usage())?);
        let content = session.fs().read_file(&path)?;
        Ok(Output::text(content))
    }
}

/// Append to a file.
pub static APPEND_FILE: AppendFileCommand = AppendFileCommand;

pub struct AppendFileCommand;

impl Command for AppendFileCommand {
    fn name(&self) -> &'static str {
        "appendfile"
    }

    fn description(&self) -> &'static str {
        "Append content to a file"
    }

    fn usage(&self) -> &'static str {
        "Usage: appendfile <name> <content>"
    }

    fn category(&self) -> &'static str {
        "filesystem"
    }

    fn execute(&self, ctx: &CommandContext<'_>, session: &mut Session) -> Result<Output> {
        let path = session.resolve(required(ctx, self.usage())?);
        session.fs_mut().append_to_file(&path, ctx.rest(1))?;
        Ok(Output::text("Content appended successfully."))
    }
}

/// Replace the content of a file.
pub static UPDATE_FILE: UpdateFileCommand = UpdateFileCommand;

pub struct UpdateFileCommand;

impl Command for UpdateFileCommand {
    fn name(&self) -> &'static str {
        "updatefile"
    }

    fn description(&self) -> &'static str {
        "Replace the content of a file"
    }

    fn usage(&self) -> &'static str {
        "Usage: updatefile <name> [content]"
    }

    fn category(&self) -> &'static str {
        "filesystem"
    }

    fn execute(&self, ctx: &CommandContext<'_>, session: &mut Session) -> Result<Output> {
        let path = session.resolve(required(ctx, self.usage())?);
        session.fs_mut().update_file(&path, ctx.rest(1))?;
        Ok(Output::text("File updated successfully."))
    }
}

/// Delete a file.
pub static DELETE_FILE: DeleteFileCommand = DeleteFileCommand;

pub struct DeleteFileCommand;

impl Command for DeleteFileCommand {
    fn name(&self) -> &'static str {
        "deletefile"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["rm"]
    }

    fn description(&self) -> &'static str {
        "Delete a file"
    }

    fn usage(&self) -> &'static str {
        "Usage: deletefile <name>"
    }

    fn category(&self) -> &'static str {
        "filesystem"
    }

    fn execute(&self, ctx: &CommandContext<'_>, session: &mut Session) -> Result<Output> {
        let path = session.resolve(required(ctx, self.usage())?);
        session.fs_mut().delete_file(&path)?;
        Ok(Output::text("File deleted successfully."))
    }
}

/// Make directory.
pub static CREATE_DIR: CreateDirCommand = CreateDirCommand;

pub struct CreateDirCommand;

impl Command for CreateDirCommand {
    fn name(&self) -> &'static str {
        "createdir"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["mkdir"]
    }

    fn description(&self) -> &'static str {
        "Create a directory"
    }

    fn usage(&self) -> &'static str {
        "Usage: createdir <name>"
    }

    fn category(&self) -> &'static str {
        "filesystem"
    }

    fn execute(&self, ctx: &CommandContext<'_>, session: &mut Session) -> Result<Output> {
        let path = session.resolve(required(ctx, self.usage())?);
        session.fs_mut().create_directory(&path)?;
        Ok(Output::text("Directory created successfully."))
    }
}

/// Remove a directory and everything under it.
pub static DELETE_DIR: DeleteDirCommand = DeleteDirCommand;

pub struct DeleteDirCommand;

impl Command for DeleteDirCommand {
    fn name(&self) -> &'static str {
        "deletedir"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["rmdir"]
    }

    fn description(&self) -> &'static str {
        "Delete a directory and everything under it"
    }

    fn usage(&self) -> &'static str {
        "Usage: deletedir <name>"
    }

    fn category(&self) -> &'static str {
        "filesystem"
    }

    fn execute(&self, ctx: &CommandContext<'_>, session: &mut Session) -> Result<Output> {
        let path = session.resolve(required(ctx, self.usage())?);
        session.fs_mut().delete_directory(&path)?;
        Ok(Output::text("Directory deleted successfully."))
    }
}

/// Change directory.
pub static CD: CdCommand = CdCommand;

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn description(&self) -> &'static str {
        "Change current working directory"
    }

    fn usage(&self) -> &'static str {
        "Usage: cd <path>"
    }

    fn category(&self) -> &'static str {
        "filesystem"
    }

    fn execute(&self, ctx: &CommandContext<'_>, session: &mut Session) -> Result<Output> {
        session.change_directory(required(ctx, self.usage())?)?;
        Ok(Output::Empty)
    }
}

/// List directory contents.
pub static LS: LsCommand = LsCommand;

pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn description(&self) -> &'static str {
        "List directory contents"
    }

    fn usage(&self) -> &'static str {
        "Usage: ls [path]"
    }

    fn category(&self) -> &'static str {
        "filesystem"
    }

    fn execute(&self, ctx: &CommandContext<'_>, session: &mut Session) -> Result<Output> {
        let path = match ctx.args.get(0) {
            Some(path) => session.resolve(path),
            None => session.cwd().to_string(),
        };
        let mut text = String::from("Directory contents:");
        for item in session.fs().list_directory(&path) {
            text.push('\n');
            text.push_str(&item);
        }
        Ok(Output::Text(text))
    }
}

/// Print working directory.
pub static PWD: PwdCommand = PwdCommand;

pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn description(&self) -> &'static str {
        "Print current working directory"
    }

    fn category(&self) -> &'static str {
        "filesystem"
    }

    fn execute(&self, _ctx: &CommandContext<'_>, session: &mut Session) -> Result<Output> {
        Ok(Output::text(session.cwd()))
    }
}
