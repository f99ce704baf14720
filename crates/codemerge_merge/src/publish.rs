use anyhow::{Context, Result};
use log::debug;
use std::io::{self, Read, Write};
#[cfg(target_os = "linux")]
use std::{
    path::Path,
    process::{Command, Stdio},
};

/// Set in the environment of a `codemerge` process that should only take
/// ownership of the clipboard with the text it reads from stdin.
pub const CLIPBOARD_OWNER_ENV: &str = "CODEMERGE_CLIPBOARD_OWNER";

/// Destination for the merged text.
pub trait Publisher {
    fn publish(&mut self, text: &str) -> Result<()>;
}

/// Places the text on the system clipboard.
///
/// On Linux the selection is served by the process that set it and vanishes
/// when that process exits, so the text is handed to a detached copy of the
/// current executable which keeps serving it until another program takes
/// the clipboard over.
#[derive(Debug, Default)]
pub struct ClipboardPublisher;

impl Publisher for ClipboardPublisher {
    #[cfg(target_os = "linux")]
    fn publish(&mut self, text: &str) -> Result<()> {
        // Fail here, in the foreground, when there is no display to talk to
        arboard::Clipboard::new().context("Failed to access the system clipboard")?;

        let exe = std::env::current_exe().context("Failed to locate the codemerge executable")?;
        debug!("Handing {} bytes to clipboard owner {}", text.len(), exe.display());
        let mut child = clipboard_owner_command(&exe)
            .spawn()
            .context("Failed to start the clipboard owner process")?;
        let mut stdin = child.stdin.take().context("Clipboard owner process has no stdin")?;
        stdin.write_all(text.as_bytes()).context("Failed to send text to the clipboard owner")?;
        Ok(())
    }

    #[cfg(not(target_os = "linux"))]
    fn publish(&mut self, text: &str) -> Result<()> {
        debug!("Copying {} bytes to the clipboard", text.len());
        let mut clipboard =
            arboard::Clipboard::new().context("Failed to access the system clipboard")?;
        clipboard.set_text(text).context("Failed to copy text to the clipboard")?;
        Ok(())
    }
}

#[cfg(target_os = "linux")]
fn clipboard_owner_command(exe: &Path) -> Command {
    use std::os::unix::process::CommandExt;

    let mut cmd = Command::new(exe);
    cmd.env(CLIPBOARD_OWNER_ENV, "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .process_group(0);
    cmd
}

/// Read all of stdin and own the clipboard with it.
///
/// On Linux this blocks until another program replaces the clipboard contents.
pub fn serve_clipboard_from_stdin() -> Result<()> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text).context("Failed to read clipboard text from stdin")?;
    debug!("Serving {} bytes on the clipboard", text.len());

    let mut clipboard =
        arboard::Clipboard::new().context("Failed to access the system clipboard")?;
    #[cfg(target_os = "linux")]
    {
        use arboard::SetExtLinux;
        clipboard.set().wait().text(text).context("Failed to copy text to the clipboard")?;
    }
    #[cfg(not(target_os = "linux"))]
    clipboard.set_text(text).context("Failed to copy text to the clipboard")?;
    Ok(())
}

/// Writes the text to any writer, ending it with a newline.
pub struct WriterPublisher<W: Write> {
    writer: W,
}

impl<W: Write> WriterPublisher<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Publisher for WriterPublisher<W> {
    fn publish(&mut self, text: &str) -> Result<()> {
        debug!("Writing {} bytes", text.len());
        self.writer.write_all(text.as_bytes())?;
        if !text.is_empty() && !text.ends_with('\n') {
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
