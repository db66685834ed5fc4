//! # URI Openers
//!
//! Implementations of [`UriOpener`] for the binary:
//! - [`SystemOpener`] hands the URI to the desktop (browser / mail client)
//! - [`EchoOpener`] prints it instead (`--dry-run`)

use std::io::Write;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::JoinHandle;
use xconcept_core::{UriOpener, XconceptError};

const WINDOWS_ARGS: &[&str] = &["url.dll,FileProtocolHandler"];
const NO_ARGS: &[&str] = &[];

/// Opens URIs with the platform's default handler.
///
/// The child process is spawned and reaped on a background thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl SystemOpener {
    /// Launcher program and leading arguments for `os`
    /// (a `std::env::consts::OS` value).
    ///
    /// Windows goes through `rundll32` rather than `cmd /C start`, which
    /// would split a `mailto:` link at its `&`.
    fn launcher(os: &str) -> (&'static str, &'static [&'static str]) {
        match os {
            "windows" => ("rundll32", WINDOWS_ARGS),
            "macos" => ("open", NO_ARGS),
            _ => ("xdg-open", NO_ARGS),
        }
    }

    fn command_for(os: &str, uri: &str) -> Command {
        let (program, args) = Self::launcher(os);
        let mut cmd = Command::new(program);
        cmd.args(args)
            .arg(uri)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

impl UriOpener for SystemOpener {
    fn open(&mut self, uri: &str) -> Result<(), XconceptError> {
        let child = Self::command_for(std::env::consts::OS, uri)
            .spawn()
            .map_err(|e| XconceptError::DispatchError(format!("Failed to launch opener: {}", e)))?;
        if let Err(e) = reap(child) {
            tracing::warn!(error = %e, "Could not start reaper thread");
        }
        Ok(())
    }
}

/// Wait for `child` on a detached thread so it does not linger as a zombie.
fn reap(mut child: Child) -> std::io::Result<JoinHandle<Option<ExitStatus>>> {
    std::thread::Builder::new()
        .name("opener-reaper".to_string())
        .spawn(move || match child.wait() {
            Ok(status) => {
                tracing::debug!(%status, "Opener exited");
                Some(status)
            }
            Err(e) => {
                tracing::debug!(error = %e, "Could not wait for opener");
                None
            }
        })
}

/// Writes each URI on its own line instead of opening it.
#[derive(Debug)]
pub struct EchoOpener<W> {
    out: W,
}

impl<W: Write> EchoOpener<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> UriOpener for EchoOpener<W> {
    fn open(&mut self, uri: &str) -> Result<(), XconceptError> {
        writeln!(self.out, "{}", uri).map_err(|e| XconceptError::IoError(e.to_string()))
    }
}
