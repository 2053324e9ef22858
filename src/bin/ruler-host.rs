//! Extension messaging host for the vintage ruler.
//!
//! `ruler-host serve` is the content responder: it reads requests from stdin
//! and writes responses to stdout using native-messaging frames, so nothing
//! else may be printed to stdout in that mode. `ruler-host toggle` plays the
//! background dispatcher against a spawned `serve` process.

use clap::{Parser, Subcommand};
use std::process::Stdio;
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use vintage_ruler::MessagingError;
use vintage_ruler::messaging::{
    ContentResponder, ContentTarget, Dispatcher, Request, Response, read_message, write_message,
};

#[derive(Parser, Debug)]
#[command(version, about = "Messaging host for the vintage ruler overlay")]
struct Cli {
    #[command(subcommand)]
    command: HostCommand,
}

#[derive(Subcommand, Debug)]
enum HostCommand {
    /// Answer ping/toggle-ruler requests on stdin/stdout.
    Serve,
    /// Toggle the overlay, starting a responder if none answers.
    Toggle {
        /// Number of toggle requests to send.
        #[arg(short, long, default_value_t = 1)]
        times: usize,
    },
}

// ============================================================================
// Child process target
// ============================================================================

/// A responder running as a `ruler-host serve` child process.
struct ResponderProcess {
    child: Child,
    stdin: ChildStdin,
    stdout: ChildStdout,
}

#[derive(Default)]
struct ProcessTarget {
    process: Option<ResponderProcess>,
}

impl ContentTarget for ProcessTarget {
    async fn send(&mut self, request: Request) -> Result<Response, MessagingError> {
        let process = self.process.as_mut().ok_or(MessagingError::NotConnected)?;
        write_message(&mut process.stdin, &request).await?;
        read_message(&mut process.stdout)
            .await?
            .ok_or(MessagingError::Closed)
    }

    async fn inject(&mut self) -> Result<(), MessagingError> {
        let exe = std::env::current_exe()?;
        let mut child = Command::new(exe)
            .arg("serve")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let stdin = child.stdin.take().ok_or(MessagingError::NotConnected)?;
        let stdout = child.stdout.take().ok_or(MessagingError::NotConnected)?;
        log::info!("Started content responder (pid {:?})", child.id());

        self.process = Some(ResponderProcess {
            child,
            stdin,
            stdout,
        });
        Ok(())
    }
}

impl ProcessTarget {
    /// Closes the responder's stdin and waits for it to exit.
    async fn shutdown(self) -> std::io::Result<()> {
        if let Some(ResponderProcess {
            mut child, stdin, ..
        }) = self.process
        {
            drop(stdin);
            let status = child.wait().await?;
            log::debug!("Content responder exited with {status}");
        }
        Ok(())
    }
}

// ============================================================================
// Main
// ============================================================================

async fn serve() -> Result<(), MessagingError> {
    log::info!("Vintage ruler content responder loaded");
    let mut stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    let mut responder = ContentResponder::new();
    responder.serve(&mut stdin, &mut stdout).await
}

async fn toggle(times: usize) -> std::io::Result<()> {
    let mut dispatcher = Dispatcher::new(ProcessTarget::default());

    for _ in 0..times {
        match dispatcher.toggle_ruler().await {
            Some(response) => println!("{}", serde_json::to_string(&response)?),
            None => println!("toggle-ruler failed, see log for details"),
        }
    }

    dispatcher.into_target().shutdown().await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        HostCommand::Serve => serve().await?,
        HostCommand::Toggle { times } => toggle(times).await?,
    }

    Ok(())
}
