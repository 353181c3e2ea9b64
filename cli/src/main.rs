//! Demo binary: drives the real pipeline with a scripted editing session.
//!
//! A [`SimWorkspace`] plays the editor host, the display view renders to
//! stdout, and the analysis endpoint comes from `~/.coach/config.toml`
//! (default `http://127.0.0.1:8000/api/analyze/code`). With no backend
//! running the panel shows the canonical error — which is itself the
//! behavior worth demonstrating.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use coach::{CoachConfig, HostWindow, SimWorkspace, activate};
use coach_panel::Surface;
use coach_watch::{HostDiagnostic, HostSeverity};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

/// Window that renders the panel view to stdout.
struct StdoutWindow;

impl HostWindow for StdoutWindow {
    fn open_view(&self, view_id: &str) -> Surface {
        let (surface, mut view) = Surface::channel();
        println!("[{view_id}] {}", view.content());
        let view_id = view_id.to_string();
        tokio::spawn(async move {
            while view.next_render().await.is_some() {
                println!("[{view_id}]\n{}", view.content());
            }
        });
        surface
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = CoachConfig::load();
    let workspace = Arc::new(SimWorkspace::new());
    let handle = activate(&config, workspace.clone(), &StdoutWindow);

    // Scripted session: open a Python file, introduce a bug, fix it.
    workspace.open("python", "x=1\n");
    workspace.edit("x=1\ny=\n");
    workspace.set_diagnostics(vec![HostDiagnostic::new(
        "invalid syntax",
        1,
        HostSeverity::Error,
    )]);
    workspace.edit("x=1\ny=\n");
    tokio::time::sleep(Duration::from_millis(800)).await;

    workspace.set_diagnostics(vec![]);
    workspace.edit("x=1\ny=2\n");
    tokio::time::sleep(Duration::from_millis(800)).await;

    // Closing the feed ends the watcher loop.
    workspace.shutdown();
    handle.join().await;
    Ok(())
}
