//! Process-wide activation: construct the panel, open its view, and start
//! the watcher.

use std::sync::Arc;

use coach_client::AnalysisClient;
use coach_panel::{Panel, Surface};
use coach_watch::{EditorHost, Watcher};
use tokio::task::JoinHandle;

use crate::config::CoachConfig;

/// View identifier the panel is registered under.
pub const PANEL_VIEW_ID: &str = "coach.panel";

/// Host capability for view management: registering the named view and
/// forcing it open.
pub trait HostWindow {
    /// Create (or reveal) the named view and hand back the message surface
    /// that renders into it.
    fn open_view(&self, view_id: &str) -> Surface;
}

/// Handle returned by [`activate`]. Owns the panel and the watcher task.
///
/// There is no teardown beyond host shutdown: the watcher ends when the
/// host drops its change feed.
pub struct CoachHandle {
    panel: Arc<Panel>,
    watcher: JoinHandle<()>,
}

impl CoachHandle {
    #[must_use]
    pub fn panel(&self) -> &Arc<Panel> {
        &self.panel
    }

    /// Wait for the watcher task to finish (i.e. the host closed its feed).
    pub async fn join(self) {
        if let Err(e) = self.watcher.await {
            tracing::warn!("watcher task ended abnormally: {e}");
        }
    }
}

/// Activate the pipeline: one panel, one view, one watcher.
///
/// Constructs the panel, opens the [`PANEL_VIEW_ID`] view through the host
/// window capability, resolves the surface, and spawns the watcher on the
/// host's change feed. Everything downstream receives its dependencies
/// here — there is no global state.
pub fn activate(
    config: &CoachConfig,
    host: Arc<dyn EditorHost>,
    window: &dyn HostWindow,
) -> CoachHandle {
    let panel = Arc::new(Panel::new());

    let surface = window.open_view(PANEL_VIEW_ID);
    panel.resolve(surface);

    let client = AnalysisClient::with_timeout(
        config.endpoint.clone(),
        Arc::clone(&panel),
        config.request_timeout(),
    );
    tracing::info!(endpoint = %config.endpoint, view = PANEL_VIEW_ID, "coach activated");

    let subscription = host.subscribe();
    let watcher = Watcher::new(host, client).spawn(subscription);

    CoachHandle { panel, watcher }
}
