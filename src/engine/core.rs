use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::config::{DASHBOARD, PERSISTENCE};
use crate::models::{DashboardData, Post};

use super::messages::{RefreshRequest, RefreshResult, StateMessage};
use super::state::{AppState, DashboardState, ThemePreference};
use super::worker;

pub struct DashboardEngine {
    /// Dashboard front buffer + refresh bookkeeping
    pub dashboard: DashboardState,

    /// Blog-side UI state (posts, bodies, query, theme)
    pub app: AppState,

    /// Worker Communication
    job_tx: UnboundedSender<RefreshRequest>,
    result_rx: UnboundedReceiver<RefreshResult>,

    refresh_interval: Duration,
    offline: bool,
    next_cycle: u64,
}

impl DashboardEngine {
    /// Initialize the engine and spawn the refresh worker.
    /// Must run inside a tokio runtime.
    pub fn new(app: AppState, offline: bool) -> Self {
        let (job_tx, job_rx) = unbounded_channel::<RefreshRequest>();
        let (result_tx, result_rx) = unbounded_channel::<RefreshResult>();

        worker::spawn_refresh_worker(job_rx, result_tx);

        Self {
            dashboard: DashboardState::default(),
            app,
            job_tx,
            result_rx,
            refresh_interval: Duration::from_secs(DASHBOARD.refresh_interval_secs),
            offline,
            next_cycle: 0,
        }
    }

    /// THE PUMP.
    /// Call on a cadence. Drains finished cycles into the front buffer, then
    /// dispatches the next cycle when due. A cycle in flight blocks dispatch
    /// entirely, so refreshes never overlap. Returns TRUE while busy.
    pub fn update(&mut self) -> bool {
        // 1. Process Results (Swap Buffers)
        while let Ok(result) = self.result_rx.try_recv() {
            self.handle_refresh_result(result);
        }

        // 2. Dispatch when due
        if !self.dashboard.is_refreshing && self.refresh_due() {
            self.dispatch_refresh();
        }

        self.dashboard.is_refreshing
    }

    /// Force an immediate cycle (e.g. user click). Ignored while one is
    /// already in flight.
    pub fn force_refresh(&mut self) {
        if !self.dashboard.is_refreshing {
            self.dispatch_refresh();
        }
    }

    /// Route a UI message into the app state; persists the theme on change.
    pub fn apply_message(&mut self, msg: StateMessage) {
        let theme_changed = self.app.apply(msg);
        if theme_changed {
            let pref = ThemePreference {
                theme: self.app.theme,
            };
            if let Err(e) = pref.save(Path::new(PERSISTENCE.theme_state_path)) {
                log::warn!("Failed to persist theme preference: {:#}", e);
            }
        }
    }

    // --- Accessors for the presentation layer ---

    pub fn current_data(&self) -> Option<Arc<DashboardData>> {
        self.dashboard.data.clone()
    }

    pub fn visible_posts(&self) -> Vec<&Post> {
        self.app.visible_posts()
    }

    pub fn status_msg(&self) -> Option<String> {
        if self.dashboard.is_refreshing {
            Some(format!(
                "Refreshing (cycle {})",
                self.next_cycle.saturating_sub(1)
            ))
        } else {
            self.dashboard
                .last_error
                .as_ref()
                .map(|e| format!("Last refresh failed: {e}"))
        }
    }

    // --- INTERNAL LOGIC ---

    fn refresh_due(&self) -> bool {
        match self.dashboard.last_refresh_at {
            // Startup: fetch immediately
            None => true,
            Some(at) => at.elapsed() >= self.refresh_interval,
        }
    }

    fn dispatch_refresh(&mut self) {
        self.dashboard.is_refreshing = true;

        let req = RefreshRequest {
            cycle: self.next_cycle,
            offline: self.offline,
        };
        self.next_cycle += 1;

        // Send to worker. If the receiver is dead, we ignore the error
        // (engine shutting down).
        let _ = self.job_tx.send(req);
    }

    fn handle_refresh_result(&mut self, result: RefreshResult) {
        match result.result {
            Ok(data) => {
                if data.has_fallback_data() {
                    log::info!(
                        "Cycle {} completed in {}ms with fallback data (quote={}, history={}, sentiment={}, mvrv={})",
                        result.cycle,
                        result.duration_ms,
                        data.quote.origin,
                        data.price_history.origin,
                        data.sentiment.origin,
                        data.mvrv.origin
                    );
                } else {
                    log::info!(
                        "Cycle {} completed in {}ms, all signals live",
                        result.cycle,
                        result.duration_ms
                    );
                }
                self.dashboard.update_buffer(data);
            }
            Err(e) => {
                log::error!("Refresh cycle {} failed: {}", result.cycle, e);
                self.dashboard.last_error = Some(e);
                self.dashboard.is_refreshing = false;
                // Failed cycles still respect the interval before retrying
                self.dashboard.last_refresh_at = Some(std::time::Instant::now());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::state::Theme;
    use crate::models::PostCollection;

    fn engine() -> DashboardEngine {
        let app = AppState::new(PostCollection::default(), "test", Theme::Dark);
        DashboardEngine::new(app, true)
    }

    #[tokio::test]
    async fn test_first_update_dispatches_and_serializes() {
        let mut engine = engine();

        assert!(engine.update(), "Startup dispatch marks the engine busy");
        assert!(engine.dashboard.is_refreshing);
        let cycles_before = engine.next_cycle;

        // Pumping again while in flight must not dispatch a second cycle
        engine.update();
        engine.update();
        assert_eq!(engine.next_cycle, cycles_before, "Refreshes never overlap");
    }

    #[tokio::test]
    async fn test_completed_cycle_lands_in_front_buffer() {
        let mut engine = engine();
        engine.update();

        // Wait for the offline cycle to finish, then pump it in
        let mut attempts = 0;
        while engine.dashboard.completed_cycles == 0 && attempts < 200 {
            tokio::time::sleep(Duration::from_millis(10)).await;
            engine.update();
            attempts += 1;
        }

        assert_eq!(engine.dashboard.completed_cycles, 1);
        let data = engine.current_data().expect("front buffer populated");
        assert!(!data.merged.is_empty());
        assert!(!engine.dashboard.is_refreshing);
        assert!(engine.dashboard.last_refresh_at.is_some());
    }

    #[tokio::test]
    async fn test_next_dispatch_waits_for_interval() {
        let mut engine = engine();
        engine.update();
        let mut attempts = 0;
        while engine.dashboard.completed_cycles == 0 && attempts < 200 {
            tokio::time::sleep(Duration::from_millis(10)).await;
            engine.update();
            attempts += 1;
        }

        // Cycle done; the 60s interval has clearly not elapsed yet
        assert!(!engine.update(), "No new dispatch before the interval");
        assert_eq!(engine.next_cycle, 1);

        // But an explicit user refresh goes through immediately
        engine.force_refresh();
        assert_eq!(engine.next_cycle, 2);
    }
}
