use std::time::Duration;

use tokio::{task, time::interval};

use crate::{app::util::time::current_time_in_secs, sessions, AppState};

const SWEEP_INTERVAL_SECS: u64 = 600;

pub fn spawn(state: AppState) {
    tracing::debug!("janitor spawned");

    task::spawn(async move {
        let mut interval = interval(Duration::from_secs(SWEEP_INTERVAL_SECS));

        loop {
            interval.tick().await;
            cleanup_sessions(&state).await;
        }
    });
}

async fn cleanup_sessions(state: &AppState) {
    let cutoff = current_time_in_secs().saturating_sub(state.envy.session_ttl_secs);
    let removed = sessions::service::evict_sessions_older_than(cutoff, &state.sessions).await;

    if removed > 0 {
        tracing::debug!("evicted {} stale session(s)", removed);
    }
}
