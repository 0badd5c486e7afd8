use std::sync::Arc;

use log::debug;
use tokio::sync::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;

use crate::controller::ghin::{
    GhinClient, acquire_installation_token, authenticate, fetch_all_scores,
};
use crate::controller::score::{compute_hole_stats, extract_courses};
use crate::error::CoreError;
use crate::model::{CourseSummary, FetchSummary, HoleStat, Round, Session};

#[derive(Default)]
struct SessionState {
    session: Option<Session>,
    rounds: Vec<Round>,
}

/// Owns the signed-in session and the fetched round history. One sign-in
/// pipeline at a time; logout cancels an in-flight pipeline and clears
/// state, and the pipeline re-checks cancellation under the write lock so
/// a stale response can never repopulate what logout cleared.
pub struct SessionManager {
    client: GhinClient,
    state: Arc<RwLock<SessionState>>,
    run_lock: Mutex<()>,
    cancel: Mutex<CancellationToken>,
}

impl SessionManager {
    #[must_use]
    pub fn new(client: GhinClient) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(SessionState::default())),
            run_lock: Mutex::new(()),
            cancel: Mutex::new(CancellationToken::new()),
        }
    }

    /// Signs in and pulls the full round history. The session commits once
    /// login succeeds, the round set once the fetch completes; any failure
    /// resets to signed-out before the error surfaces.
    ///
    /// # Errors
    ///
    /// Will return `Err` with `InProgress` when a pipeline is already
    /// running, `Canceled` when logout aborts this one, or whatever the
    /// token exchange, login, or history fetch failed with
    pub async fn login_and_fetch(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<FetchSummary, CoreError> {
        let Ok(_running) = self.run_lock.try_lock() else {
            return Err(CoreError::InProgress);
        };

        let token = {
            let mut cancel = self.cancel.lock().await;
            *cancel = CancellationToken::new();
            cancel.clone()
        };

        let result = tokio::select! {
            outcome = self.run_pipeline(identifier, secret, &token) => outcome,
            () = token.cancelled() => Err(CoreError::Canceled),
        };

        if result.is_err() {
            let mut state = self.state.write().await;
            state.session = None;
            state.rounds.clear();
        }

        result
    }

    async fn run_pipeline(
        &self,
        identifier: &str,
        secret: &str,
        token: &CancellationToken,
    ) -> Result<FetchSummary, CoreError> {
        let install_token = acquire_installation_token(&self.client).await?;
        let session = authenticate(&self.client, identifier, secret, &install_token).await?;

        {
            let mut state = self.state.write().await;
            if token.is_cancelled() {
                return Err(CoreError::Canceled);
            }
            state.session = Some(session.clone());
        }

        let rounds = fetch_all_scores(&self.client, &session).await?;
        let summary = FetchSummary {
            total_rounds: rounds.len(),
            with_hole_detail: rounds.iter().filter(|r| r.has_hole_detail()).count(),
        };
        debug!(
            "fetched {} rounds, {} with hole detail",
            summary.total_rounds, summary.with_hole_detail
        );

        {
            let mut state = self.state.write().await;
            if token.is_cancelled() {
                return Err(CoreError::Canceled);
            }
            state.rounds = rounds;
        }

        Ok(summary)
    }

    /// Cancels any in-flight pipeline and drops session and rounds in one
    /// critical section.
    pub async fn logout(&self) {
        let cancel = self.cancel.lock().await;
        let mut state = self.state.write().await;
        cancel.cancel();
        state.session = None;
        state.rounds.clear();
    }

    pub async fn session(&self) -> Option<Session> {
        self.state.read().await.session.clone()
    }

    pub async fn rounds(&self) -> Vec<Round> {
        self.state.read().await.rounds.clone()
    }

    pub async fn courses(&self) -> Vec<CourseSummary> {
        extract_courses(&self.state.read().await.rounds)
    }

    pub async fn hole_stats(&self, course_id: i64) -> Option<Vec<HoleStat>> {
        compute_hole_stats(&self.state.read().await.rounds, course_id)
    }
}
