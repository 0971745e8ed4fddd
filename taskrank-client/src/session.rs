//! AnalysisSession: the state one user works against.
//!
//! Owns the draft queue, strategy selector, bulk buffer, last result set,
//! request lifecycle and the single notice slot. Round-trips take
//! `&mut self`, so a session can never have two requests in flight.
//!
//! Lifecycle per round-trip:
//!   Idle/Succeeded/Failed -> Pending -> Succeeded | Failed
//! Local guards (empty queue, bad input) never enter Pending.

use taskrank_core::{
    normalize, DraftQueue, RawTask, ScoredTask, Strategy, StrategySelector, ValidationError,
};
use taskrank_ingest::BulkIngestor;
use tracing::{debug, info, warn};

use crate::api::ScoringBackend;
use crate::error::{RemoteError, SessionError};

pub const SUGGESTIONS_LOADED: &str = "Loaded saved suggestions.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// The one user-facing message. A new outcome always replaces the old one,
/// so a stale error never sits next to a fresh success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

pub struct AnalysisSession<B> {
    backend: B,
    drafts: DraftQueue,
    strategy: StrategySelector,
    bulk: BulkIngestor,
    results: Vec<ScoredTask>,
    lifecycle: Lifecycle,
    notice: Option<Notice>,
}

impl<B: ScoringBackend> AnalysisSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            drafts: DraftQueue::new(),
            strategy: StrategySelector::default(),
            bulk: BulkIngestor::new(),
            results: Vec::new(),
            lifecycle: Lifecycle::Idle,
            notice: None,
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy.set(strategy);
        self
    }

    pub fn drafts(&self) -> &DraftQueue {
        &self.drafts
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy.get()
    }

    pub fn results(&self) -> &[ScoredTask] {
        &self.results
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.lifecycle == Lifecycle::Pending
    }

    pub fn bulk_mut(&mut self) -> &mut BulkIngestor {
        &mut self.bulk
    }

    /// Normalize one manual entry and queue it. Returns the new queue length.
    pub fn add_task(&mut self, raw: RawTask) -> Result<usize, SessionError> {
        match normalize(raw) {
            Ok(task) => {
                debug!(title = task.title(), "queued task");
                self.drafts.append(task);
                self.notice = None;
                Ok(self.drafts.len())
            }
            Err(e) => Err(self.reject(e)),
        }
    }

    /// Ingest whatever is in the bulk buffer. All or nothing.
    pub fn import_bulk(&mut self) -> Result<usize, SessionError> {
        match self.bulk.ingest_into(&mut self.drafts) {
            Ok(added) => {
                info!(added, queued = self.drafts.len(), "bulk import");
                self.notice = Some(Notice::Success(format!("Added {added} tasks.")));
                Ok(added)
            }
            Err(e) => Err(self.reject(e)),
        }
    }

    pub fn import_bulk_text(&mut self, text: impl Into<String>) -> Result<usize, SessionError> {
        self.bulk.set_buffer(text);
        self.import_bulk()
    }

    pub fn clear_drafts(&mut self) {
        self.drafts.clear();
    }

    pub fn select_strategy(&mut self, id: &str) -> Result<Strategy, SessionError> {
        self.strategy.select(id).map_err(|e| self.reject(e))
    }

    /// Send the queued drafts for scoring under the active strategy.
    ///
    /// An empty queue fails with `NoTasksQueued` before any request is made.
    /// On remote failure the previous results stay in place.
    pub async fn analyze(&mut self) -> Result<&[ScoredTask], SessionError> {
        if self.drafts.is_empty() {
            return Err(self.reject(ValidationError::NoTasksQueued));
        }

        let tasks = self.drafts.snapshot();
        let strategy = self.strategy.get();
        self.begin();

        let outcome = self.backend.analyze(&tasks, strategy).await;
        self.settle(outcome, |n| format!("Analyzed {n} tasks."))
    }

    /// Load the service's saved suggestions. Independent of the draft queue.
    pub async fn suggest(&mut self) -> Result<&[ScoredTask], SessionError> {
        self.begin();
        let outcome = self.backend.suggest().await;
        self.settle(outcome, |_| SUGGESTIONS_LOADED.to_string())
    }

    fn begin(&mut self) {
        self.notice = None;
        self.lifecycle = Lifecycle::Pending;
    }

    fn settle(
        &mut self,
        outcome: Result<Vec<ScoredTask>, RemoteError>,
        success: impl FnOnce(usize) -> String,
    ) -> Result<&[ScoredTask], SessionError> {
        match outcome {
            Ok(results) => {
                info!(results = results.len(), "scoring round-trip succeeded");
                self.notice = Some(Notice::Success(success(results.len())));
                self.results = results;
                self.lifecycle = Lifecycle::Succeeded;
                Ok(&self.results)
            }
            Err(e) => {
                warn!(error = %e, "scoring round-trip failed");
                self.notice = Some(Notice::Error(e.message()));
                self.lifecycle = Lifecycle::Failed;
                Err(e.into())
            }
        }
    }

    fn reject(&mut self, e: ValidationError) -> SessionError {
        self.notice = Some(Notice::Error(e.to_string()));
        e.into()
    }
}
