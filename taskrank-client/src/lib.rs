//! taskrank-client: scoring service client and the analysis session that
//! drives it.

pub mod api;
pub mod error;
pub mod session;

pub use api::{HttpScoringClient, ScoringBackend, API_BASE_PATH, DEFAULT_TIMEOUT};
pub use error::{RemoteError, SessionError};
pub use session::{AnalysisSession, Lifecycle, Notice};
