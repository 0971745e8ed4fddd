//! taskrank-core: task model, validation, draft queue and tiering for the
//! task analyzer. Pure; no I/O.

pub mod draft_queue;
pub mod error;
pub mod normalize;
pub mod scored;
pub mod strategy;
pub mod task;
pub mod tier;

pub use draft_queue::DraftQueue;
pub use error::ValidationError;
pub use normalize::{normalize, split_dependencies};
pub use scored::ScoredTask;
pub use strategy::{Strategy, StrategySelector};
pub use task::{RawTask, Task};
pub use tier::{classify, Tier};
