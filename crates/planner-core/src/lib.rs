//! `planner-core` — the pure half of the AI project planner.
//!
//! Everything here is deterministic and side-effect free: building the
//! instruction prompt from a [`PlanRequest`], and turning the model's raw
//! text into the [`NormalizedPlan`] returned to callers. Network access lives
//! in `completion-client`; HTTP serving in `planner-server`.

pub mod config;
pub mod error;
pub mod flatten;
pub mod normalize;
pub mod prompt;
pub mod sections;
pub mod types;

pub use config::Config;
pub use error::{PlannerError, Result};
pub use normalize::{normalize, NormalizedPlan, PARSE_ERROR_MESSAGE};
pub use prompt::{build_prompt, PromptStyle};
pub use sections::{split_sections, SectionMap};
pub use types::{NormalizationMode, PlanRequest, PlanResponse};
