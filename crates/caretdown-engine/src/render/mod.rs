//! # Rendering plans
//!
//! Output surface of the engine: the [`DecorationPlan`] the host turns into
//! actual UI. The core decides only *which* byte ranges stay raw markdown
//! and *which* get replaced by a widget; it never touches presentation.

pub mod plan;
pub mod planner;

pub use plan::{DecorationPlan, Mode, PlanEntry, PlanOptions, WidgetKind};
pub use planner::plan_decorations;
