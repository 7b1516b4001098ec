//! Tier recommendation engine for project intakes.
//!
//! Four stateless analyzers score budget, timeline, project type, and asset availability
//! against a [`TierConfiguration`]; the aggregator blends them, applies hard floors, and
//! reports confidence, red flags, and adjacent alternatives. Everything under this module
//! except [`router`] is pure.

pub mod analyzers;
pub mod domain;
mod engine;
pub mod recommendation;
pub mod router;
mod store;
pub mod table;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    BudgetInput, BudgetRange, Confidence, FactorCategory, IntakeData, OverrideRule, ProjectType,
    RoutingDisposition, RoutingFactor, Tier, TierRecommendation, TimelineCategory, TimelineInput,
};
pub use engine::{recommend_tier, TierRecommendationEngine};
pub use recommendation::RedFlag;
pub use router::intake_router;
pub use store::TierConfigurationStore;
pub use table::{TierConfiguration, TierDefinition, TierTableError};
pub use validation::{missing_scoring_fields, validate_intake, IntakeDraft, InvalidInput};
