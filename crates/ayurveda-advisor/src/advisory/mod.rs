//! Constitution scoring and the static knowledge tables behind every recommendation.
//!
//! Scoring is pure: callers keep any per-user state in an [`AdvisorySession`], and the
//! HTTP layer shares a single [`AdvisoryService`].

mod catalog;
pub mod domain;
mod error;
pub mod guidance;
mod recommend;
mod remedy;
pub mod router;
pub mod scoring;
mod service;
mod session;

#[cfg(test)]
mod tests;

pub use catalog::KnowledgeBase;
pub use domain::{
    DietaryAdvice, Dosha, DoshaProfile, Gender, Herb, ScheduleSlot, SymptomRemedy, UserProfile,
    YogaAsana,
};
pub use error::AdvisoryError;
pub use guidance::{daily_tip, seasonal_advice, Season, TimeOfDay};
pub use recommend::{HerbFit, SymptomReport, WellnessReport, SYMPTOM_HERB_LIMIT};
pub use remedy::{RemedyBook, MISSING_REMEDY};
pub use router::advisory_router;
pub use scoring::{
    analyze_symptoms, prakriti_summary, score_questionnaire, AssessmentSource, DoshaAssessment,
    DoshaTally, ScoreDistribution,
};
pub use service::AdvisoryService;
pub use session::{AdvisorySession, RoutinePlan};
