use chrono::NaiveDate;
use serde::Serialize;

use super::catalog::KnowledgeBase;
use super::domain::{Dosha, ScheduleSlot, UserProfile};
use super::error::AdvisoryError;
use super::guidance::{daily_tip, TimeOfDay};
use super::remedy::RemedyBook;
use super::scoring::{score_questionnaire, DoshaAssessment};

/// Per-user state owned by whichever front end is driving the conversation.
#[derive(Debug, Clone, Default)]
pub struct AdvisorySession {
    profile: Option<UserProfile>,
    assessment: Option<DoshaAssessment>,
    remedies: RemedyBook,
}

/// Daily routine tailored to the assessed dosha.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutinePlan<'a> {
    pub primary: Dosha,
    pub time_of_day: TimeOfDay,
    pub suggestion: &'static str,
    pub tip_of_the_day: &'static str,
    pub schedule: &'a [ScheduleSlot],
    pub dosha_tips: &'a [&'static str],
}

impl AdvisorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_profile(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Scores and remembers the questionnaire. A rejected questionnaire keeps the
    /// previous assessment.
    pub fn complete_questionnaire(
        &mut self,
        answers: &[u8],
    ) -> Result<&DoshaAssessment, AdvisoryError> {
        let assessment = score_questionnaire(answers)?;
        Ok(self.assessment.insert(assessment))
    }

    pub fn assessment(&self) -> Option<&DoshaAssessment> {
        self.assessment.as_ref()
    }

    pub fn primary_dosha(&self) -> Option<Dosha> {
        self.assessment.as_ref().map(|assessment| assessment.primary)
    }

    pub fn remedies(&self) -> &RemedyBook {
        &self.remedies
    }

    pub fn remedies_mut(&mut self) -> &mut RemedyBook {
        &mut self.remedies
    }

    /// Available only once a questionnaire has been scored.
    pub fn routine_plan<'a>(
        &self,
        knowledge: &'a KnowledgeBase,
        hour: u32,
        date: NaiveDate,
    ) -> Option<RoutinePlan<'a>> {
        let primary = self.primary_dosha()?;
        let time_of_day = TimeOfDay::from_hour(hour);
        Some(RoutinePlan {
            primary,
            time_of_day,
            suggestion: time_of_day.suggestion(),
            tip_of_the_day: daily_tip(date),
            schedule: knowledge.standard_schedule(),
            dosha_tips: knowledge.daily_routine_tips(primary.key()),
        })
    }
}
