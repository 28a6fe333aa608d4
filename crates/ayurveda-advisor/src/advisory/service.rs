use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use super::catalog::KnowledgeBase;
use super::error::AdvisoryError;
use super::recommend::{SymptomReport, WellnessReport};
use super::remedy::RemedyBook;
use super::scoring::score_questionnaire;

/// Shared entry point for the HTTP layer: read-only tables plus one remedy book.
pub struct AdvisoryService {
    knowledge: KnowledgeBase,
    remedies: Mutex<RemedyBook>,
}

impl Default for AdvisoryService {
    fn default() -> Self {
        Self::new(KnowledgeBase::standard(), RemedyBook::standard())
    }
}

impl AdvisoryService {
    pub fn new(knowledge: KnowledgeBase, remedies: RemedyBook) -> Self {
        Self {
            knowledge,
            remedies: Mutex::new(remedies),
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn assess_questionnaire(&self, answers: &[u8]) -> Result<WellnessReport, AdvisoryError> {
        let assessment = match score_questionnaire(answers) {
            Ok(assessment) => assessment,
            Err(err) => {
                debug!(%err, "questionnaire rejected");
                return Err(err);
            }
        };
        info!(
            primary = assessment.primary.key(),
            vata = assessment.tally.vata,
            pitta = assessment.tally.pitta,
            kapha = assessment.tally.kapha,
            "questionnaire scored"
        );
        Ok(self.knowledge.wellness_report(assessment))
    }

    pub fn assess_symptoms<S: AsRef<str>>(&self, symptoms: &[S]) -> SymptomReport {
        let report = self.knowledge.symptom_report(symptoms);
        info!(
            symptoms = symptoms.len(),
            primary = report.assessment.primary.key(),
            keyword_hits = report.assessment.tally.total(),
            "symptoms analyzed"
        );
        report
    }

    pub fn lookup_remedy(&self, symptom: &str) -> String {
        let book = self.remedy_book();
        let found = book.contains(symptom);
        debug!(symptom, found, "remedy lookup");
        book.lookup(symptom).to_string()
    }

    pub fn add_remedy(&self, symptom: &str, remedy: impl Into<String>) -> String {
        let message = self.remedy_book().add(symptom, remedy);
        info!(symptom, "remedy recorded");
        message
    }

    // A panic while holding the lock cannot leave the map half-written.
    fn remedy_book(&self) -> MutexGuard<'_, RemedyBook> {
        self.remedies.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
