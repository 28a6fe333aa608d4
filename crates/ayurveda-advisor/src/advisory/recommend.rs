use serde::Serialize;

use super::catalog::KnowledgeBase;
use super::domain::{DietaryAdvice, Dosha, DoshaProfile, Herb, SymptomRemedy, YogaAsana};
use super::scoring::{AssessmentSource, DoshaAssessment};

/// Symptom-driven herb suggestions stop after this many matches.
pub const SYMPTOM_HERB_LIMIT: usize = 3;

/// Whether a herb is a good match for a given constitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HerbFit {
    pub herb: &'static str,
    pub dosha: Dosha,
    pub recommended: bool,
    pub verdict: String,
}

/// Everything shown after a questionnaire: profile, herbs, diet, routine and yoga.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellnessReport {
    pub assessment: DoshaAssessment,
    pub summary: String,
    pub profile: Option<DoshaProfile>,
    pub herbs: Vec<Herb>,
    pub diet: DietaryAdvice,
    pub routine: Vec<&'static str>,
    pub yoga: Vec<YogaAsana>,
}

/// Result of the symptom checker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymptomReport {
    pub assessment: DoshaAssessment,
    pub herbs: Vec<Herb>,
    pub remedies: Vec<SymptomRemedy>,
}

impl KnowledgeBase {
    /// Every herb whose association text names the dosha, in catalog order.
    pub fn herbs_for(&self, dosha: Dosha) -> Vec<&Herb> {
        self.all_herbs()
            .iter()
            .filter(|herb| herb.suits(dosha))
            .collect()
    }

    /// Herbs for an assessment; symptom-driven assessments keep only the first few.
    pub fn recommended_herbs(&self, assessment: &DoshaAssessment) -> Vec<&Herb> {
        let herbs = self.herbs_for(assessment.primary);
        match assessment.source {
            AssessmentSource::Symptoms => herbs.into_iter().take(SYMPTOM_HERB_LIMIT).collect(),
            AssessmentSource::Questionnaire => herbs,
        }
    }

    /// Case-insensitive match on herb name or any benefit; blank terms return all herbs.
    pub fn search_herbs(&self, term: &str) -> Vec<&Herb> {
        let term = term.trim();
        if term.is_empty() {
            return self.all_herbs().iter().collect();
        }
        self.all_herbs()
            .iter()
            .filter(|herb| herb.matches_search(term))
            .collect()
    }

    pub fn herb_fit(&self, herb: &Herb, dosha: Dosha) -> HerbFit {
        let recommended = herb.suits(dosha);
        let verdict = if recommended {
            format!(
                "This herb is recommended for your {} dosha!",
                dosha.key().to_uppercase()
            )
        } else {
            format!(
                "This herb may not be ideal for your {} dosha",
                dosha.key().to_uppercase()
            )
        };

        HerbFit {
            herb: herb.key,
            dosha,
            recommended,
            verdict,
        }
    }

    /// Immediate remedies for the symptoms that have an entry, in the order given.
    pub fn remedies_for<S: AsRef<str>>(&self, symptoms: &[S]) -> Vec<SymptomRemedy> {
        symptoms
            .iter()
            .filter_map(|symptom| self.symptom_remedy(symptom.as_ref()))
            .cloned()
            .collect()
    }

    pub fn wellness_report(&self, assessment: DoshaAssessment) -> WellnessReport {
        let key = assessment.primary.key();
        WellnessReport {
            summary: assessment.prakriti_summary(),
            profile: self.dosha_profile(key).cloned(),
            herbs: self
                .recommended_herbs(&assessment)
                .into_iter()
                .cloned()
                .collect(),
            diet: self.dietary_advice(key),
            routine: self.daily_routine_tips(key).to_vec(),
            yoga: self.yoga_asanas(key).to_vec(),
            assessment,
        }
    }

    pub fn symptom_report<S: AsRef<str>>(&self, symptoms: &[S]) -> SymptomReport {
        let assessment = super::scoring::analyze_symptoms(symptoms);
        SymptomReport {
            herbs: self
                .recommended_herbs(&assessment)
                .into_iter()
                .cloned()
                .collect(),
            remedies: self.remedies_for(symptoms),
            assessment,
        }
    }
}
