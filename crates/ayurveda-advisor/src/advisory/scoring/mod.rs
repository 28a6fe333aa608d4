mod questionnaire;
mod symptoms;

pub use questionnaire::{score_questionnaire, Question, QUESTIONS, QUESTION_COUNT};
pub use symptoms::{analyze_symptoms, keywords};

use serde::Serialize;

use super::domain::Dosha;

/// Raw hit counts per dosha.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DoshaTally {
    pub vata: u32,
    pub pitta: u32,
    pub kapha: u32,
}

impl DoshaTally {
    pub fn get(&self, dosha: Dosha) -> u32 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    pub(crate) fn add(&mut self, dosha: Dosha, amount: u32) {
        match dosha {
            Dosha::Vata => self.vata += amount,
            Dosha::Pitta => self.pitta += amount,
            Dosha::Kapha => self.kapha += amount,
        }
    }

    pub fn total(&self) -> u32 {
        self.vata + self.pitta + self.kapha
    }

    /// Highest count, earliest dosha on ties. `None` when nothing was counted.
    pub fn leader(&self) -> Option<Dosha> {
        if self.total() == 0 {
            return None;
        }
        Some(first_maximum(Dosha::ordered().map(|dosha| (dosha, self.get(dosha) as f64))))
    }
}

/// Fraction per dosha, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreDistribution {
    pub vata: f64,
    pub pitta: f64,
    pub kapha: f64,
}

impl ScoreDistribution {
    pub const fn zero() -> Self {
        Self {
            vata: 0.0,
            pitta: 0.0,
            kapha: 0.0,
        }
    }

    pub fn even() -> Self {
        let third = 1.0 / 3.0;
        Self {
            vata: third,
            pitta: third,
            kapha: third,
        }
    }

    /// Normalizes a tally; `None` when the tally is empty.
    pub fn from_tally(tally: &DoshaTally) -> Option<Self> {
        let total = tally.total();
        if total == 0 {
            return None;
        }
        let total = total as f64;
        Some(Self {
            vata: tally.vata as f64 / total,
            pitta: tally.pitta as f64 / total,
            kapha: tally.kapha as f64 / total,
        })
    }

    pub fn get(&self, dosha: Dosha) -> f64 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    pub fn percent(&self, dosha: Dosha) -> f64 {
        self.get(dosha) * 100.0
    }

    pub fn total(&self) -> f64 {
        self.vata + self.pitta + self.kapha
    }

    pub fn leader(&self) -> Dosha {
        first_maximum(Dosha::ordered().map(|dosha| (dosha, self.get(dosha))))
    }

    pub fn entries(&self) -> [(Dosha, f64); 3] {
        Dosha::ordered().map(|dosha| (dosha, self.get(dosha)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentSource {
    Questionnaire,
    Symptoms,
}

/// Outcome of either classifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoshaAssessment {
    pub source: AssessmentSource,
    pub tally: DoshaTally,
    pub distribution: ScoreDistribution,
    pub primary: Dosha,
}

impl DoshaAssessment {
    pub fn prakriti_summary(&self) -> String {
        prakriti_summary(&self.distribution.entries())
    }
}

/// "Your dominant prakriti is Pitta." style summary; first maximum wins.
pub fn prakriti_summary(scores: &[(Dosha, f64)]) -> String {
    if scores.is_empty() {
        return "No data provided.".to_string();
    }
    let dominant = first_maximum(scores.iter().copied());
    format!("Your dominant prakriti is {dominant}.")
}

fn first_maximum(scores: impl IntoIterator<Item = (Dosha, f64)>) -> Dosha {
    let mut best: Option<(Dosha, f64)> = None;
    for (dosha, score) in scores {
        match best {
            Some((_, current)) if score <= current => {}
            _ => best = Some((dosha, score)),
        }
    }
    best.map(|(dosha, _)| dosha).unwrap_or(Dosha::Vata)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_leader_prefers_earliest_on_ties() {
        let tally = DoshaTally {
            vata: 0,
            pitta: 2,
            kapha: 2,
        };
        assert_eq!(tally.leader(), Some(Dosha::Pitta));
        assert_eq!(DoshaTally::default().leader(), None);
    }

    #[test]
    fn even_split_leads_with_vata() {
        assert_eq!(ScoreDistribution::even().leader(), Dosha::Vata);
        assert!((ScoreDistribution::even().total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prakriti_summary_names_first_maximum() {
        let summary = prakriti_summary(&[
            (Dosha::Kapha, 30.0),
            (Dosha::Pitta, 40.0),
            (Dosha::Vata, 40.0),
        ]);
        assert_eq!(summary, "Your dominant prakriti is Pitta.");
        assert_eq!(prakriti_summary(&[]), "No data provided.");
    }
}
