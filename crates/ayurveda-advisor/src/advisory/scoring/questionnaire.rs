use serde::Serialize;

use super::{AssessmentSource, DoshaAssessment, DoshaTally, ScoreDistribution};
use crate::advisory::domain::Dosha;
use crate::advisory::error::AdvisoryError;

pub const QUESTION_COUNT: usize = 5;

/// A constitution question. Options are listed vata, pitta, kapha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 3],
}

impl Question {
    pub fn option_for(&self, dosha: Dosha) -> &'static str {
        match dosha {
            Dosha::Vata => self.options[0],
            Dosha::Pitta => self.options[1],
            Dosha::Kapha => self.options[2],
        }
    }
}

pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        prompt: "What best describes your body frame?",
        options: [
            "Thin, light, prominent bones",
            "Medium, muscular, well-proportioned",
            "Large, sturdy, well-padded",
        ],
    },
    Question {
        prompt: "How is your skin type?",
        options: [
            "Dry, rough, cool to touch",
            "Oily, warm, prone to rashes",
            "Thick, smooth, cool",
        ],
    },
    Question {
        prompt: "What is your typical appetite like?",
        options: [
            "Irregular, sometimes hungry, sometimes not",
            "Strong, get irritable if meal is delayed",
            "Steady but can skip meals easily",
        ],
    },
    Question {
        prompt: "How do you handle stress?",
        options: [
            "Worry, anxiety, nervousness",
            "Irritability, anger, frustration",
            "Withdraw, avoid, become inactive",
        ],
    },
    Question {
        prompt: "What is your sleep pattern?",
        options: [
            "Light sleeper, easily disturbed",
            "Moderate sleeper, wake up hot",
            "Deep sleeper, hard to wake up",
        ],
    },
];

/// Scores five answers where 1/2/3 select vata/pitta/kapha and 0 means unanswered.
///
/// Any unanswered question rejects the whole questionnaire. An empty tally (not
/// reachable once validation passes) falls back to an even split.
pub fn score_questionnaire(answers: &[u8]) -> Result<DoshaAssessment, AdvisoryError> {
    if answers.len() != QUESTION_COUNT {
        return Err(AdvisoryError::WrongAnswerCount {
            expected: QUESTION_COUNT,
            found: answers.len(),
        });
    }

    let mut tally = DoshaTally::default();
    let mut unanswered = Vec::new();
    for (index, &value) in answers.iter().enumerate() {
        match (value, Dosha::from_answer(value)) {
            (_, Some(dosha)) => tally.add(dosha, 1),
            (0, None) => unanswered.push(index + 1),
            (_, None) => {
                return Err(AdvisoryError::InvalidAnswer {
                    question: index + 1,
                    value,
                })
            }
        }
    }

    if !unanswered.is_empty() {
        return Err(AdvisoryError::IncompleteQuestionnaire { unanswered });
    }

    let distribution = ScoreDistribution::from_tally(&tally).unwrap_or_else(ScoreDistribution::even);

    Ok(DoshaAssessment {
        source: AssessmentSource::Questionnaire,
        tally,
        primary: distribution.leader(),
        distribution,
    })
}
