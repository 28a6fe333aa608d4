use super::{AssessmentSource, DoshaAssessment, DoshaTally, ScoreDistribution};
use crate::advisory::domain::Dosha;

const VATA_KEYWORDS: [&str; 5] = ["anxiety", "insomnia", "dry", "constipation", "worry"];
const PITTA_KEYWORDS: [&str; 5] = ["acidity", "inflammation", "irritability", "heat", "rash"];
const KAPHA_KEYWORDS: [&str; 5] = ["congestion", "lethargy", "weight", "slow", "heavy"];

pub fn keywords(dosha: Dosha) -> &'static [&'static str] {
    match dosha {
        Dosha::Vata => &VATA_KEYWORDS,
        Dosha::Pitta => &PITTA_KEYWORDS,
        Dosha::Kapha => &KAPHA_KEYWORDS,
    }
}

/// Counts keyword containment per symptom; every keyword found adds one point.
///
/// There is no tokenization or negation handling: "no anxiety" still counts for vata.
/// With no hits at all the distribution is all zero and the primary dosha is vata.
pub fn analyze_symptoms<S: AsRef<str>>(symptoms: &[S]) -> DoshaAssessment {
    let mut tally = DoshaTally::default();
    for symptom in symptoms {
        let symptom = symptom.as_ref().to_lowercase();
        for dosha in Dosha::ordered() {
            let hits = keywords(dosha)
                .iter()
                .filter(|keyword| symptom.contains(*keyword))
                .count();
            tally.add(dosha, hits as u32);
        }
    }

    DoshaAssessment {
        source: AssessmentSource::Symptoms,
        tally,
        distribution: ScoreDistribution::from_tally(&tally).unwrap_or_else(ScoreDistribution::zero),
        primary: tally.leader().unwrap_or(Dosha::Vata),
    }
}
