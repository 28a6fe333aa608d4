use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::AdvisoryError;

/// One of the three fixed constitutions. Declaration order is the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    pub const fn ordered() -> [Self; 3] {
        [Self::Vata, Self::Pitta, Self::Kapha]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Vata => "vata",
            Self::Pitta => "pitta",
            Self::Kapha => "kapha",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Vata => "Vata",
            Self::Pitta => "Pitta",
            Self::Kapha => "Kapha",
        }
    }

    pub const fn elements(self) -> &'static str {
        match self {
            Self::Vata => "air and space",
            Self::Pitta => "fire and water",
            Self::Kapha => "earth and water",
        }
    }

    /// Questionnaire options are positional: 1 = vata, 2 = pitta, 3 = kapha.
    pub const fn from_answer(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Vata),
            2 => Some(Self::Pitta),
            3 => Some(Self::Kapha),
            _ => None,
        }
    }

    /// Lenient key lookup used by every table accessor; unknown keys yield `None`.
    pub fn from_key(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "vata" => Some(Self::Vata),
            "pitta" => Some(Self::Pitta),
            "kapha" => Some(Self::Kapha),
            _ => None,
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Dosha {
    type Err = AdvisoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_key(value).ok_or_else(|| AdvisoryError::UnknownDosha(value.to_string()))
    }
}

/// Descriptive record for a constitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoshaProfile {
    pub description: &'static str,
    pub characteristics: Vec<&'static str>,
    pub imbalance: Vec<&'static str>,
    pub balance: Vec<&'static str>,
}

/// Catalog entry for a single herb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Herb {
    pub key: &'static str,
    pub name: &'static str,
    pub sanskrit: &'static str,
    pub benefits: Vec<&'static str>,
    /// Free-form association such as "Vata, Kapha" or "All doshas".
    pub doshas: &'static str,
    pub dosage: &'static str,
}

impl Herb {
    /// Plain substring containment against the association text. "All doshas" names no
    /// constitution and therefore matches none of them.
    pub fn suits(&self, dosha: Dosha) -> bool {
        self.doshas.to_lowercase().contains(dosha.key())
    }

    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self
                .benefits
                .iter()
                .any(|benefit| benefit.to_lowercase().contains(&term))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DietaryAdvice {
    pub increase: Vec<&'static str>,
    pub decrease: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YogaAsana {
    pub name: &'static str,
    pub duration: &'static str,
    pub benefit: &'static str,
}

/// Short first-aid style actions for a named symptom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymptomRemedy {
    pub symptom: &'static str,
    pub actions: Vec<&'static str>,
}

/// One row of the standard daily schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSlot {
    pub window: &'static str,
    pub activity: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

pub const AGE_RANGE: std::ops::RangeInclusive<u8> = 1..=120;
pub const WEIGHT_RANGE_KG: std::ops::RangeInclusive<u16> = 30..=200;

/// Optional self-description kept alongside an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    name: String,
    age: u8,
    gender: Gender,
    weight_kg: u16,
}

impl UserProfile {
    pub fn new(
        name: impl Into<String>,
        age: u8,
        gender: Gender,
        weight_kg: u16,
    ) -> Result<Self, AdvisoryError> {
        if !AGE_RANGE.contains(&age) {
            return Err(AdvisoryError::InvalidProfile(format!(
                "age {age} outside {}..={}",
                AGE_RANGE.start(),
                AGE_RANGE.end()
            )));
        }
        if !WEIGHT_RANGE_KG.contains(&weight_kg) {
            return Err(AdvisoryError::InvalidProfile(format!(
                "weight {weight_kg}kg outside {}..={}",
                WEIGHT_RANGE_KG.start(),
                WEIGHT_RANGE_KG.end()
            )));
        }

        Ok(Self {
            name: name.into().trim().to_string(),
            age,
            gender,
            weight_kg,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn weight_kg(&self) -> u16 {
        self.weight_kg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dosha_keys_parse_case_insensitively() {
        assert_eq!(Dosha::from_key(" PITTA "), Some(Dosha::Pitta));
        assert_eq!(Dosha::from_key("Kapha"), Some(Dosha::Kapha));
        assert_eq!(Dosha::from_key("ether"), None);
        assert!("ether".parse::<Dosha>().is_err());
    }

    #[test]
    fn answers_map_positionally() {
        assert_eq!(Dosha::from_answer(1), Some(Dosha::Vata));
        assert_eq!(Dosha::from_answer(3), Some(Dosha::Kapha));
        assert_eq!(Dosha::from_answer(0), None);
        assert_eq!(Dosha::from_answer(4), None);
    }

    #[test]
    fn profile_rejects_out_of_range_age_and_weight() {
        assert!(UserProfile::new("Asha", 0, Gender::Female, 60).is_err());
        assert!(UserProfile::new("Asha", 34, Gender::Female, 250).is_err());

        let profile = UserProfile::new("  Asha ", 34, Gender::Female, 60).expect("valid profile");
        assert_eq!(profile.name(), "Asha");
        assert_eq!(profile.weight_kg(), 60);
    }
}
