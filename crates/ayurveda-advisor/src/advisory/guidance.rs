use chrono::{Datelike, Local, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

pub const NO_SEASONAL_ADVICE: &str = "No specific advice for this season.";

const DAILY_TIPS: [&str; 4] = [
    "Drink warm water with lemon in the morning to stimulate digestion.",
    "Practice 15 minutes of meditation daily for mental balance.",
    "Eat your largest meal at noon when digestion is strongest.",
    "Go to bed by 10 PM for optimal rest and recovery.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Daytime,
    Evening,
    Night,
}

impl TimeOfDay {
    /// 5-11 morning, 12-16 daytime, 17-20 evening, anything else night.
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=16 => Self::Daytime,
            17..=20 => Self::Evening,
            _ => Self::Night,
        }
    }

    pub fn now() -> Self {
        Self::from_hour(Local::now().hour())
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Daytime => "Daytime",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }

    pub const fn suggestion(self) -> &'static str {
        match self {
            Self::Morning => "Perfect time for meditation and exercise!",
            Self::Daytime => "Have you had your main meal yet?",
            Self::Evening => "Time for a light dinner and relaxation",
            Self::Night => "Prepare for restful sleep",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Summer,
    Winter,
    Spring,
    Rainy,
}

impl Season {
    pub fn from_key(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "summer" => Some(Self::Summer),
            "winter" => Some(Self::Winter),
            "spring" => Some(Self::Spring),
            "rainy" => Some(Self::Rainy),
            _ => None,
        }
    }

    pub const fn advice(self) -> &'static str {
        match self {
            Self::Summer => {
                "Stay cool with coconut water, avoid spicy foods, and practice cooling pranayama."
            }
            Self::Winter => {
                "Eat warming foods like soups, use sesame oil for massage, and keep warm."
            }
            Self::Spring => {
                "Detox with light foods, drink herbal teas, and practice yoga to balance Kapha."
            }
            Self::Rainy => {
                "Avoid heavy foods, drink ginger tea, and protect digestion with warm meals."
            }
        }
    }
}

pub fn seasonal_advice(season: &str) -> &'static str {
    Season::from_key(season)
        .map(Season::advice)
        .unwrap_or(NO_SEASONAL_ADVICE)
}

/// Rotates through the tip list one calendar day at a time.
pub fn daily_tip(date: NaiveDate) -> &'static str {
    let day = date.num_days_from_ce().rem_euclid(DAILY_TIPS.len() as i32);
    DAILY_TIPS[day as usize]
}

pub fn daily_tips() -> &'static [&'static str] {
    &DAILY_TIPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_fall_into_expected_buckets() {
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Daytime);
        assert_eq!(TimeOfDay::from_hour(20), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(21), TimeOfDay::Night);
    }

    #[test]
    fn seasonal_advice_trims_and_defaults() {
        assert!(seasonal_advice(" Winter ").contains("sesame oil"));
        assert_eq!(seasonal_advice("monsoon"), NO_SEASONAL_ADVICE);
    }

    #[test]
    fn daily_tip_changes_between_consecutive_days() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date");
        let tomorrow = today.succ_opt().expect("valid date");
        assert_ne!(daily_tip(today), daily_tip(tomorrow));
        assert!(daily_tips().contains(&daily_tip(today)));
    }
}
