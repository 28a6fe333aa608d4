use std::collections::BTreeMap;

use super::domain::{
    DietaryAdvice, Dosha, DoshaProfile, Herb, ScheduleSlot, SymptomRemedy, YogaAsana,
};

/// Immutable lookup tables backing every recommendation.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    herbs: Vec<Herb>,
    profiles: BTreeMap<Dosha, DoshaProfile>,
    diets: BTreeMap<Dosha, DietaryAdvice>,
    yoga: BTreeMap<Dosha, Vec<YogaAsana>>,
    routines: BTreeMap<Dosha, Vec<&'static str>>,
    symptom_remedies: Vec<SymptomRemedy>,
    schedule: Vec<ScheduleSlot>,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::standard()
    }
}

impl KnowledgeBase {
    pub fn standard() -> Self {
        Self {
            herbs: standard_herbs(),
            profiles: standard_profiles(),
            diets: standard_diets(),
            yoga: standard_yoga(),
            routines: standard_routines(),
            symptom_remedies: standard_symptom_remedies(),
            schedule: standard_schedule(),
        }
    }

    pub fn all_herbs(&self) -> &[Herb] {
        &self.herbs
    }

    pub fn herb(&self, key: &str) -> Option<&Herb> {
        let key = key.trim().to_lowercase();
        self.herbs
            .iter()
            .find(|herb| herb.key == key || herb.name.to_lowercase() == key)
    }

    pub fn dosha_profile(&self, key: &str) -> Option<&DoshaProfile> {
        Dosha::from_key(key).and_then(|dosha| self.profiles.get(&dosha))
    }

    pub fn dietary_advice(&self, key: &str) -> DietaryAdvice {
        Dosha::from_key(key)
            .and_then(|dosha| self.diets.get(&dosha))
            .cloned()
            .unwrap_or_default()
    }

    pub fn daily_routine_tips(&self, key: &str) -> &[&'static str] {
        Dosha::from_key(key)
            .and_then(|dosha| self.routines.get(&dosha))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn yoga_asanas(&self, key: &str) -> &[YogaAsana] {
        Dosha::from_key(key)
            .and_then(|dosha| self.yoga.get(&dosha))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Symptom labels offered by the symptom checker, in display order.
    pub fn common_symptoms(&self) -> Vec<&'static str> {
        self.symptom_remedies
            .iter()
            .map(|remedy| remedy.symptom)
            .collect()
    }

    pub fn symptom_remedy(&self, symptom: &str) -> Option<&SymptomRemedy> {
        let symptom = symptom.trim();
        self.symptom_remedies
            .iter()
            .find(|remedy| remedy.symptom.eq_ignore_ascii_case(symptom))
    }

    pub fn immediate_remedies(&self, symptom: &str) -> &[&'static str] {
        self.symptom_remedy(symptom)
            .map(|remedy| remedy.actions.as_slice())
            .unwrap_or(&[])
    }

    pub fn standard_schedule(&self) -> &[ScheduleSlot] {
        &self.schedule
    }
}

fn standard_herbs() -> Vec<Herb> {
    vec![
        Herb {
            key: "ashwagandha",
            name: "Ashwagandha",
            sanskrit: "अश्वगन्धा",
            benefits: vec!["Stress Relief", "Better Sleep", "Energy Boost"],
            doshas: "Vata, Kapha",
            dosage: "500-1000mg daily",
        },
        Herb {
            key: "turmeric",
            name: "Turmeric",
            sanskrit: "हरिद्रा",
            benefits: vec!["Anti-inflammatory", "Antioxidant", "Digestive Aid"],
            doshas: "All doshas",
            dosage: "1-3g daily",
        },
        Herb {
            key: "triphala",
            name: "Triphala",
            sanskrit: "त्रिफला",
            benefits: vec!["Digestive Cleanser", "Detoxifier", "Improves Elimination"],
            doshas: "All doshas",
            dosage: "1-5g at night",
        },
        Herb {
            key: "brahmi",
            name: "Brahmi",
            sanskrit: "ब्राह्मी",
            benefits: vec!["Memory Boost", "Calms Mind", "Cognitive Function"],
            doshas: "Vata, Pitta",
            dosage: "300-500mg daily",
        },
        Herb {
            key: "ginger",
            name: "Ginger",
            sanskrit: "आर्द्रक",
            benefits: vec!["Improves Digestion", "Reduces Nausea", "Clears Congestion"],
            doshas: "Kapha, Vata",
            dosage: "1-3g daily",
        },
    ]
}

fn standard_profiles() -> BTreeMap<Dosha, DoshaProfile> {
    BTreeMap::from([
        (
            Dosha::Vata,
            DoshaProfile {
                description: "Represents air and space. Governs movement, creativity, and nervous system.",
                characteristics: vec!["Creative", "energetic", "thin build", "dry skin"],
                imbalance: vec!["Anxiety", "constipation", "dry skin", "insomnia"],
                balance: vec!["Warm foods", "regular routine", "oil massage"],
            },
        ),
        (
            Dosha::Pitta,
            DoshaProfile {
                description: "Represents fire and water. Governs digestion, metabolism, and transformation.",
                characteristics: vec!["Intelligent", "focused", "medium build", "warm body"],
                imbalance: vec!["Acidity", "inflammation", "skin rashes", "irritability"],
                balance: vec!["Cooling foods", "moderation", "meditation"],
            },
        ),
        (
            Dosha::Kapha,
            DoshaProfile {
                description: "Represents earth and water. Governs structure, stability, and lubrication.",
                characteristics: vec!["Calm", "loving", "sturdy build", "excellent stamina"],
                imbalance: vec!["Weight gain", "congestion", "lethargy", "attachment"],
                balance: vec!["Light foods", "exercise", "stimulation"],
            },
        ),
    ])
}

fn standard_diets() -> BTreeMap<Dosha, DietaryAdvice> {
    BTreeMap::from([
        (
            Dosha::Vata,
            DietaryAdvice {
                increase: vec![
                    "Warm cooked vegetables",
                    "Whole grains",
                    "Nuts",
                    "Dairy",
                    "Sweet fruits",
                ],
                decrease: vec!["Raw vegetables", "Cold foods", "Beans", "Dry foods"],
            },
        ),
        (
            Dosha::Pitta,
            DietaryAdvice {
                increase: vec!["Sweet fruits", "Bitter greens", "Coconut", "Milk", "Grains"],
                decrease: vec!["Spicy foods", "Sour fruits", "Fermented foods", "Alcohol"],
            },
        ),
        (
            Dosha::Kapha,
            DietaryAdvice {
                increase: vec![
                    "Light fruits",
                    "Steamed vegetables",
                    "Legumes",
                    "Spices",
                    "Honey",
                ],
                decrease: vec!["Sweet fruits", "Dairy", "Oily foods", "Wheat"],
            },
        ),
    ])
}

fn standard_yoga() -> BTreeMap<Dosha, Vec<YogaAsana>> {
    BTreeMap::from([
        (
            Dosha::Vata,
            vec![
                YogaAsana {
                    name: "Balasana",
                    duration: "5 minutes",
                    benefit: "Calms mind",
                },
                YogaAsana {
                    name: "Vrikshasana",
                    duration: "3 minutes",
                    benefit: "Improves balance",
                },
                YogaAsana {
                    name: "Shavasana",
                    duration: "10 minutes",
                    benefit: "Deep relaxation",
                },
            ],
        ),
        (
            Dosha::Pitta,
            vec![
                YogaAsana {
                    name: "Chandra Namaskar",
                    duration: "10 rounds",
                    benefit: "Cooling effect",
                },
                YogaAsana {
                    name: "Forward Bends",
                    duration: "2 minutes",
                    benefit: "Calms mind",
                },
                YogaAsana {
                    name: "Moon Breathing",
                    duration: "5 minutes",
                    benefit: "Reduces heat",
                },
            ],
        ),
        (
            Dosha::Kapha,
            vec![
                YogaAsana {
                    name: "Surya Namaskar",
                    duration: "12 rounds",
                    benefit: "Energizes",
                },
                YogaAsana {
                    name: "Backbends",
                    duration: "3 minutes",
                    benefit: "Opens chest",
                },
                YogaAsana {
                    name: "Twists",
                    duration: "2 minutes",
                    benefit: "Stimulates digestion",
                },
            ],
        ),
    ])
}

fn standard_routines() -> BTreeMap<Dosha, Vec<&'static str>> {
    BTreeMap::from([
        (
            Dosha::Vata,
            vec![
                "Warm oil self-massage daily",
                "Gentle yoga practice",
                "Regular meal times",
                "Warm beverages",
                "Early bedtime",
            ],
        ),
        (
            Dosha::Pitta,
            vec![
                "Cooling pranayama",
                "Moon bathing",
                "Moderate exercise",
                "Regular breaks",
                "Avoid competition",
            ],
        ),
        (
            Dosha::Kapha,
            vec![
                "Vigorous morning exercise",
                "Dry massage",
                "Stimulating yoga",
                "Light breakfast",
                "Variety in routine",
            ],
        ),
    ])
}

fn standard_symptom_remedies() -> Vec<SymptomRemedy> {
    let entries: [(&'static str, [&'static str; 2]); 10] = [
        (
            "Headache",
            ["Apply sandalwood paste on forehead", "Drink ginger tea"],
        ),
        ("Fatigue", ["Ashwagandha with warm milk", "Proper rest"]),
        (
            "Insomnia",
            [
                "Warm milk with nutmeg before bed",
                "Foot massage with warm oil",
            ],
        ),
        ("Acidity", ["Drink cold milk", "Take amla powder with honey"]),
        (
            "Constipation",
            ["Warm water with ghee", "Triphala powder at night"],
        ),
        ("Anxiety", ["Ashwagandha with warm milk", "Meditation"]),
        (
            "Joint Pain",
            ["Apply warm sesame oil", "Turmeric with warm milk"],
        ),
        ("Skin Rash", ["Apply neem paste", "Turmeric with honey"]),
        (
            "Poor Digestion",
            ["Ginger tea before meals", "Triphala powder"],
        ),
        ("Low Immunity", ["Ashwagandha", "Tulsi tea"]),
    ];

    entries
        .into_iter()
        .map(|(symptom, actions)| SymptomRemedy {
            symptom,
            actions: actions.to_vec(),
        })
        .collect()
}

fn standard_schedule() -> Vec<ScheduleSlot> {
    vec![
        ScheduleSlot {
            window: "5:00-6:00 AM",
            activity: "Wake up",
            note: "Best time to wake up",
        },
        ScheduleSlot {
            window: "6:00-7:00 AM",
            activity: "Oral hygiene & Oil pulling",
            note: "Cleanse with oil",
        },
        ScheduleSlot {
            window: "7:00-8:00 AM",
            activity: "Exercise & Yoga",
            note: "Gentle exercise",
        },
        ScheduleSlot {
            window: "8:00-9:00 AM",
            activity: "Bath & Meditation",
            note: "15-min meditation",
        },
        ScheduleSlot {
            window: "12:00-1:00 PM",
            activity: "Main Meal",
            note: "Largest meal of day",
        },
        ScheduleSlot {
            window: "6:00-7:00 PM",
            activity: "Light Dinner",
            note: "2-3 hours before sleep",
        },
        ScheduleSlot {
            window: "9:00-10:00 PM",
            activity: "Sleep",
            note: "Digital detox before bed",
        },
    ]
}
