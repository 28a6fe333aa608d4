use std::collections::BTreeMap;

pub const MISSING_REMEDY: &str = "Sorry, I don't have a remedy for that symptom yet.";

/// Free-text remedies keyed by normalized (trimmed, lower-cased) symptom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemedyBook {
    remedies: BTreeMap<String, String>,
}

impl Default for RemedyBook {
    fn default() -> Self {
        Self::standard()
    }
}

impl RemedyBook {
    pub fn standard() -> Self {
        let remedies = [
            (
                "headache",
                "Drink ginger tea or apply peppermint oil to the temples.",
            ),
            (
                "cold",
                "Consume tulsi leaves with honey, or drink warm turmeric milk.",
            ),
            (
                "indigestion",
                "Sip cumin seed water or chew fennel seeds after meals.",
            ),
            (
                "stress",
                "Practice pranayama breathing and drink ashwagandha tea.",
            ),
            ("fever", "Drink coriander seed tea and rest well."),
        ]
        .into_iter()
        .map(|(symptom, remedy)| (symptom.to_string(), remedy.to_string()))
        .collect();

        Self { remedies }
    }

    pub fn empty() -> Self {
        Self {
            remedies: BTreeMap::new(),
        }
    }

    /// Never fails: unknown symptoms get [`MISSING_REMEDY`].
    pub fn lookup(&self, symptom: &str) -> &str {
        self.remedies
            .get(&normalize(symptom))
            .map(String::as_str)
            .unwrap_or(MISSING_REMEDY)
    }

    pub fn contains(&self, symptom: &str) -> bool {
        self.remedies.contains_key(&normalize(symptom))
    }

    /// Inserts or overwrites; the confirmation echoes the symptom as given.
    pub fn add(&mut self, symptom: &str, remedy: impl Into<String>) -> String {
        self.remedies.insert(normalize(symptom), remedy.into());
        format!("Remedy for '{symptom}' added successfully.")
    }

    pub fn symptoms(&self) -> impl Iterator<Item = &str> {
        self.remedies.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.remedies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remedies.is_empty()
    }
}

fn normalize(symptom: &str) -> String {
    symptom.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_and_padding() {
        let book = RemedyBook::standard();
        assert_eq!(
            book.lookup("HEADACHE "),
            "Drink ginger tea or apply peppermint oil to the temples."
        );
        assert_eq!(book.lookup("hiccups"), MISSING_REMEDY);
    }

    #[test]
    fn add_overwrites_normalized_key() {
        let mut book = RemedyBook::standard();
        let before = book.len();

        let message = book.add("  Fever", "Sip tulsi tea.");

        assert_eq!(message, "Remedy for '  Fever' added successfully.");
        assert_eq!(book.len(), before);
        assert_eq!(book.lookup("fever"), "Sip tulsi tea.");
    }

    #[test]
    fn empty_book_always_misses() {
        let book = RemedyBook::empty();
        assert!(book.is_empty());
        assert!(!book.contains("headache"));
        assert_eq!(book.lookup("headache"), MISSING_REMEDY);
    }
}
