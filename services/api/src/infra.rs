use ayurveda_advisor::advisory::scoring::QUESTION_COUNT;
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Questionnaire answers parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Answers(pub(crate) Vec<u8>);

/// Accepts "1,2,3,1,2" or "12312"; 0 marks an unanswered question.
pub(crate) fn parse_answers(raw: &str) -> Result<Answers, String> {
    let raw = raw.trim();
    let answers: Result<Vec<u8>, String> = if raw.contains(',') {
        raw.split(',')
            .map(|part| {
                part.trim()
                    .parse::<u8>()
                    .map_err(|err| format!("invalid answer '{}' ({err})", part.trim()))
            })
            .collect()
    } else {
        raw.chars()
            .map(|ch| {
                ch.to_digit(10)
                    .map(|digit| digit as u8)
                    .ok_or_else(|| format!("invalid answer '{ch}'"))
            })
            .collect()
    };

    let answers = answers?;
    if answers.len() != QUESTION_COUNT {
        return Err(format!(
            "expected {QUESTION_COUNT} answers, found {}",
            answers.len()
        ));
    }
    Ok(Answers(answers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_and_compact_answers() {
        assert_eq!(parse_answers("1, 2,3,1,2"), Ok(Answers(vec![1, 2, 3, 1, 2])));
        assert_eq!(parse_answers("33331"), Ok(Answers(vec![3, 3, 3, 3, 1])));
    }

    #[test]
    fn rejects_wrong_length_and_garbage() {
        assert!(parse_answers("1,2,3").is_err());
        assert!(parse_answers("1x312").is_err());
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date(" 2025-09-24 "),
            Ok(NaiveDate::from_ymd_opt(2025, 9, 24).expect("valid date"))
        );
        assert!(parse_date("24/09/2025").is_err());
    }
}
