use ayurveda_advisor::advisory::{
    analyze_symptoms, score_questionnaire, AdvisoryError, AdvisoryService, AdvisorySession,
    Dosha, KnowledgeBase, RemedyBook, MISSING_REMEDY, SYMPTOM_HERB_LIMIT,
};
use ayurveda_advisor::advisory::scoring::{keywords, QUESTIONS};
use chrono::NaiveDate;

fn percent(value: f64) -> f64 {
    (value * 1000.0).round() / 10.0
}

#[test]
fn questionnaire_flow_produces_full_recommendations() {
    let service = AdvisoryService::default();

    let report = service
        .assess_questionnaire(&[1, 2, 3, 1, 2])
        .expect("complete questionnaire scores");

    assert_eq!(report.assessment.primary, Dosha::Vata);
    assert_eq!(percent(report.assessment.distribution.vata), 40.0);
    assert_eq!(percent(report.assessment.distribution.pitta), 40.0);
    assert_eq!(percent(report.assessment.distribution.kapha), 20.0);
    let herb_names: Vec<_> = report.herbs.iter().map(|herb| herb.name).collect();
    assert_eq!(herb_names, vec!["Ashwagandha", "Brahmi", "Ginger"]);
    assert_eq!(report.diet.increase[0], "Warm cooked vegetables");
    assert_eq!(report.routine.last(), Some(&"Early bedtime"));
}

#[test]
fn incomplete_questionnaire_is_the_only_hard_failure() {
    let service = AdvisoryService::default();

    let err = service
        .assess_questionnaire(&[0, 0, 0, 0, 0])
        .expect_err("nothing answered");
    assert_eq!(
        err,
        AdvisoryError::IncompleteQuestionnaire {
            unanswered: vec![1, 2, 3, 4, 5]
        }
    );

    let kb = service.knowledge();
    assert_eq!(kb.dietary_advice("unknown"), Default::default());
    assert!(kb.daily_routine_tips("").is_empty());
    assert_eq!(service.lookup_remedy("unknown"), MISSING_REMEDY);
}

#[test]
fn symptom_checker_flow_caps_herbs() {
    let service = AdvisoryService::default();

    let report = service.assess_symptoms(&["Anxiety", "Insomnia", "Constipation"]);

    assert_eq!(report.assessment.primary, Dosha::Vata);
    assert!(report.herbs.len() <= SYMPTOM_HERB_LIMIT);
    assert_eq!(report.remedies.len(), 3);
    assert_eq!(report.remedies[2].actions[1], "Triphala powder at night");
}

#[test]
fn questionnaire_and_symptom_fallbacks_stay_distinct() {
    let symptoms = analyze_symptoms(&["Headache", "Fatigue"]);
    assert_eq!(symptoms.primary, Dosha::Vata);
    assert_eq!(symptoms.distribution.total(), 0.0);

    let questionnaire = score_questionnaire(&[3, 3, 3, 3, 3]).expect("complete");
    assert!((questionnaire.distribution.total() - 1.0).abs() < 1e-9);
}

#[test]
fn remedy_book_normalizes_keys() {
    let mut book = RemedyBook::standard();

    assert!(book.lookup("HEADACHE ").starts_with("Drink ginger tea"));
    assert_eq!(
        book.add("migraine", "text"),
        "Remedy for 'migraine' added successfully."
    );
    assert_eq!(book.lookup("Migraine"), "text");
    assert!(book.symptoms().any(|symptom| symptom == "migraine"));
}

#[test]
fn every_keyword_maps_back_to_its_dosha() {
    for dosha in Dosha::ordered() {
        for keyword in keywords(dosha) {
            let assessment = analyze_symptoms(&[*keyword]);
            assert_eq!(assessment.primary, dosha, "keyword {keyword}");
            assert_eq!(assessment.tally.get(dosha), 1);
        }
    }
}

#[test]
fn answering_with_option_positions_reproduces_the_dosha() {
    // Picking the kapha option everywhere must land on kapha.
    let answers: Vec<u8> = QUESTIONS.iter().map(|_| 3).collect();
    let mut session = AdvisorySession::new();
    let assessment = session
        .complete_questionnaire(&answers)
        .expect("complete questionnaire");
    assert_eq!(assessment.primary, Dosha::Kapha);

    let kb = KnowledgeBase::standard();
    let date = NaiveDate::from_ymd_opt(2025, 12, 1).expect("valid date");
    let plan = session.routine_plan(&kb, 22, date).expect("plan available");
    assert_eq!(plan.suggestion, "Prepare for restful sleep");
    assert!(plan.dosha_tips.contains(&"Dry massage"));
}
