use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::advisory::{AdvisoryService, DoshaAssessment, KnowledgeBase, RemedyBook};

pub(super) const TOLERANCE: f64 = 1e-9;

pub(super) fn knowledge() -> KnowledgeBase {
    KnowledgeBase::standard()
}

pub(super) fn service() -> Arc<AdvisoryService> {
    Arc::new(AdvisoryService::new(
        KnowledgeBase::standard(),
        RemedyBook::standard(),
    ))
}

pub(super) fn herb_keys(herbs: &[&crate::advisory::Herb]) -> Vec<&'static str> {
    herbs.iter().map(|herb| herb.key).collect()
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn assert_percentages(assessment: &DoshaAssessment, expected: [f64; 3]) {
    let [vata, pitta, kapha] = expected;
    assert_close(assessment.distribution.vata * 100.0, vata);
    assert_close(assessment.distribution.pitta * 100.0, pitta);
    assert_close(assessment.distribution.kapha * 100.0, kapha);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("valid json body")
}
