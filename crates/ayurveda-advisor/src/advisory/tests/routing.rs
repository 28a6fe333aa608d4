use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::advisory::router::{
    advisory_router, questionnaire_assessment_handler, remedy_handler, QuestionnaireRequest,
};
use crate::advisory::MISSING_REMEDY;

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("serializable")))
        .expect("request builds")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

#[tokio::test]
async fn questionnaire_handler_rejects_incomplete_answers() {
    let result = questionnaire_assessment_handler(
        State(service()),
        Json(QuestionnaireRequest {
            answers: vec![1, 2, 0, 1, 2],
        }),
    )
    .await;

    let response = match result {
        Ok(_) => panic!("incomplete questionnaire must fail"),
        Err(err) => err.into_response(),
    };
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("please answer all questions"));
}

#[tokio::test]
async fn questionnaire_route_returns_report() {
    let router = advisory_router(service());

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/assessments/questionnaire",
            json!({ "answers": [1, 2, 3, 1, 2] }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["assessment"]["primary"], "vata");
    assert_eq!(payload["assessment"]["source"], "questionnaire");
    assert_eq!(payload["herbs"].as_array().map(Vec::len), Some(3));
    assert_close(
        payload["assessment"]["distribution"]["kapha"]
            .as_f64()
            .expect("kapha fraction"),
        0.2,
    );
}

#[tokio::test]
async fn symptom_route_caps_herbs_and_lists_remedies() {
    let router = advisory_router(service());

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/assessments/symptoms",
            json!({ "symptoms": ["Acidity", "Skin Rash"] }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["assessment"]["primary"], "pitta");
    assert_eq!(payload["herbs"][0]["key"], "brahmi");
    assert_eq!(payload["remedies"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn unknown_dosha_route_degrades_to_empty_overview() {
    let router = advisory_router(service());

    let response = router
        .oneshot(get_request("/api/v1/doshas/unknown"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload["dosha"].is_null());
    assert!(payload["profile"].is_null());
    assert_eq!(payload["diet"], json!({ "increase": [], "decrease": [] }));
    assert_eq!(payload["routine"], json!([]));
}

#[tokio::test]
async fn herb_route_filters_by_search_and_dosha() {
    let router = advisory_router(service());

    let response = router
        .oneshot(get_request("/api/v1/herbs?search=calms&dosha=Pitta"))
        .await
        .expect("route executes");

    let payload = read_json_body(response).await;
    let herbs = payload.as_array().expect("array payload");
    assert_eq!(herbs.len(), 1);
    assert_eq!(herbs[0]["herb"]["name"], "Brahmi");
    assert_eq!(herbs[0]["fit"]["recommended"], true);
}

#[tokio::test]
async fn added_remedies_are_visible_to_later_lookups() {
    let service = service();
    let router = advisory_router(service.clone());

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/remedies",
            json!({ "symptom": "migraine", "remedy": "text" }),
        ))
        .await
        .expect("route executes");
    let payload = read_json_body(response).await;
    assert_eq!(payload["message"], "Remedy for 'migraine' added successfully.");

    let Json(found) = remedy_handler(State(service.clone()), Path("Migraine".to_string())).await;
    assert_eq!(found.remedy, "text");

    let Json(missing) = remedy_handler(State(service), Path("hiccups".to_string())).await;
    assert_eq!(missing.remedy, MISSING_REMEDY);
}

#[tokio::test]
async fn guidance_route_honors_explicit_hour() {
    let router = advisory_router(service());

    let response = router
        .oneshot(get_request("/api/v1/guidance?hour=18&date=2025-03-14"))
        .await
        .expect("route executes");

    let payload = read_json_body(response).await;
    assert_eq!(payload["time_of_day"], "evening");
    assert_eq!(payload["suggestion"], "Time for a light dinner and relaxation");
    assert!(payload["tip"].is_string());
}

#[tokio::test]
async fn season_route_falls_back_for_unknown_seasons() {
    let router = advisory_router(service());

    let response = router
        .oneshot(get_request("/api/v1/seasons/monsoon"))
        .await
        .expect("route executes");

    let payload = read_json_body(response).await;
    assert!(payload["season"].is_null());
    assert_eq!(payload["advice"], "No specific advice for this season.");
}
