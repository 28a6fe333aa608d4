use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

use super::domain::{DietaryAdvice, Dosha, DoshaProfile, Herb, YogaAsana};
use super::guidance::{daily_tip, seasonal_advice, Season, TimeOfDay};
use super::recommend::{HerbFit, SymptomReport, WellnessReport};
use super::scoring::{Question, QUESTIONS};
use super::service::AdvisoryService;
use crate::error::AppError;

#[derive(Debug, Deserialize, Serialize)]
pub struct QuestionnaireRequest {
    pub answers: Vec<u8>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SymptomRequest {
    #[serde(default)]
    pub symptoms: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HerbQuery {
    pub search: Option<String>,
    pub dosha: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HerbListing {
    pub herb: Herb,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<HerbFit>,
}

#[derive(Debug, Serialize)]
pub struct DoshaOverview {
    pub dosha: Option<Dosha>,
    pub profile: Option<DoshaProfile>,
    pub diet: DietaryAdvice,
    pub routine: Vec<&'static str>,
    pub yoga: Vec<YogaAsana>,
    pub herbs: Vec<Herb>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RemedyRequest {
    pub symptom: String,
    pub remedy: String,
}

#[derive(Debug, Serialize)]
pub struct RemedyResponse {
    pub symptom: String,
    pub remedy: String,
}

#[derive(Debug, Serialize)]
pub struct SeasonResponse {
    pub season: Option<Season>,
    pub advice: &'static str,
}

#[derive(Debug, Default, Deserialize)]
pub struct GuidanceQuery {
    pub hour: Option<u32>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct GuidanceResponse {
    pub time_of_day: TimeOfDay,
    pub suggestion: &'static str,
    pub tip: &'static str,
}

/// Router builder exposing the questionnaire, symptom checker and lookup tables.
pub fn advisory_router(service: Arc<AdvisoryService>) -> Router {
    Router::new()
        .route("/api/v1/questionnaire", get(questionnaire_handler))
        .route(
            "/api/v1/assessments/questionnaire",
            post(questionnaire_assessment_handler),
        )
        .route(
            "/api/v1/assessments/symptoms",
            post(symptom_assessment_handler),
        )
        .route("/api/v1/herbs", get(herbs_handler))
        .route("/api/v1/doshas/:dosha", get(dosha_handler))
        .route("/api/v1/remedies", post(add_remedy_handler))
        .route("/api/v1/remedies/:symptom", get(remedy_handler))
        .route("/api/v1/seasons/:season", get(season_handler))
        .route("/api/v1/guidance", get(guidance_handler))
        .with_state(service)
}

pub(crate) async fn questionnaire_handler() -> Json<&'static [Question]> {
    Json(QUESTIONS.as_slice())
}

pub(crate) async fn questionnaire_assessment_handler(
    State(service): State<Arc<AdvisoryService>>,
    Json(request): Json<QuestionnaireRequest>,
) -> Result<Json<WellnessReport>, AppError> {
    let report = service.assess_questionnaire(&request.answers)?;
    Ok(Json(report))
}

pub(crate) async fn symptom_assessment_handler(
    State(service): State<Arc<AdvisoryService>>,
    Json(request): Json<SymptomRequest>,
) -> Json<SymptomReport> {
    Json(service.assess_symptoms(&request.symptoms))
}

pub(crate) async fn herbs_handler(
    State(service): State<Arc<AdvisoryService>>,
    Query(query): Query<HerbQuery>,
) -> Json<Vec<HerbListing>> {
    let knowledge = service.knowledge();
    let herbs = knowledge.search_herbs(query.search.as_deref().unwrap_or_default());

    // An unrecognized dosha filter matches nothing rather than failing.
    let listings = match query.dosha.as_deref() {
        None => herbs
            .into_iter()
            .map(|herb| HerbListing {
                herb: herb.clone(),
                fit: None,
            })
            .collect(),
        Some(raw) => match Dosha::from_key(raw) {
            Some(dosha) => herbs
                .into_iter()
                .filter(|herb| herb.suits(dosha))
                .map(|herb| HerbListing {
                    herb: herb.clone(),
                    fit: Some(knowledge.herb_fit(herb, dosha)),
                })
                .collect(),
            None => Vec::new(),
        },
    };

    Json(listings)
}

pub(crate) async fn dosha_handler(
    State(service): State<Arc<AdvisoryService>>,
    Path(dosha): Path<String>,
) -> Json<DoshaOverview> {
    let knowledge = service.knowledge();
    let parsed = Dosha::from_key(&dosha);
    let herbs: Vec<Herb> = parsed
        .map(|dosha| knowledge.herbs_for(dosha).into_iter().cloned().collect())
        .unwrap_or_default();

    Json(DoshaOverview {
        dosha: parsed,
        profile: knowledge.dosha_profile(&dosha).cloned(),
        diet: knowledge.dietary_advice(&dosha),
        routine: knowledge.daily_routine_tips(&dosha).to_vec(),
        yoga: knowledge.yoga_asanas(&dosha).to_vec(),
        herbs,
    })
}

pub(crate) async fn remedy_handler(
    State(service): State<Arc<AdvisoryService>>,
    Path(symptom): Path<String>,
) -> Json<RemedyResponse> {
    let remedy = service.lookup_remedy(&symptom);
    Json(RemedyResponse { symptom, remedy })
}

pub(crate) async fn add_remedy_handler(
    State(service): State<Arc<AdvisoryService>>,
    Json(request): Json<RemedyRequest>,
) -> Json<serde_json::Value> {
    let message = service.add_remedy(&request.symptom, request.remedy);
    Json(serde_json::json!({ "message": message }))
}

pub(crate) async fn season_handler(Path(season): Path<String>) -> Json<SeasonResponse> {
    Json(SeasonResponse {
        season: Season::from_key(&season),
        advice: seasonal_advice(&season),
    })
}

pub(crate) async fn guidance_handler(Query(query): Query<GuidanceQuery>) -> Json<GuidanceResponse> {
    let now = Local::now();
    let time_of_day = TimeOfDay::from_hour(query.hour.unwrap_or_else(|| now.hour()));
    let date = query.date.unwrap_or_else(|| now.date_naive());

    Json(GuidanceResponse {
        time_of_day,
        suggestion: time_of_day.suggestion(),
        tip: daily_tip(date),
    })
}
