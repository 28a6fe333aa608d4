use crate::infra::{parse_answers, parse_date, Answers};
use ayurveda_advisor::advisory::scoring::QUESTIONS;
use ayurveda_advisor::advisory::{
    seasonal_advice, AdvisorySession, Dosha, DoshaAssessment, Herb, KnowledgeBase, RoutinePlan,
    SymptomReport, WellnessReport,
};
use ayurveda_advisor::error::AppError;
use chrono::{Local, NaiveDate, Timelike};
use clap::Args;
use serde::Serialize;
use std::io::{self, BufRead, Write};

#[derive(Args, Debug)]
pub(crate) struct QuizArgs {
    /// Five answers such as "1,2,3,1,2" (1 = first option). Prompts when omitted.
    #[arg(long, value_parser = parse_answers)]
    pub(crate) answers: Option<Answers>,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SymptomArgs {
    /// Symptoms to analyze, e.g. "Anxiety" "Skin Rash"
    pub(crate) symptoms: Vec<String>,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct HerbArgs {
    /// Match against herb names and benefits
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Only show herbs suited to this dosha
    #[arg(long)]
    pub(crate) dosha: Option<String>,
    /// Write the listing as CSV to stdout
    #[arg(long)]
    pub(crate) csv: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DoshaArgs {
    /// vata, pitta or kapha
    pub(crate) dosha: String,
}

#[derive(Args, Debug)]
pub(crate) struct RemedyArgs {
    /// Symptom to look up (case and surrounding spaces are ignored)
    pub(crate) symptom: String,
    /// Record this remedy for the symptom before looking it up
    #[arg(long)]
    pub(crate) add: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct SeasonArgs {
    pub(crate) season: String,
}

#[derive(Args, Debug)]
pub(crate) struct RoutineArgs {
    /// Five questionnaire answers such as "1,2,3,1,2"
    #[arg(long, value_parser = parse_answers)]
    pub(crate) answers: Answers,
    /// Hour of day (0-23); defaults to the current hour
    #[arg(long)]
    pub(crate) hour: Option<u32>,
    /// Date used to pick the tip of the day (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

#[derive(Serialize)]
struct HerbRow<'a> {
    name: &'a str,
    sanskrit: &'a str,
    doshas: &'a str,
    dosage: &'a str,
    benefits: String,
}

pub(crate) fn run_quiz(args: QuizArgs) -> Result<(), AppError> {
    let answers = match args.answers {
        Some(Answers(answers)) => answers,
        None => prompt_answers()?,
    };

    let mut session = AdvisorySession::new();
    let assessment = session.complete_questionnaire(&answers)?.clone();
    let report = KnowledgeBase::standard().wellness_report(assessment);

    if args.json {
        print_json(&report)?;
    } else {
        render_wellness_report(&report);
    }
    Ok(())
}

pub(crate) fn run_symptoms(args: SymptomArgs) -> Result<(), AppError> {
    let knowledge = KnowledgeBase::standard();
    if args.symptoms.is_empty() {
        println!("Please select at least one symptom. Common symptoms:");
        for symptom in knowledge.common_symptoms() {
            println!("  - {symptom}");
        }
        return Ok(());
    }

    let report = knowledge.symptom_report(&args.symptoms);
    if args.json {
        print_json(&report)?;
    } else {
        render_symptom_report(&report);
    }
    Ok(())
}

pub(crate) fn run_herbs(args: HerbArgs) -> Result<(), AppError> {
    let knowledge = KnowledgeBase::standard();
    let mut herbs = knowledge.search_herbs(args.search.as_deref().unwrap_or_default());
    let dosha = args.dosha.as_deref().map(Dosha::from_key);
    if let Some(dosha) = dosha {
        herbs.retain(|herb| dosha.map(|dosha| herb.suits(dosha)).unwrap_or(false));
    }

    if args.csv {
        return write_herb_csv(&herbs);
    }

    if herbs.is_empty() {
        println!("No herbs matched.");
        return Ok(());
    }
    for herb in herbs {
        render_herb(herb);
        if let Some(Some(dosha)) = dosha {
            println!("    {}", knowledge.herb_fit(herb, dosha).verdict);
        }
    }
    Ok(())
}

pub(crate) fn run_dosha(args: DoshaArgs) -> Result<(), AppError> {
    let knowledge = KnowledgeBase::standard();
    let Some(dosha) = Dosha::from_key(&args.dosha) else {
        println!("No information available for '{}'.", args.dosha);
        return Ok(());
    };
    render_dosha(&knowledge, dosha);
    Ok(())
}

pub(crate) fn run_remedy(args: RemedyArgs) -> Result<(), AppError> {
    let mut session = AdvisorySession::new();
    if let Some(remedy) = args.add {
        println!("{}", session.remedies_mut().add(&args.symptom, remedy));
    }
    println!("{}", session.remedies().lookup(&args.symptom));
    Ok(())
}

pub(crate) fn run_season(args: SeasonArgs) -> Result<(), AppError> {
    println!("{}", seasonal_advice(&args.season));
    Ok(())
}

pub(crate) fn run_routine(args: RoutineArgs) -> Result<(), AppError> {
    let knowledge = KnowledgeBase::standard();
    let mut session = AdvisorySession::new();
    session.complete_questionnaire(&args.answers.0)?;

    let now = Local::now();
    let hour = args.hour.unwrap_or_else(|| now.hour());
    let date = args.date.unwrap_or_else(|| now.date_naive());
    match session.routine_plan(&knowledge, hour, date) {
        Some(plan) => render_routine(&plan),
        None => println!(
            "Please complete the dosha analysis first for personalized recommendations!"
        ),
    }
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let knowledge = KnowledgeBase::standard();
    let mut session = AdvisorySession::new();

    println!("Ayurvedic wellness demo");
    println!("\nQuestionnaire answers: 1,2,3,1,2");
    let assessment = session.complete_questionnaire(&[1, 2, 3, 1, 2])?.clone();
    render_wellness_report(&knowledge.wellness_report(assessment));

    println!("\nIncomplete questionnaire: 1,0,3,1,2");
    if let Err(err) = session.complete_questionnaire(&[1, 0, 3, 1, 2]) {
        println!("  Rejected: {err}");
    }

    println!("\nSymptom checker: Acidity, Skin Rash, Headache");
    render_symptom_report(&knowledge.symptom_report(&["Acidity", "Skin Rash", "Headache"]));

    println!("\nRemedy book");
    println!("  headache -> {}", session.remedies().lookup("HEADACHE "));
    let confirmation = session
        .remedies_mut()
        .add("migraine", "Rest in a dark room with cool compresses.");
    println!("  {confirmation}");
    println!("  Migraine -> {}", session.remedies().lookup("Migraine"));

    let now = Local::now();
    if let Some(plan) = session.routine_plan(&knowledge, now.hour(), now.date_naive()) {
        println!();
        render_routine(&plan);
    }

    println!("\nSeason (winter): {}", seasonal_advice("winter"));
    Ok(())
}

fn prompt_answers() -> Result<Vec<u8>, AppError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut answers = Vec::with_capacity(QUESTIONS.len());

    for (index, question) in QUESTIONS.iter().enumerate() {
        println!("{}. {}", index + 1, question.prompt);
        for (option, text) in question.options.iter().enumerate() {
            println!("   {}) {}", option + 1, text);
        }
        print!("Your answer (1-3, blank to skip): ");
        io::stdout().flush()?;

        let line = lines.next().transpose()?.unwrap_or_default();
        // Anything that is not a digit counts as unanswered.
        answers.push(line.trim().parse::<u8>().unwrap_or(0));
    }
    Ok(answers)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::from)?;
    println!("{json}");
    Ok(())
}

fn write_herb_csv(herbs: &[&Herb]) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut writer = csv::Writer::from_writer(stdout.lock());
    for herb in herbs {
        writer
            .serialize(HerbRow {
                name: herb.name,
                sanskrit: herb.sanskrit,
                doshas: herb.doshas,
                dosage: herb.dosage,
                benefits: herb.benefits.join("; "),
            })
            .map_err(io::Error::from)?;
    }
    writer.flush()?;
    Ok(())
}

fn render_distribution(assessment: &DoshaAssessment) {
    for (dosha, fraction) in assessment.distribution.entries() {
        println!(
            "  - {:<5} {:>5.1}% ({} hit(s))",
            dosha.label(),
            fraction * 100.0,
            assessment.tally.get(dosha)
        );
    }
}

fn render_herb(herb: &Herb) {
    println!(
        "- {} ({}) | {} | {}",
        herb.name, herb.sanskrit, herb.doshas, herb.dosage
    );
    println!("    Benefits: {}", herb.benefits.join(", "));
}

fn render_wellness_report(report: &WellnessReport) {
    println!("{}", report.summary);
    render_distribution(&report.assessment);

    if let Some(profile) = &report.profile {
        println!("\nAbout {}:", report.assessment.primary.key().to_uppercase());
        println!("  {}", profile.description);
        println!("  Characteristics: {}", profile.characteristics.join(", "));
        println!("  Signs of imbalance: {}", profile.imbalance.join(", "));
        println!("  Balance with: {}", profile.balance.join(", "));
    }

    println!("\nRecommended herbs:");
    for herb in &report.herbs {
        render_herb(herb);
    }
    println!("\nFoods to favor: {}", report.diet.increase.join(", "));
    println!("Foods to reduce: {}", report.diet.decrease.join(", "));
    println!("\nRoutine tips:");
    for tip in &report.routine {
        println!("  - {tip}");
    }
    println!("\nYoga:");
    for asana in &report.yoga {
        println!("  - {} ({}): {}", asana.name, asana.duration, asana.benefit);
    }
}

fn render_symptom_report(report: &SymptomReport) {
    println!("Primary imbalance: {}", report.assessment.primary);
    render_distribution(&report.assessment);

    println!("Suggested herbs:");
    for herb in &report.herbs {
        render_herb(herb);
    }

    if !report.remedies.is_empty() {
        println!("Immediate remedies:");
        for remedy in &report.remedies {
            println!("  {}: {}", remedy.symptom, remedy.actions.join("; "));
        }
    }
}

fn render_dosha(knowledge: &KnowledgeBase, dosha: Dosha) {
    println!("{} ({})", dosha.label(), dosha.elements());
    if let Some(profile) = knowledge.dosha_profile(dosha.key()) {
        println!("  {}", profile.description);
        println!("  Signs of imbalance: {}", profile.imbalance.join(", "));
    }
    let diet = knowledge.dietary_advice(dosha.key());
    println!("  Favor: {}", diet.increase.join(", "));
    println!("  Reduce: {}", diet.decrease.join(", "));
    println!("  Routine: {}", knowledge.daily_routine_tips(dosha.key()).join(", "));
    for asana in knowledge.yoga_asanas(dosha.key()) {
        println!("  Yoga: {} ({})", asana.name, asana.duration);
    }
}

fn render_routine(plan: &RoutinePlan<'_>) {
    println!(
        "Current time: {} - {}",
        plan.time_of_day.label(),
        plan.suggestion
    );
    println!("Tip of the day: {}", plan.tip_of_the_day);
    println!("Daily schedule:");
    for slot in plan.schedule {
        println!("  {:<14} {:<28} {}", slot.window, slot.activity, slot.note);
    }
    println!("{} specific tips:", plan.primary.label());
    for tip in plan.dosha_tips {
        println!("  - {tip}");
    }
}
