use crate::demo::{
    run_demo, run_dosha, run_herbs, run_quiz, run_remedy, run_routine, run_season,
    run_symptoms, DoshaArgs, HerbArgs, QuizArgs, RemedyArgs, RoutineArgs, SeasonArgs,
    SymptomArgs,
};
use crate::server;
use ayurveda_advisor::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Ayurvedic Wellness Advisor",
    about = "Score your dosha and browse Ayurvedic recommendations from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Answer the five constitution questions and get a wellness report
    Quiz(QuizArgs),
    /// Classify a list of symptoms and suggest herbs and remedies
    Symptoms(SymptomArgs),
    /// Browse or export the herb library
    Herbs(HerbArgs),
    /// Show the profile, diet, routine and yoga for one dosha
    Dosha(DoshaArgs),
    /// Look up or record a home remedy
    Remedy(RemedyArgs),
    /// Seasonal advice (summer, winter, spring, rainy)
    Season(SeasonArgs),
    /// Daily routine plan for a questionnaire result
    Routine(RoutineArgs),
    /// Walk through questionnaire, symptom checker and lookups with sample data
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quiz(args) => run_quiz(args),
        Command::Symptoms(args) => run_symptoms(args),
        Command::Herbs(args) => run_herbs(args),
        Command::Dosha(args) => run_dosha(args),
        Command::Remedy(args) => run_remedy(args),
        Command::Season(args) => run_season(args),
        Command::Routine(args) => run_routine(args),
        Command::Demo => run_demo(),
    }
}
