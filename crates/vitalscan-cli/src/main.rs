use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use vitalscan_core::{
    roster_file_from_env_value, ConditionsInput, CoreConfig, RecommendationRequest,
    RecommendationService, ScanResult, ScoredDoctor, ScoringPolicy, ROSTER_FILE_ENV,
};

#[derive(Parser)]
#[command(name = "vitalscan")]
#[command(about = "VitalScan doctor recommendation CLI")]
struct Cli {
    /// Roster YAML file (defaults to $VITALSCAN_ROSTER_FILE, then the built-in sample roster)
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all doctors in the roster
    List,
    /// Recommend doctors for a set of conditions
    Recommend {
        /// Condition or symptom (repeatable)
        #[arg(long = "condition", short = 'c')]
        conditions: Vec<String>,
        /// Urgency level: Low, Medium or High (other labels earn no urgency bonus)
        #[arg(long, short = 'u')]
        urgency: Option<String>,
        /// Specialty to promote to the top of the results
        #[arg(long)]
        specialty: Option<String>,
        /// Show the score each doctor earned
        #[arg(long)]
        explain: bool,
    },
    /// Recommend doctors for a scan result file (YAML, or JSON with a .json extension)
    Scan {
        /// Path to the scan result file
        path: PathBuf,
        /// Show the score each doctor earned
        #[arg(long)]
        explain: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use 'vitalscan --help' for commands");
        return Ok(());
    };

    let roster_file = cli
        .roster
        .or_else(|| roster_file_from_env_value(std::env::var(ROSTER_FILE_ENV).ok()));
    let cfg = Arc::new(CoreConfig::new(roster_file, ScoringPolicy::default())?);
    let service = RecommendationService::from_config(cfg)?;

    match command {
        Commands::List => {
            if service.list_doctors().is_empty() {
                println!("No doctors found.");
            }
            for doctor in service.list_doctors() {
                println!(
                    "ID: {}, Name: {}, Specialization: {}, Rating: {} ({} reviews)",
                    doctor.id, doctor.name, doctor.specialization, doctor.rating, doctor.reviews
                );
            }
        }
        Commands::Recommend {
            conditions,
            urgency,
            specialty,
            explain,
        } => {
            let request = RecommendationRequest::from_labels(
                Some(ConditionsInput::from(conditions)),
                urgency.as_deref(),
                specialty,
            );
            print_ranked(&service.explain(&request), explain);
        }
        Commands::Scan { path, explain } => {
            let scan = ScanResult::load(&path)?;
            println!(
                "Scan: {} (urgency: {})",
                scan.kind(),
                scan.urgency().map_or("none", |u| u.as_str())
            );
            print_ranked(&service.explain(&RecommendationRequest::from(&scan)), explain);
        }
    }

    Ok(())
}

fn print_ranked(ranked: &[ScoredDoctor<'_>], explain: bool) {
    if ranked.is_empty() {
        println!("No matching doctors; consider seeing a general physician.");
        return;
    }

    for (position, scored) in ranked.iter().enumerate() {
        let doctor = scored.doctor;
        if explain {
            println!(
                "{}. {} ({}) [{}] score={} rating={} reviews={}",
                position + 1,
                doctor.name,
                doctor.specialization,
                doctor.id,
                scored.score,
                doctor.rating,
                doctor.reviews
            );
        } else {
            println!(
                "{}. {} ({}) - {}",
                position + 1,
                doctor.name,
                doctor.specialization,
                doctor.phone
            );
        }
    }
}
