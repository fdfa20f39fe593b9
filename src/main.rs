//! VectorPlan - Weekly Training Plan Generator
//!
//! Command-line entry point.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vectorplan::export::{self, OutputFormat};
use vectorplan::plan::catalog::{self, MINDSET_TIPS, WORKOUT_DETAILS};
use vectorplan::plan::{generate, pick_tip, ExperienceLevel, Goal, PlanRequest};
use vectorplan::storage::config::{self, AppConfig};

/// Generate a personalized weekly training plan
#[derive(Parser)]
#[command(name = "vectorplan")]
#[command(about = "vectorplan - Generate a weekly running and lifting schedule", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a weekly schedule
    #[command(name = "generate")]
    Generate(GenerateArgs),

    /// Show experience templates and the workout catalog
    #[command(name = "templates")]
    Templates,

    /// List mindset tips
    #[command(name = "tips")]
    Tips,

    /// Inspect or create the config file
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Args, Default)]
struct GenerateArgs {
    /// Experience level (beginner, intermediate, advanced)
    #[arg(short, long)]
    experience: Option<ExperienceLevel>,

    /// Training days per week (beginner 3-4, intermediate 4-5, advanced 5-6)
    #[arg(short, long)]
    days: Option<u8>,

    /// Training goal (general, hybrid, running, strength)
    #[arg(short, long)]
    goal: Option<Goal>,

    /// CSV output path
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Do not write the CSV file
    #[arg(long)]
    no_export: bool,

    /// Output format printed to stdout (text, json, csv)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Seed for the mindset tip
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("Starting vectorplan v{}", env!("CARGO_PKG_VERSION"));

    let config_path = cli.config.unwrap_or_else(config::get_config_path);

    let result = match cli.command {
        Some(Commands::Generate(args)) => run_generate(args, &config_path),
        Some(Commands::Templates) => run_templates(),
        Some(Commands::Tips) => run_tips(),
        Some(Commands::Config { command }) => run_config(command, &config_path),
        None => run_generate(GenerateArgs::default(), &config_path),
    };

    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run_generate(args: GenerateArgs, config_path: &std::path::Path) -> Result<()> {
    let settings = config::load_config_from(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let experience = args.experience.unwrap_or(settings.defaults.experience);
    let goal = args.goal.unwrap_or(settings.defaults.goal);
    let request = match args.days.or(settings.defaults.days_available) {
        Some(days) => PlanRequest::new(experience, days, goal)?,
        None => PlanRequest::with_default_days(experience, goal),
    };

    let schedule = generate(&request)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let tip = pick_tip(&mut rng);
    let rendered = match args.format.unwrap_or(settings.export.format) {
        OutputFormat::Text => export::render_plan(&schedule, tip),
        OutputFormat::Json => export::export_json(&request, &schedule, tip)?,
        OutputFormat::Csv => export::export_csv(&schedule, tip)?,
    };
    println!("{}", rendered.trim_end());

    if settings.export.enabled && !args.no_export {
        let path = args.output.unwrap_or_else(|| settings.export.csv_path());
        export::export_csv_to_file(&schedule, pick_tip(&mut rng), &path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!("Saved plan to {}", path.display());
    }

    Ok(())
}

fn run_templates() -> Result<()> {
    for experience in ExperienceLevel::ALL {
        let days = experience.training_days();
        println!(
            "{} ({}-{} days): {}",
            experience,
            days.start(),
            days.end(),
            catalog::template_names(experience).join(", ")
        );
    }

    println!();
    for (name, description) in WORKOUT_DETAILS {
        println!("{:<18} {}", name, description);
    }

    Ok(())
}

fn run_tips() -> Result<()> {
    for tip in MINDSET_TIPS {
        println!("{}", tip);
    }
    Ok(())
}

fn run_config(command: ConfigCommands, config_path: &std::path::Path) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let settings = config::load_config_from(config_path)?;
            println!("# {}", config_path.display());
            print!("{}", toml::to_string_pretty(&settings)?);
        }
        ConfigCommands::Init { force } => {
            if config_path.exists() && !force {
                bail!(
                    "Config already exists at {} (use --force to overwrite)",
                    config_path.display()
                );
            }
            config::save_config_to(&AppConfig::default(), config_path)?;
            println!("Wrote {}", config_path.display());
        }
    }
    Ok(())
}
