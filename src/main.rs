use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use financial_health_score::models::FinancialProfile;
use financial_health_score::{input, rating, report, savings, score, tips};

#[derive(Parser)]
#[command(name = "financial-health-score")]
#[command(about = "Personal finance health score across five areas", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ProfileArg {
    /// JSON file with the financial profile
    #[arg(long, env = "FHS_PROFILE")]
    profile: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a profile
    Score {
        #[command(flatten)]
        source: ProfileArg,
        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show random tips for an area (1-5)
    Tips {
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        area: u8,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// List the areas with the most points to gain
    Improve {
        #[command(flatten)]
        source: ProfileArg,
        #[arg(long, default_value_t = financial_health_score::config::TOP_IMPROVEMENTS)]
        limit: usize,
    },
    /// Estimate yearly savings potential
    Savings {
        #[command(flatten)]
        source: ProfileArg,
    },
    /// Generate a markdown report
    Report {
        #[command(flatten)]
        source: ProfileArg,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Score every profile in a CSV file
    Batch {
        #[arg(long)]
        csv: PathBuf,
    },
    /// Print a sample profile as JSON
    Sample,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Score { source, json } => {
            let profile = load_profile(&source.profile)?;
            let breakdown = score::compute_score(&profile);

            if json {
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
                return Ok(());
            }

            println!(
                "Score {:.0} / {:.0} ({:.1}%, {})",
                breakdown.total,
                breakdown.max,
                breakdown.percent,
                rating::rating(breakdown.percent)
            );
            for part in &breakdown.parts {
                println!(
                    "- {} [{}]: {:.1} / {:.0}",
                    part.label, part.area, part.score, part.max
                );
            }
        }
        Commands::Tips { area, count } => {
            for _ in 0..count {
                match tips::pick_tip(area) {
                    Some(tip) => {
                        println!("{} {}: {} ({})", tip.icon, tip.title, tip.text, tip.boost)
                    }
                    None => println!("No tips for area {area}."),
                }
            }
        }
        Commands::Improve { source, limit } => {
            let profile = load_profile(&source.profile)?;
            let breakdown = score::compute_score(&profile);
            let improvements =
                score::top_improvements_with(&breakdown, limit, &mut rand::thread_rng());

            println!("Areas with the most points to gain:");
            for improvement in &improvements {
                println!("- {} ({:.1} points missing)", improvement.area, improvement.lost);
                if let Some(tip) = &improvement.tip {
                    println!("  {} {} ({})", tip.icon, tip.text, tip.boost);
                }
            }
        }
        Commands::Savings { source } => {
            let profile = load_profile(&source.profile)?;
            let estimate = savings::estimate_savings(&profile);

            println!("Potential savings: {:.0} kr/year", estimate.total);
            println!("- short-term debt interest: {:.0}", estimate.debt_interest);
            println!("- better mortgage rate: {:.0}", estimate.mortgage_rate);
            println!("- missing emergency buffer: {:.0}", estimate.buffer_opportunity);
            println!("- savings below target: {:.0}", estimate.savings_gap);
            println!(
                "Premium could unlock about {:.0} kr/year (illustrative, not financial advice).",
                estimate.premium_upsell
            );
        }
        Commands::Report { source, name, out } => {
            let profile = load_profile(&source.profile)?;
            let breakdown = score::compute_score(&profile);
            let improvements = score::top_improvements(&breakdown);
            let report = report::build_report(
                name.as_deref(),
                Local::now().date_naive(),
                &profile,
                &improvements,
            );
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Batch { csv } => {
            let file =
                File::open(&csv).with_context(|| format!("failed to open {}", csv.display()))?;
            let profiles = input::read_profiles_csv(file)
                .with_context(|| format!("failed to read profiles from {}", csv.display()))?;
            info!(count = profiles.len(), "scoring batch");

            let scored = score::rank_profiles(profiles);

            if scored.is_empty() {
                println!("No profiles found in {}.", csv.display());
                return Ok(());
            }

            println!("Profiles by score:");
            for (name, breakdown) in &scored {
                println!(
                    "- {} score {:.0} / {:.0} ({:.1}%, {})",
                    name,
                    breakdown.total,
                    breakdown.max,
                    breakdown.percent,
                    rating::rating(breakdown.percent)
                );
            }
        }
        Commands::Sample => {
            println!("{}", serde_json::to_string_pretty(&input::sample_profile())?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_profile(path: &Path) -> anyhow::Result<FinancialProfile> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let profile = input::read_profile(file)
        .with_context(|| format!("failed to read profile from {}", path.display()))?;
    info!(path = %path.display(), "loaded profile");
    Ok(profile)
}
