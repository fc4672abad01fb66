mod config;
mod domain;
mod engine;
mod gemini;
mod monitoring;
mod news;
mod qr;
mod upi;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::domain::{QrAssessment, UPI_PROVIDERS};
use crate::engine::Engine;

#[derive(Parser)]
#[command(name = "finhub", version, about = "Fintech news digest and UPI QR fraud checks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the latest fintech headlines from the configured feed
    News,
    /// Summarize a headline and its legal implications with Gemini
    Insight {
        /// 1-based index into the `news` listing
        index: usize,
    },
    /// Decode a QR code image and check any UPI payment request in it
    Scan {
        /// Path to a PNG/JPEG image containing the QR code
        image: PathBuf,
    },
    /// Check a raw UPI payment URI without decoding an image
    Check {
        /// Payload text, e.g. "upi://pay?pa=merchant@bank&pn=..."
        uri: String,
    },
    /// Show well-known UPI payment platforms
    Providers,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load local .env if present (no-op in prod/systemd envs)
    let _ = dotenvy::dotenv();

    monitoring::init_tracing();

    let cli = Cli::parse();
    let cfg = config::Config::from_env()?;
    info!(model = %cfg.gemini_model, feed = %cfg.news_feed_url, "boot");

    match cli.command {
        Command::News => {
            let engine = Engine::new(cfg);
            let items = engine.latest_news().await?;
            if items.is_empty() {
                println!("News could not be fetched.");
            } else {
                for (i, item) in items.iter().enumerate() {
                    println!("{:>2}. {}", i + 1, item.title);
                    println!("    {}", item.link);
                }
            }
        }
        Command::Insight { index } => {
            let engine = Engine::new(cfg);
            let (item, insight) = engine.headline_insight(index).await?;
            println!("Headline: {}", item.title);
            println!();
            println!("{insight}");
        }
        Command::Scan { image } => {
            if !qr::scanning_enabled() {
                println!("QR code scanning is disabled: built without the qr-scan feature.");
                return Ok(());
            }
            let payloads = qr::decode_image(&image)?;
            match payloads.first() {
                None => println!("No QR code detected in {}.", image.display()),
                Some(payload) => {
                    println!("QR code detected.");
                    report_assessment(&upi::assess_payload(payload));
                }
            }
        }
        Command::Check { uri } => {
            report_assessment(&upi::assess_payload(&uri));
        }
        Command::Providers => {
            for (name, link) in UPI_PROVIDERS {
                println!("{name}: {link}");
            }
        }
    }

    Ok(())
}

fn report_assessment(assessment: &QrAssessment) {
    match assessment {
        QrAssessment::NonUpi { payload } => {
            println!("Payload is valid but doesn't follow the UPI format: {payload}");
        }
        QrAssessment::Upi {
            request,
            verdict,
            pay_link,
        } => {
            if verdict.suspicious {
                println!("Suspicious UPI QR detected! Transaction may be invalid or risky.");
                for reason in &verdict.reasons {
                    println!("  - {reason}");
                }
            } else {
                println!("UPI QR appears safe.");
            }

            println!("UPI payment details:");
            for (label, value) in request.labeled_fields() {
                if !value.is_empty() {
                    println!("  {label}: {value}");
                }
            }

            if let Some(link) = pay_link {
                println!("Pay via UPI: {link}");
            }
        }
    }
}
