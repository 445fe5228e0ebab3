//! # Heredity CLI Application
//!
//! Terminal front end for the risk calculators. Drives the same
//! [`Session`] as the GUI: pedigree flags and ancestor selections go through
//! the selection surface, the request is posted to the calculation service,
//! and the result is printed as bars or written out as a plot image.

mod cli;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use risk_core::render::Visualization;
use risk_core::selection::AncestorNode;
use risk_core::{CalculationClient, Calculator, ClientConfig, ParentSide, Session, SubmitOutcome};

use cli::{Cli, Commands, GlobalArgs};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.global)?;

    let mut session = Session::new(config.busy_label.clone());
    let calculator = apply_command(&mut session, &cli.command);
    session.switch_tab(calculator);

    if cli.global.json {
        let submission = session.begin_submit(calculator);
        println!("POST {}", config.endpoint_url(submission.request.endpoint()));
        println!("{}", serde_json::to_string_pretty(&submission.request)?);
        return Ok(());
    }

    let client = CalculationClient::new(config)?;
    eprintln!("{} ({})", session.submit_label(calculator), client.config().base_url);

    match session.submit(&client, calculator).await {
        SubmitOutcome::Applied => print_result(&session, calculator, cli.global.plot_out),
        SubmitOutcome::Failed { notice } => anyhow::bail!("{}", notice),
        SubmitOutcome::Stale => Ok(()),
    }
}

/// Defaults, then config file and environment, then flags
fn load_config(global: &GlobalArgs) -> Result<ClientConfig> {
    let mut config = ClientConfig::load(global.config.as_deref()).context("failed to load configuration")?;
    if let Some(url) = &global.url {
        config.base_url = url.clone();
    }
    if let Some(secs) = global.timeout_secs {
        config.timeout_secs = secs;
    }
    Ok(config)
}

/// Feed the subcommand's inputs into the session; returns the calculator to run
fn apply_command(session: &mut Session, command: &Commands) -> Calculator {
    match command {
        Commands::Thalassemia(args) => {
            let form = &mut session.thalassemia_form;
            form.mother_population = args.mother_population.clone();
            form.father_population = args.father_population.clone();
            form.relation = args.relation.clone();

            session.toggle_disease(ParentSide::Male, args.male_affected);
            session.toggle_disease(ParentSide::Female, args.female_affected);

            // Fill the trees father's side first: paternal grandparents, then maternal
            let mut remaining = args.ancestors;
            'fill: for side in ParentSide::ALL {
                for node in AncestorNode::ALL {
                    if remaining == 0 {
                        break 'fill;
                    }
                    session.toggle_node(side, node);
                    remaining -= 1;
                }
            }
            if args.ancestors > 4 {
                tracing::warn!(requested = args.ancestors, "only four grandparents can be marked");
            }
            Calculator::Thalassemia
        }
        Commands::Hemophilia(args) => {
            let form = &mut session.hemophilia_form;
            form.mother_carrier = args.mother_carrier.clone();
            form.mother_history = args.mother_history.clone();
            form.mother_population = args.mother_population.clone();
            form.father_affected = args.father_affected.clone();
            Calculator::Hemophilia
        }
    }
}

fn print_result(session: &Session, calculator: Calculator, plot_out: Option<PathBuf>) -> Result<()> {
    println!("═══════════════════════════════════════");
    println!("  {} RISK ({})", calculator.display_name().to_uppercase(), calculator.inheritance());
    println!("═══════════════════════════════════════");
    if calculator == Calculator::Thalassemia {
        println!("  History signal: {}", session.pedigree().history());
    }
    println!();

    match session.results().visualization() {
        Visualization::Bars { bars, .. } => {
            if let Some(level) = session.results().risk_level() {
                println!("  Risk level: {}", level);
            }
            for bar in bars {
                let filled = (bar.fill_fraction() * 30.0).round() as usize;
                println!(
                    "  {:<26} {:>8}  [{}{}] {}",
                    bar.label,
                    bar.value_text(),
                    "#".repeat(filled),
                    " ".repeat(30 - filled),
                    bar.tier.display_name()
                );
            }
        }
        Visualization::Plot { image, size } => {
            let path = plot_out.unwrap_or_else(|| PathBuf::from(format!("{}_risk.png", calculator.display_name().to_lowercase())));
            fs::write(&path, image.bytes()).with_context(|| format!("failed to write plot to {}", path.display()))?;
            println!("  Plot ({:?}, {} bytes) written to {}", size, image.bytes().len(), path.display());
        }
        Visualization::Empty => println!("  (no result)"),
    }
    Ok(())
}
