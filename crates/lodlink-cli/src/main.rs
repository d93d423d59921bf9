use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use indicatif::{ProgressBar, ProgressStyle};
use lodlink_core::graph::io;
use lodlink_core::resolver::entity;
use lodlink_core::validate;
use lodlink_core::{Config, DbpediaClient, Resolver, RunStats};

#[derive(Parser)]
#[command(name = "lodlink")]
#[command(about = "Link local RDF entities to DBpedia and Wikidata", long_about = None)]
struct Cli {
    /// Path to a lodlink.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve persons, organizations and places and merge sameAs links
    Enrich {
        /// Input graph in N-Triples format
        input: PathBuf,
        /// Output file (defaults to <input>.enriched.nt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check that every DBpedia URI in a graph still resolves
    Validate {
        /// Graph to check, in N-Triples format
        input: PathBuf,
        /// Where to record URIs that no longer resolve
        #[arg(long, default_value = "invalid_uris.txt")]
        log: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .wrap_err_with(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().wrap_err("failed to load configuration")?,
    };

    match cli.command {
        Commands::Enrich { input, output } => enrich(&config, &input, output).await,
        Commands::Validate { input, log } => validate_uris(&config, &input, &log).await,
    }
}

async fn enrich(config: &Config, input: &Path, output: Option<PathBuf>) -> Result<()> {
    let mut graph = io::read_file(input)
        .wrap_err_with(|| format!("failed to load graph from {}", input.display()))?;

    let persons = entity::persons(&graph);
    let organizations = entity::organizations(&graph);
    let places = entity::places(&graph);
    let total = persons.len() + organizations.len() + places.len();
    println!(
        "Loaded {} triples: {} persons, {} organizations, {} places",
        graph.len(),
        persons.len(),
        organizations.len(),
        places.len()
    );

    let resolver = Resolver::new(DbpediaClient::from_config(&config.catalog), config);
    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    let mut stats = RunStats::default();
    for person in &persons {
        bar.set_message(format!("{} {}", person.given_name, person.family_name));
        stats.record(resolver.resolve_person(&mut graph, person).await);
        bar.inc(1);
    }
    for organization in &organizations {
        bar.set_message(organization.name.clone());
        stats.record(resolver.resolve_organization(&mut graph, organization).await);
        bar.inc(1);
    }
    for place in &places {
        bar.set_message(place.uri.clone());
        stats.record(resolver.resolve_place(&mut graph, place).await);
        bar.inc(1);
    }
    bar.finish_and_clear();

    let output = output.unwrap_or_else(|| default_output(input));
    io::write_file(&graph, &output)
        .wrap_err_with(|| format!("failed to write {}", output.display()))?;

    println!(
        "Resolved {}, unresolved {}, skipped {} (already linked)",
        stats.resolved, stats.unresolved, stats.skipped
    );
    println!("Wrote {} triples to {}", graph.len(), output.display());
    Ok(())
}

async fn validate_uris(config: &Config, input: &Path, log: &Path) -> Result<()> {
    let graph = io::read_file(input)
        .wrap_err_with(|| format!("failed to load graph from {}", input.display()))?;

    let namespace = config.catalog.primary_namespace();
    let uris = validate::collect_namespace_uris(&graph, &namespace);
    println!("{} DBpedia URIs to check", uris.len());

    let client = DbpediaClient::from_config(&config.catalog);
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("checking...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(120));
    let report = validate::sweep(&client, &uris).await;
    spinner.finish_and_clear();

    if report.all_valid() {
        println!("All {} URIs are valid", report.checked);
    } else {
        let body = report.invalid.join("\n") + "\n";
        fs::write(log, body).wrap_err_with(|| format!("failed to write {}", log.display()))?;
        println!(
            "{} of {} URIs are invalid; recorded in {}",
            report.invalid.len(),
            report.checked,
            log.display()
        );
    }
    Ok(())
}

fn default_output(input: &Path) -> PathBuf {
    input.with_extension("enriched.nt")
}
