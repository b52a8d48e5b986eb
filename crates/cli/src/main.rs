use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::Catalog;
use queries::{QueryEngine, QueryError};
use recommender::ContentRecommender;
use server::{describe_outcome, CatalogService, Request, Response};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// Movie catalog queries and genre-based recommendations
#[derive(Parser)]
#[command(name = "catalog-cli")]
#[command(about = "Query a movie catalog and get genre-based recommendations", long_about = None)]
struct Cli {
    /// Directory holding movies.dat, cast.dat and crew.dat
    #[arg(short, long, default_value = "data/catalog")]
    data_dir: PathBuf,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Minimum vote count for the `votes` command
    #[arg(long, default_value = "2000")]
    vote_threshold: u32,

    /// Number of recommendations to return
    #[arg(long, default_value = "5")]
    top_k: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count movies released in a month (Spanish name, e.g. "enero")
    Month { name: String },

    /// Count movies released on a weekday (Spanish name, e.g. "lunes")
    Weekday { name: String },

    /// Show the release year and popularity of a title
    Score { title: String },

    /// Show vote count and average of a title
    Votes { title: String },

    /// Revenue summary for an actor
    Actor { name: String },

    /// Return summary for a director
    Director { name: String },

    /// Recommend movies with similar genres (title is case-sensitive)
    Recommend { title: String },

    /// Show catalog statistics
    Stats,

    /// Run concurrent recommendation requests and report latency
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_files(&cli.data_dir).context("Failed to load movie catalog")?,
    );
    info!("Loaded catalog in {:?}", start.elapsed());

    let service = CatalogService::new(catalog.clone())
        .with_engine(QueryEngine::new(catalog.clone()).with_vote_threshold(cli.vote_threshold))
        .with_recommender(ContentRecommender::new(catalog.clone()).with_top_k(cli.top_k));

    let request = match cli.command {
        Commands::Month { name } => Request::CountByMonth(name),
        Commands::Weekday { name } => Request::CountByWeekday(name),
        Commands::Score { title } => Request::Score(title),
        Commands::Votes { title } => Request::Votes(title),
        Commands::Actor { name } => Request::Actor(name),
        Commands::Director { name } => Request::Director(name),
        Commands::Recommend { title } => Request::Recommend(title),
        Commands::Stats => return handle_stats(&service, cli.json),
        Commands::Benchmark { requests } => return handle_benchmark(&service, requests).await,
    };

    let outcome = service.dispatch(request).await?;
    handle_outcome(outcome, cli.json)
}

/// Print a response, or turn a failed outcome into the process error
fn handle_outcome(outcome: std::result::Result<Response, QueryError>, json: bool) -> Result<()> {
    match outcome {
        Ok(response) if json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Ok(response) => {
            print_response(&response);
            Ok(())
        }
        // Below the vote threshold is an answer, not a failure
        Err(outcome) if !outcome.is_failure() => {
            println!("{}", describe_outcome(&outcome).yellow());
            Ok(())
        }
        Err(outcome) => Err(anyhow!(describe_outcome(&outcome))),
    }
}

fn print_response(response: &Response) {
    match response {
        Response::Recommendations { reference, items } => {
            println!("{}", format!("Movies similar to {}:", reference).bold().blue());
            for (rank, item) in items.iter().enumerate() {
                println!(
                    "{}. {} (similarity: {:.3})",
                    (rank + 1).to_string().green(),
                    item.title,
                    item.similarity
                );
            }
        }
        other => println!("{} {}", "•".green(), other.summary()),
    }
}

/// Catalog and recommender settings as a JSON document
fn stats_json(service: &CatalogService) -> serde_json::Value {
    let catalog = service.catalog();
    let (movies, cast, crew) = catalog.counts();
    let dated = catalog
        .movies()
        .iter()
        .filter(|m| m.release_date.is_some())
        .count();
    serde_json::json!({
        "movies": movies,
        "dated_movies": dated,
        "cast_entries": cast,
        "crew_entries": crew,
        "genre_columns": catalog.genre_columns(),
        "active_genres": service.recommender().active_genres().unwrap_or(&[]),
        "top_k": service.recommender().top_k(),
    })
}

/// Handle the 'stats' command
fn handle_stats(service: &CatalogService, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&stats_json(service))?);
        return Ok(());
    }

    let catalog = service.catalog();
    let (movies, cast, crew) = catalog.counts();
    let dated = catalog
        .movies()
        .iter()
        .filter(|m| m.release_date.is_some())
        .count();
    let active = service.recommender().active_genres().unwrap_or(&[]);

    println!("{}", "Catalog statistics".bold().blue());
    println!("{}Movies: {} ({} with a release date)", "• ".cyan(), movies, dated);
    println!("{}Cast entries: {}", "• ".cyan(), cast);
    println!("{}Crew entries: {}", "• ".cyan(), crew);
    println!(
        "{}Genre columns: {}",
        "• ".cyan(),
        catalog.genre_columns().join(", ")
    );
    if active.is_empty() {
        println!("{}Recommendations: {}", "• ".cyan(), "unavailable".red());
    } else {
        println!(
            "{}Recommending on: {} (top {})",
            "• ".cyan(),
            active.join(", "),
            service.recommender().top_k()
        );
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(service: &CatalogService, requests: usize) -> Result<()> {
    let titles: Vec<String> = service
        .catalog()
        .movies()
        .iter()
        .map(|m| m.title.clone())
        .collect();
    if titles.is_empty() || requests == 0 {
        return Err(anyhow!("Nothing to benchmark"));
    }

    // Pick random reference titles
    let picks: Vec<String> = (0..requests)
        .map(|_| titles[rand::random::<u32>() as usize % titles.len()].clone())
        .collect();

    let wall_clock = Instant::now();
    let mut handles = vec![];
    for title in picks {
        let service = service.clone();
        let handle = tokio::spawn(async move {
            let start = Instant::now();
            let outcome = service.dispatch(Request::Recommend(title)).await?;
            Ok::<_, anyhow::Error>((start.elapsed(), outcome.is_ok()))
        });
        handles.push(handle);
    }

    let mut timings: Vec<Duration> = vec![];
    let mut failures = 0;
    for handle in handles {
        let (elapsed, ok) = handle.await??;
        timings.push(elapsed);
        if !ok {
            failures += 1;
        }
    }
    let total_time = wall_clock.elapsed();

    let avg_latency = timings.iter().sum::<Duration>() / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);
    if failures > 0 {
        println!("{} {} requests did not produce recommendations", "!".yellow(), failures);
    }

    Ok(())
}
