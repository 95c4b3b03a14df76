use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{DirectoryIndex, Facet, Professional, Review};
use pipeline::{DirectoryEngine, DirectoryQuery, ReviewQuery, ReviewSortKey, ReviewSummary, SortKey};
use rand::seq::IndexedRandom;
use rand::Rng;
use server::{load_profile, DirectorySession};
use sources::MockProfessionalSource;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Savayas - find a mental health professional
#[derive(Parser)]
#[command(name = "savayas")]
#[command(about = "Search, filter and compare mental health professionals", long_about = None)]
struct Cli {
    /// Directory holding professionals.json and reviews.json (defaults to the built-in sample)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Simulated data source latency in milliseconds
    #[arg(long, default_value = "0")]
    latency_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List professionals matching a query
    List {
        /// Free-text search over name, title and specialties
        #[arg(long)]
        search: Option<String>,

        /// Professional type, matched against the title (repeatable)
        #[arg(long = "type")]
        types: Vec<String>,

        /// Specialty tag (repeatable)
        #[arg(long = "specialty")]
        specialties: Vec<String>,

        /// Language (repeatable)
        #[arg(long = "language")]
        languages: Vec<String>,

        /// Availability, e.g. weekdays, evenings (repeatable)
        #[arg(long)]
        availability: Vec<String>,

        /// Session type, e.g. "video call" (repeatable)
        #[arg(long = "session-type")]
        session_types: Vec<String>,

        /// Lowest session price
        #[arg(long)]
        min_price: Option<u32>,

        /// Highest session price
        #[arg(long)]
        max_price: Option<u32>,

        /// recommended, price-asc, price-desc, rating-desc or reviews-desc
        #[arg(long, default_value = "recommended")]
        sort: SortKey,
    },

    /// Show one professional's profile and review summary
    Show {
        /// Professional id, e.g. dr-sarah-johnson
        #[arg(long)]
        id: String,
    },

    /// List a professional's reviews
    Reviews {
        /// Professional id
        #[arg(long)]
        id: String,

        /// Search review text and author names
        #[arg(long)]
        search: Option<String>,

        /// Only reviews with exactly this many stars
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: Option<u8>,

        /// recent, oldest, highest, lowest or helpful
        #[arg(long, default_value = "recent")]
        sort: ReviewSortKey,
    },

    /// Show the homepage category sections
    Categories {
        /// Entries per section
        #[arg(long, default_value = "3")]
        limit: usize,
    },

    /// Time repeated random directory queries
    Benchmark {
        /// Number of queries to run
        #[arg(long, default_value = "1000")]
        iterations: usize,
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
    let data_index = Arc::new(match &cli.data_dir {
        Some(dir) => DirectoryIndex::load_from_dir(dir)
            .with_context(|| format!("Failed to load directory data from {}", dir.display()))?,
        None => DirectoryIndex::from_fixtures().context("Failed to load sample directory")?,
    });
    let (professionals, reviews) = data_index.counts();
    println!(
        "{} Loaded {} professionals and {} reviews in {:?}",
        "✓".green(),
        professionals,
        reviews,
        start.elapsed()
    );

    let source = MockProfessionalSource::new(data_index.clone())
        .with_latency(Duration::from_millis(cli.latency_ms));

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List {
            search,
            types,
            specialties,
            languages,
            availability,
            session_types,
            min_price,
            max_price,
            sort,
        } => {
            let mut query = DirectoryQuery::new()
                .with_search(search.unwrap_or_default())
                .with_types(types)
                .with_facet(Facet::Specialty, specialties)
                .with_facet(Facet::Language, languages)
                .with_facet(Facet::Availability, availability)
                .with_facet(Facet::SessionType, session_types)
                .with_sort(sort);
            query.price_range.min = min_price.unwrap_or(query.price_range.min);
            query.price_range.max = max_price.unwrap_or(query.price_range.max);
            handle_list(source, query).await?
        }
        Commands::Show { id } => handle_show(&source, &id).await?,
        Commands::Reviews {
            id,
            search,
            rating,
            sort,
        } => {
            let query = ReviewQuery::new()
                .with_search(search.unwrap_or_default())
                .with_rating(rating)
                .with_sort(sort);
            handle_reviews(&source, &id, query).await?
        }
        Commands::Categories { limit } => handle_categories(source, limit).await?,
        Commands::Benchmark { iterations } => handle_benchmark(data_index, iterations)?,
    }

    Ok(())
}

/// Handle the 'list' command
async fn handle_list(source: MockProfessionalSource, query: DirectoryQuery) -> Result<()> {
    let mut session = DirectorySession::new(source);
    session.load().await;
    session.set_query(query);

    let query = session.query();
    println!(
        "{}",
        format!(
            "Showing {} professionals (sort: {}, price: {})",
            session.view().len(),
            query.sort_key,
            query.price_range
        )
        .bold()
        .blue()
    );
    if session.view().is_empty() {
        println!("No professionals match these filters. Try removing some.");
        return Ok(());
    }
    print_professionals(session.view());
    Ok(())
}

/// Handle the 'show' command
async fn handle_show(source: &MockProfessionalSource, id: &str) -> Result<()> {
    let page = load_profile(source, id)
        .await
        .ok_or_else(|| anyhow!("Professional {} not found", id))?;
    let pro = &page.professional;

    println!("{}", format!("{} - {}", pro.name, pro.title).bold().blue());
    println!("{}Specialty: {}", "• ".green(), pro.specialty);
    println!("{}Price: {} per session", "• ".green(), pro.price);
    println!(
        "{}Rating: {:.1} ({} reviews)",
        "• ".green(),
        pro.rating,
        pro.review_count
    );
    if let Some(location) = &pro.location {
        println!("{}Location: {}", "• ".green(), location);
    }
    for facet in Facet::ALL {
        let tags = pro.tags(facet);
        if !tags.is_empty() {
            println!("{}{}: {}", "• ".cyan(), facet.label(), tags.join(", "));
        }
    }
    if let Some(bio) = &pro.bio {
        println!("\n{}", bio);
    }

    println!();
    print_summary(page.reviews.summary());
    Ok(())
}

/// Handle the 'reviews' command
async fn handle_reviews(source: &MockProfessionalSource, id: &str, query: ReviewQuery) -> Result<()> {
    let mut page = load_profile(source, id)
        .await
        .ok_or_else(|| anyhow!("Professional {} not found", id))?;

    page.reviews.set_search(query.search_term);
    page.reviews.set_rating_filter(query.rating_filter);
    page.reviews.set_sort(query.sort_key);

    print_summary(page.reviews.summary());
    println!();
    println!(
        "{}",
        format!(
            "Showing {} of {} reviews (sort: {})",
            page.reviews.view().len(),
            page.reviews.reviews().len(),
            page.reviews.query().sort_key
        )
        .bold()
        .blue()
    );
    if page.reviews.view().is_empty() {
        println!("No reviews match your search.");
    }
    print_reviews(page.reviews.view());
    Ok(())
}

/// Handle the 'categories' command
async fn handle_categories(source: MockProfessionalSource, limit: usize) -> Result<()> {
    let mut session = DirectorySession::new(source);
    session.load().await;
    let sections = session.sections(limit);

    for (title, pros) in [
        ("Featured Professionals", &sections.featured),
        ("Relationship Experts", &sections.relationship),
        ("Certified Listeners", &sections.listeners),
    ] {
        println!("{}", title.bold().blue());
        if pros.is_empty() {
            println!("  (none)");
        }
        print_professionals(pros);
        println!();
    }
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(data_index: Arc<DirectoryIndex>, iterations: usize) -> Result<()> {
    if iterations == 0 {
        return Err(anyhow!("iterations must be at least 1"));
    }

    let engine = DirectoryEngine::new();
    let all = data_index.professionals();
    let mut rng = rand::rng();

    // Build the query vocabulary from the directory itself
    let words: Vec<String> = all
        .iter()
        .flat_map(|p| p.specialty.split_whitespace().map(|w| w.to_lowercase()))
        .filter(|w| w.len() > 2)
        .collect();
    let specialties: Vec<String> = all
        .iter()
        .flat_map(|p| p.tags(Facet::Specialty).iter().cloned())
        .collect();

    let mut timings = Vec::with_capacity(iterations);
    let mut total_results = 0usize;
    for _ in 0..iterations {
        let mut query = DirectoryQuery::new();
        if rng.random_bool(0.5) {
            if let Some(word) = words.choose(&mut rng) {
                query = query.with_search(word.clone());
            }
        }
        if rng.random_bool(0.3) {
            if let Some(tag) = specialties.choose(&mut rng) {
                query = query.with_facet(Facet::Specialty, [tag.clone()]);
            }
        }
        let min = rng.random_range(0..1500);
        query = query
            .with_price_range(min, min + rng.random_range(0..3000))
            .with_sort(*SortKey::ALL.choose(&mut rng).unwrap_or(&SortKey::Recommended));

        let start = Instant::now();
        total_results += engine.query(all, &query).len();
        timings.push(start.elapsed());
    }

    let total_time: Duration = timings.iter().sum();
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[((timings.len() as f32 * 0.95) as usize).min(timings.len() - 1)];
    let p99 = timings[((timings.len() as f32 * 0.99) as usize).min(timings.len() - 1)];

    println!("{}", "Benchmark results:".bold().blue());
    println!("Queries: {} over {} professionals", iterations, all.len());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", total_time / iterations as u32);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!(
        "Average results per query: {:.2}",
        total_results as f64 / iterations as f64
    );
    Ok(())
}

/// Helper function to format and print a listing
fn print_professionals(professionals: &[Professional]) {
    for (i, pro) in professionals.iter().enumerate() {
        println!(
            "{}. {} - {} [{}] {} {:.1} ({} reviews) - {}",
            (i + 1).to_string().green(),
            pro.name.bold(),
            pro.title,
            pro.specialty,
            "★".yellow(),
            pro.rating,
            pro.review_count,
            pro.price
        );
    }
}

/// Helper function to print the rating summary block
fn print_summary(summary: &ReviewSummary) {
    let stars = summary.rounded_stars() as usize;
    println!(
        "{} {}{} ({} reviews)",
        summary.display_rating().bold(),
        "★".repeat(stars).yellow(),
        "☆".repeat(5 - stars),
        summary.total_reviews
    );
    for (star, pct) in summary.percentages() {
        let bar = "█".repeat((pct / 5) as usize);
        println!("  {} star {:<20} {:>3}%", star, bar.yellow(), pct);
    }
}

/// Helper function to print reviews
fn print_reviews(reviews: &[Review]) {
    for review in reviews {
        let verified = if review.verified { " ✓ verified".green() } else { "".normal() };
        println!(
            "{} {}{} - {}",
            "★".repeat(review.rating as usize).yellow(),
            review.author_name.bold(),
            verified,
            review.date.format("%Y-%m-%d")
        );
        println!("  {}", review.content);
        println!("  {} found this helpful", review.helpful_count);
    }
}
