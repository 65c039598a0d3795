// Downtown Directory - Command Line
//
// Browse the seeded directory, aggregate reviews, and sync from the
// external review service without starting the HTTP server.

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use downtown_directory::{
    logging, Business, BusinessRepository, Directory, DirectoryConfig, ExternalSearch, YelpClient,
};
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "directory", version, about = "Downtown business directory")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every business
    List {
        /// Only businesses currently flagged open
        #[arg(long)]
        open: bool,
    },
    /// Case-insensitive search over name, description and category
    Search {
        query: String,
        #[arg(long)]
        open: bool,
    },
    /// Businesses in one category ("All" lists everything)
    Category {
        name: String,
        #[arg(long)]
        open: bool,
    },
    /// Full details of one business
    Show { id: u32 },
    /// First-party and external reviews of one business
    Reviews { id: u32 },
    /// Refresh rating, review count, status and phone from the review service
    Sync { id: u32 },
    /// Distinct categories in first-seen order
    Categories,
    /// Search the external review service directly
    Discover {
        location: String,
        /// Comma-separated category aliases
        #[arg(long)]
        categories: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("❌ {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = DirectoryConfig::load_with_dotenv().context("failed to load configuration")?;
    logging::init(&config.log.level)?;

    let client = YelpClient::new(&config.yelp).context("failed to build review service client")?;
    let directory = Directory::new(BusinessRepository::with_defaults(), Arc::new(client));

    match cli.command {
        Command::List { open } => print_businesses(&directory.list(open).await),
        Command::Search { query, open } => {
            print_businesses(&directory.search(&query, open).await)
        }
        Command::Category { name, open } => {
            print_businesses(&directory.by_category(&name, open).await)
        }
        Command::Show { id } => print_details(&directory.get(id).await?),
        Command::Reviews { id } => {
            let reviews = directory.reviews(id).await?;
            if reviews.is_empty() {
                println!("No reviews yet.");
            }
            for review in reviews {
                let source = if review.is_external() { "yelp" } else { "local" };
                println!(
                    "{} {}  {} ({source}, {})",
                    "★".repeat(usize::from(review.rating.min(5))),
                    review.author,
                    review.text,
                    review.date
                );
            }
        }
        Command::Sync { id } => {
            let business = directory.sync(id).await?;
            println!("✓ Synced {}", business.name);
            print_details(&business);
        }
        Command::Categories => {
            for category in directory.categories().await {
                println!("{category}");
            }
        }
        Command::Discover {
            location,
            categories,
            limit,
        } => {
            let mut search = ExternalSearch::new(location);
            if let Some(categories) = categories {
                search = search.with_categories(categories);
            }
            if let Some(limit) = limit {
                search = search.with_limit(limit);
            }

            for business in directory.discover(&search).await? {
                let address = business
                    .location
                    .as_ref()
                    .map(|location| location.one_line())
                    .unwrap_or_default();
                println!(
                    "{:<36} {:>3.1}★ ({:>4})  {address}",
                    business.name, business.rating, business.review_count
                );
            }
        }
    }

    Ok(())
}

fn print_businesses(businesses: &[Business]) {
    if businesses.is_empty() {
        println!("No businesses found.");
        return;
    }

    for business in businesses {
        let rating = business
            .rating
            .map(|rating| format!("{rating:.1}★"))
            .unwrap_or_else(|| "-".to_string());
        let status = if business.is_open_now() { "open" } else { "closed" };
        println!(
            "{:>3}  {:<28} {:<12} {:>5}  {status}",
            business.id, business.name, business.category, rating
        );
    }
}

fn print_details(business: &Business) {
    println!("🏪 {} ({})", business.name, business.category);
    println!("   {}", business.description);
    println!("   📍 {}", business.address);
    if let Some(phone) = &business.phone {
        println!("   📞 {phone}");
    }
    if let Some(website) = &business.website {
        println!("   🔗 {website}");
    }
    if let (Some(rating), Some(count)) = (business.rating, business.review_count) {
        println!("   ⭐ {rating:.1} from {count} reviews");
    }

    let today = Local::now().weekday();
    match business.hours_on(today) {
        Some(hours) => println!("   🕒 Today ({today}): {hours}"),
        None => println!("   🕒 Hours not listed"),
    }
    println!(
        "   Status: {}",
        if business.is_open_now() { "open" } else { "closed" }
    );
}
