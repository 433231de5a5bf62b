use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::{debug, info};
use travel_assistant::{
    AppConfig, BudgetLevel, Catalog, Category, MapResult, MapService, Preference, Season,
    TravelError, UserPreferences, display, geocoding, logging, mock_weather_for,
    recommend_with_weather, weather,
};

/// Travel Assistant - find destinations that fit your budget and season
#[derive(Parser)]
#[command(name = "travel-assistant", version)]
#[command(about = "Budget, season and type based travel destination recommendations", long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Destination catalog (JSON array of records) instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend destinations matching your preferences
    Recommend {
        /// Budget ceiling, 1 (cheapest) to 4
        #[arg(long)]
        budget: Option<BudgetLevel>,

        /// Preferred season (Spring, Summer, Fall, Winter or Any)
        #[arg(long)]
        season: Option<Preference<Season>>,

        /// Destination type (City, Beach, Historical or Any)
        #[arg(long = "type", value_name = "TYPE")]
        category: Option<Preference<Category>>,

        /// Calendar month for the weather mock (defaults to the current month)
        #[arg(long)]
        month: Option<u32>,

        /// Seed for reproducible weather readings
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of text cards
        #[arg(long)]
        json: bool,

        /// Look up every recommended destination on the map
        #[arg(long)]
        map: bool,
    },

    /// Show the mock weather reading
    Weather {
        /// Catalog destination to show the weather for
        #[arg(long)]
        destination: Option<String>,

        /// Calendar month (defaults to the current month)
        #[arg(long)]
        month: Option<u32>,

        /// Seed for a reproducible reading
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Resolve a destination name to map coordinates
    Map {
        /// Destination or place name
        name: String,
    },

    /// List the destination catalog
    Catalog,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from_path(cli.config.clone())
        .with_context(|| "Failed to load configuration")?;
    logging::init(&config.logging, cli.verbose)?;

    if let Some(path) = &cli.config {
        debug!("Using config from: {}", path.display());
    }

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::sample(),
    };

    match cli.command {
        Commands::Recommend {
            budget,
            season,
            category,
            month,
            seed,
            json,
            map,
        } => {
            let mut prefs = config.defaults.to_preferences()?;
            apply_flags(&mut prefs, budget, season, category);

            let month = month.unwrap_or_else(weather::current_month);
            let mut rng = seeded_rng(seed);
            let cards = recommend_with_weather(catalog.records(), &prefs, month, &mut rng)?;

            let maps = if map {
                let service = MapService::new(geocoding::from_config(&config.geocoding)?);
                let mut maps: Vec<Option<MapResult>> = Vec::with_capacity(cards.len());
                for card in &cards {
                    maps.push(Some(service.on_map_request(&card.destination.name).await));
                }
                maps
            } else {
                Vec::new()
            };

            if json {
                println!("{}", display::render_json(&prefs, month, &cards, &maps)?);
            } else {
                print!("{}", display::render_recommendations(&cards, &maps));
            }
        }
        Commands::Weather {
            destination,
            month,
            seed,
        } => {
            let month = month.unwrap_or_else(weather::current_month);
            let mut rng = seeded_rng(seed);

            let reading = match destination {
                Some(name) => {
                    let record = catalog.find(&name).ok_or_else(|| {
                        TravelError::validation(format!("Unknown destination '{name}'"))
                    })?;
                    println!("Current Weather for {}", record.name);
                    mock_weather_for(record, month, &mut rng)?
                }
                None => {
                    println!("Current Weather");
                    travel_assistant::mock_weather(month, &mut rng)?
                }
            };
            println!("Temperature: {}", reading.format_temperature());
            println!("{}", reading.conditions);
            println!("{}", reading.format_season());
        }
        Commands::Map { name } => {
            let service = MapService::new(geocoding::from_config(&config.geocoding)?);
            let result = service.on_map_request(&name).await;
            println!("{}", display::render_map(&result));
        }
        Commands::Catalog => {
            print!("{}", display::render_catalog(catalog.records()));
        }
    }

    Ok(())
}

/// Flags given on the command line override configured defaults
fn apply_flags(
    prefs: &mut UserPreferences,
    budget: Option<BudgetLevel>,
    season: Option<Preference<Season>>,
    category: Option<Preference<Category>>,
) {
    if let Some(budget) = budget {
        prefs.budget_ceiling = budget;
    }
    if let Some(season) = season {
        prefs.season = season;
    }
    if let Some(category) = category {
        prefs.category = category;
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(rand::random);
    info!("Weather seed: {}", seed);
    StdRng::seed_from_u64(seed)
}
