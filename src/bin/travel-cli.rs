use clap::{Parser, Subcommand};
use serde::Serialize;

use travel_assistant::client::{ClientError, TravelClient};
use travel_assistant::query::TravelQuery;

#[derive(Parser)]
#[command(name = "travel-cli")]
#[command(about = "Command-line client for the Travel Assistant API", long_about = None)]
struct Cli {
    #[arg(short, long, env = "TRAVEL_API_URL", default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check API health
    Health,
    /// List all destination recommendations
    List,
    /// Show the first destination whose name contains NAME
    Get {
        name: String,
    },
    /// Search destinations by name fragment and budget
    Search {
        destination: String,
        #[arg(long)]
        budget: Option<f64>,
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
        /// May be repeated
        #[arg(long = "preference")]
        preferences: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = TravelClient::new(&cli.url)?;

    match cli.command {
        Commands::Health => print_json(&client.health().await?)?,
        Commands::List => print_json(&client.list_recommendations().await?)?,
        Commands::Get { name } => match client.get_recommendation(&name).await {
            Ok(record) => print_json(&record)?,
            Err(ClientError::NotFound) => {
                eprintln!("Error: no destination matches {:?}", name);
                std::process::exit(1);
            }
            Err(e) => return Err(e.into()),
        },
        Commands::Search {
            destination,
            budget,
            start_date,
            end_date,
            preferences,
        } => {
            let query = TravelQuery {
                destination,
                start_date,
                end_date,
                budget,
                preferences,
            };
            print_json(&client.search(&query).await?)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
