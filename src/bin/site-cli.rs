use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "site-cli")]
#[command(about = "Query CLI for the site gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a path (and optional host) to a company section
    Resolve {
        #[arg(short, long)]
        path: String,

        #[arg(long)]
        host: Option<String>,
    },
    /// Show contact-form purpose options for a page
    FormOptions {
        #[arg(short, long)]
        path: String,

        #[arg(long)]
        host: Option<String>,
    },
    /// Show page metadata for a page
    Metadata {
        #[arg(short, long)]
        path: String,

        #[arg(long)]
        host: Option<String>,
    },
    /// Check gateway health
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Resolve { path, host } => {
            let res = client
                .get(format!("{}/api/section", cli.url))
                .query(&section_query(&path, host.as_deref()))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::FormOptions { path, host } => {
            let res = client
                .get(format!("{}/api/form-options", cli.url))
                .query(&section_query(&path, host.as_deref()))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Metadata { path, host } => {
            let res = client
                .get(format!("{}/api/metadata", cli.url))
                .query(&section_query(&path, host.as_deref()))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Status => {
            let res = client.get(format!("{}/healthz", cli.url)).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

fn section_query(path: &str, host: Option<&str>) -> Vec<(&'static str, String)> {
    let mut query = vec![("path", path.to_string())];
    if let Some(host) = host {
        query.push(("host", host.to_string()));
    }
    query
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
