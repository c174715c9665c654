use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use validarfc::rfc::validator;

#[derive(Parser)]
#[command(name = "rfc-cli")]
#[command(about = "Command line client for the ValidaRFC service", long_about = None)]
struct Cli {
    #[arg(short, long, env = "VALIDARFC_URL", default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service health
    Health,
    /// Validate one RFC against the service
    Validate { rfc: String },
    /// Validate several RFCs in one request
    Bulk {
        #[arg(required = true)]
        rfcs: Vec<String>,
    },
    /// Validate locally without contacting the service
    Check {
        #[arg(required = true)]
        rfcs: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Health => {
            let res = client.get(format!("{}/api/health", base)).send().await?;
            print_response(res).await
        }
        Commands::Validate { rfc } => {
            let res = client
                .post(format!("{}/api/validate", base))
                .json(&json!({ "rfc": rfc }))
                .send()
                .await?;
            print_response(res).await
        }
        Commands::Bulk { rfcs } => {
            let res = client
                .post(format!("{}/api/validate/bulk", base))
                .json(&json!({ "rfcs": rfcs }))
                .send()
                .await?;
            print_response(res).await
        }
        Commands::Check { rfcs } => {
            let results: Vec<_> = rfcs.iter().map(|raw| validator::validate(raw)).collect();
            println!("{}", serde_json::to_string_pretty(&results)?);

            if results.iter().all(|r| r.is_valid) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

async fn print_response(res: reqwest::Response) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(ExitCode::FAILURE);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(ExitCode::SUCCESS)
}
