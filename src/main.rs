use clap::Parser;
use svgstore::utils::{logger, validation::Validate};
use svgstore::{CliConfig, RemoveOutcome, StoreBuilder, StoreCommand, StoreRepository};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting svgstore CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolved() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match config.command.clone() {
        StoreCommand::Create => {
            let json = config.json;
            let builder = StoreBuilder::new(config);
            let result = builder.build();

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if result.success {
                println!("✅ Svgstore created.");
                println!("📁 {} svg files found in source directory", result.files_scanned);
                println!(
                    "📦 {} symbols written in destination file",
                    result.symbols_written
                );
            } else {
                eprintln!("❌ Store file not created");
            }

            if !result.success {
                std::process::exit(1);
            }
        }
        StoreCommand::Exists => {
            let repository = StoreRepository::new(config.destination);
            if repository.exists() {
                println!("✅ Svgstore exists");
            } else {
                eprintln!("❌ Svgstore does not exist");
                std::process::exit(1);
            }
        }
        StoreCommand::Remove => {
            let repository = StoreRepository::new(config.destination);
            match repository.remove() {
                RemoveOutcome::Removed => println!("✅ Svgstore removed"),
                RemoveOutcome::NotFound => {
                    println!("⚠️ Svgstore does not exist, nothing to remove.")
                }
                RemoveOutcome::Failed(e) => {
                    tracing::error!("Remove failed: {}", e);
                    eprintln!("❌ Cannot remove svgstore");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
