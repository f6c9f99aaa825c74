use anyhow::Context;
use clap::Parser;
use static_map_url::utils::{logger, validation::Validate};
use static_map_url::{CliArgs, MapConfig, MapError};

fn main() {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Loading map definition from: {}", args.config);
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    match run(&args) {
        Ok(url) => println!("{}", url),
        Err(e) => {
            tracing::error!("Failed to build map url: {:#}", e);
            eprintln!("❌ {:#}", e);

            let exit_code = match e.downcast_ref::<MapError>() {
                Some(map_error) => {
                    eprintln!("💡 {}", map_error.recovery_suggestion());
                    if map_error.is_usage_error() {
                        1
                    } else {
                        2
                    }
                }
                None => 2,
            };
            std::process::exit(exit_code);
        }
    }
}

fn run(args: &CliArgs) -> anyhow::Result<String> {
    let mut config = MapConfig::from_file(&args.config)
        .with_context(|| format!("cannot load map definition '{}'", args.config))?;
    config.markers.extend(args.extra_markers()?);
    config.validate()?;

    tracing::info!(
        "Map definition has {} options and {} markers",
        config.map.len(),
        config.markers.len()
    );

    Ok(config.into_builder()?.build_url()?)
}
