use clap::Parser;
use recipe_dedup::config::{CliConfig, Command};
use recipe_dedup::utils::{logger, validation::Validate};
use recipe_dedup::{
    are_names_similar, normalize_recipe_name, DedupError, DuplicateDetector, JsonCatalogStorage,
    RecipeCandidate, Result,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let toml = match config.load_toml() {
        Ok(toml) => toml,
        Err(e) => exit_with(&e),
    };

    let verbose = config.verbose || toml.verbose();
    if config.json_logs || toml.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate().and_then(|_| toml.validate()) {
        tracing::error!("Configuration validation failed: {}", e);
        exit_with(&e);
    }

    match run(&config, &toml).await {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Duplicate check failed: {} (severity: {:?})", e, e.severity());
            exit_with(&e)
        }
    }
}

async fn run(config: &CliConfig, toml: &recipe_dedup::TomlConfig) -> Result<String> {
    let settings = config.detection_settings(toml);

    let open_detector = || -> Result<DuplicateDetector<JsonCatalogStorage>> {
        let detector = DuplicateDetector::with_settings(
            JsonCatalogStorage::new(config.catalog_path(toml)?),
            settings,
        );
        tracing::debug!(
            "Using catalog {} with {:?}",
            detector.storage().path().display(),
            detector.settings()
        );
        Ok(detector)
    };

    match &config.command {
        Command::Check {
            user,
            name,
            ingredients,
        } => {
            let detector = open_detector()?;
            let candidate = RecipeCandidate::new(name.clone(), ingredients.clone());
            let verdict = detector.check_candidate(&candidate, user).await?;
            Ok(serde_json::to_string_pretty(&verdict)?)
        }
        Command::CheckGlobal { name, ingredients } => {
            let detector = open_detector()?;
            let candidate = RecipeCandidate::new(name.clone(), ingredients.clone());
            let verdict = detector.check_global_candidate(&candidate).await?;
            Ok(serde_json::to_string_pretty(&verdict)?)
        }
        Command::Normalize { name } => Ok(normalize_recipe_name(name)),
        Command::Signature { ingredients } => Ok(settings.signature_scheme.signature(ingredients)),
        Command::Similar {
            first,
            second,
            threshold,
        } => Ok(are_names_similar(first, second, *threshold).to_string()),
    }
}

fn exit_with(error: &DedupError) -> ! {
    eprintln!("❌ {}", error);
    eprintln!("💡 Suggestion: {}", error.recovery_suggestion());
    std::process::exit(error.exit_code());
}
