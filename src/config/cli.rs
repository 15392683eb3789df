use crate::config::TomlConfig;
use crate::core::{DetectionSettings, SignatureScheme};
use crate::utils::error::{DedupError, Result};
use crate::utils::validation::{validate_path, validate_threshold, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "recipe-dedup")]
#[command(about = "Detect duplicate and near-duplicate cocktail recipes")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "JSON recipe catalog (overrides [catalog].path)")]
    pub catalog: Option<String>,

    #[arg(long, global = true, value_enum, help = "Signature hash (overrides [detection])")]
    pub signature_scheme: Option<SchemeArg>,

    #[arg(long, short, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check a recipe against a user's collection and the global catalog
    Check {
        #[arg(long)]
        user: String,
        #[arg(long)]
        name: String,
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
    },
    /// Check a recipe against the global catalog only
    CheckGlobal {
        #[arg(long)]
        name: String,
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
    },
    /// Print the normalized form of a recipe name
    Normalize { name: String },
    /// Print the ingredient signature
    Signature {
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
    },
    /// Compare two recipe names
    Similar {
        first: String,
        second: String,
        #[arg(long, default_value_t = crate::core::similarity::USER_SIMILARITY_THRESHOLD)]
        threshold: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SchemeArg {
    #[value(name = "rolling32")]
    Rolling32,
    #[value(name = "fnv1a64")]
    Fnv1a64,
}

impl From<SchemeArg> for SignatureScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Rolling32 => SignatureScheme::Rolling32,
            SchemeArg::Fnv1a64 => SignatureScheme::Fnv1a64,
        }
    }
}

impl CliConfig {
    /// 讀取 TOML 配置 (若有指定)
    pub fn load_toml(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => TomlConfig::from_file(path),
            None => Ok(TomlConfig::default()),
        }
    }

    /// 合併 TOML 與命令列參數，命令列優先
    pub fn detection_settings(&self, toml: &TomlConfig) -> DetectionSettings {
        let mut settings = toml.detection;
        if let Some(scheme) = self.signature_scheme {
            settings.signature_scheme = scheme.into();
        }
        settings
    }

    pub fn catalog_path(&self, toml: &TomlConfig) -> Result<String> {
        self.catalog
            .clone()
            .or_else(|| toml.catalog_path().map(str::to_string))
            .ok_or_else(|| DedupError::ConfigError {
                message: "No recipe catalog given; pass --catalog or set [catalog].path"
                    .to_string(),
            })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("--config", path)?;
        }
        if let Some(path) = &self.catalog {
            validate_path("--catalog", path)?;
        }
        if let Command::Similar { threshold, .. } = &self.command {
            validate_threshold("--threshold", *threshold)?;
        }
        Ok(())
    }
}
