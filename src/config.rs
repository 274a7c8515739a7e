// src/config.rs
use crate::api::client::API_BASE_URL;
use crate::api::{DatabaseQuery, SelectFilter};
use crate::constants::{
    DATABASE_ID_ENV_KEY, DEFAULT_ENV_FILE, DEFAULT_INDEX_FILE, DEFAULT_TEMPLATE_FILE,
    TOKEN_ENV_KEY,
};
use crate::error::AppError;
use crate::types::{ApiBaseUrl, ApiKey, DatabaseId};
use clap::Parser;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Article page template containing {{ title }}, {{ date }}, {{ topic }} and {{ content }}
    #[arg(long, default_value = DEFAULT_TEMPLATE_FILE)]
    pub template: PathBuf,

    /// Index page whose article list and count are rewritten
    #[arg(long, default_value = DEFAULT_INDEX_FILE)]
    pub index: PathBuf,

    /// Directory the article-<id>.html files are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// KEY=value file consulted for NOTION_TOKEN and DATABASE_ID when the environment lacks them
    #[arg(long, default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Base URL of the Notion API
    #[arg(long, default_value = API_BASE_URL)]
    pub api_base_url: String,

    /// Keep going when a Notion request fails, treating its result as empty
    #[arg(long, default_value_t = false)]
    pub allow_partial: bool,

    /// HTML-escape titles, dates, topics and block text before inserting them
    #[arg(long, default_value_t = false)]
    pub escape_html: bool,

    /// Only include entries whose select property has a given value (used with --filter-value)
    #[arg(long, requires = "filter_value")]
    pub filter_property: Option<String>,

    /// Value the --filter-property must equal (e.g. "Published")
    #[arg(long, requires = "filter_property")]
    pub filter_value: Option<String>,

    /// Sort entries by this property, newest first
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Also write a debug-level log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// What the build does when a Notion request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop the run before the index is touched.
    #[default]
    Abort,
    /// Log the response and continue as if the request returned nothing.
    Degrade,
}

/// Read access to environment variables.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// The two secrets every run needs.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub token: ApiKey,
    pub database_id: DatabaseId,
}

impl Credentials {
    /// Resolves the token and database id. The environment wins over the
    /// file; empty values count as unset.
    pub fn resolve(env: &impl EnvSource, env_file: &Path) -> Result<Self, AppError> {
        let file_values = read_env_file(env_file)?;
        let lookup = |key: &str| {
            env.var(key)
                .filter(|v| !v.trim().is_empty())
                .or_else(|| file_values.get(key).cloned())
                .filter(|v| !v.trim().is_empty())
        };

        let missing: Vec<&str> = [TOKEN_ENV_KEY, DATABASE_ID_ENV_KEY]
            .into_iter()
            .filter(|&key| lookup(key).is_none())
            .collect();

        if !missing.is_empty() {
            return Err(AppError::MissingConfiguration(format!(
                "{} not set. Set them in {} or as environment variables.",
                missing.join(" and "),
                env_file.display()
            )));
        }

        Ok(Self {
            token: ApiKey::new(lookup(TOKEN_ENV_KEY).unwrap_or_default())?,
            database_id: DatabaseId::new(lookup(DATABASE_ID_ENV_KEY).unwrap_or_default())?,
        })
    }
}

/// Reads `KEY=value` assignments from `path`. A missing file yields no values;
/// lines that cannot be parsed are skipped.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>, AppError> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => {
            log::debug!("No environment file at {}", path.display());
            return Ok(HashMap::new());
        }
        Err(e) => {
            return Err(AppError::EnvFile {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        }
    };

    let mut values = HashMap::new();
    for item in iter {
        match item {
            Ok((key, value)) => {
                values.insert(key, value);
            }
            Err(e) => log::warn!("Ignoring line in {}: {}", path.display(), e),
        }
    }
    Ok(values)
}

/// Resolved site configuration, built once at startup and passed to every stage.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub credentials: Credentials,
    pub api_base_url: ApiBaseUrl,
    pub template_path: PathBuf,
    pub index_path: PathBuf,
    pub output_dir: PathBuf,
    pub failure_policy: FailurePolicy,
    pub escape_html: bool,
    pub query: DatabaseQuery,
}

impl SiteConfig {
    /// Configuration with the default file layout in the working directory.
    pub fn new(credentials: Credentials) -> Result<Self, AppError> {
        Ok(Self {
            credentials,
            api_base_url: ApiBaseUrl::parse(API_BASE_URL)?,
            template_path: PathBuf::from(DEFAULT_TEMPLATE_FILE),
            index_path: PathBuf::from(DEFAULT_INDEX_FILE),
            output_dir: PathBuf::from("."),
            failure_policy: FailurePolicy::default(),
            escape_html: false,
            query: DatabaseQuery::default(),
        })
    }

    /// Resolves the configuration from CLI input and the process environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        Self::resolve_with(cli, &ProcessEnv)
    }

    /// Resolves the configuration from CLI input and the given environment.
    pub fn resolve_with(cli: CommandLineInput, env: &impl EnvSource) -> Result<Self, AppError> {
        let credentials = Credentials::resolve(env, &cli.env_file)?;
        let filter = match (cli.filter_property, cli.filter_value) {
            (Some(property), Some(equals)) => Some(SelectFilter { property, equals }),
            _ => None,
        };

        Ok(Self {
            credentials,
            api_base_url: ApiBaseUrl::parse(&cli.api_base_url)?,
            template_path: cli.template,
            index_path: cli.index,
            output_dir: cli.output_dir,
            failure_policy: if cli.allow_partial {
                FailurePolicy::Degrade
            } else {
                FailurePolicy::Abort
            },
            escape_html: cli.escape_html,
            query: DatabaseQuery {
                filter,
                sort_descending_by: cli.sort_by,
            },
        })
    }
}
