use std::str::FromStr;

use color_eyre::eyre::{eyre, Report, WrapErr};
use forager::{FallbackPolicy, InfoResponse, Orientation, Preset, SelectorConfig, TailPolicy};

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    /// Indented span tree, handy when reading a single game locally.
    Tree,
}

impl FromStr for LogFormat {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "tree" => Ok(LogFormat::Tree),
            other => Err(eyre!("unknown log format {other:?}, expected pretty, json or tree")),
        }
    }
}

/// Everything the server reads from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub selector: SelectorConfig,
    /// Seed for the tie-break generator; a random one is drawn when unset.
    pub seed: Option<u64>,
    pub appearance: InfoResponse,
    pub log_format: LogFormat,
    pub sentry_dsn: Option<String>,
}

const DEFAULT_PORT: u16 = 8000;

pub fn default_appearance() -> InfoResponse {
    InfoResponse {
        apiversion: "1".to_string(),
        author: "shxrpy".to_string(),
        color: "#0fd6d6".to_string(),
        head: "gamer".to_string(),
        tail: "coffee".to_string(),
    }
}

impl Config {
    pub fn from_env() -> color_eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> color_eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let preset: Preset = parse(&get, "SNAKE_PRESET")?.unwrap_or_default();
        let mut selector = SelectorConfig::from(preset);
        if let Some(orientation) = parse::<Orientation>(&get, "SNAKE_ORIENTATION")? {
            selector = selector.with_orientation(orientation);
        }
        if let Some(tail_policy) = parse::<TailPolicy>(&get, "SNAKE_TAIL_POLICY")? {
            selector = selector.with_tail_policy(tail_policy);
        }
        if let Some(fallback) = parse::<FallbackPolicy>(&get, "SNAKE_FALLBACK")? {
            selector = selector.with_fallback(fallback);
        }

        let defaults = default_appearance();
        let appearance = InfoResponse {
            apiversion: defaults.apiversion,
            author: get("SNAKE_AUTHOR").unwrap_or(defaults.author),
            color: get("SNAKE_COLOR").unwrap_or(defaults.color),
            head: get("SNAKE_HEAD").unwrap_or(defaults.head),
            tail: get("SNAKE_TAIL").unwrap_or(defaults.tail),
        };
        validate_color(&appearance.color)?;

        Ok(Self {
            port: parse(&get, "PORT")?.unwrap_or(DEFAULT_PORT),
            selector,
            seed: parse(&get, "SNAKE_SEED")?,
            appearance,
            log_format: parse(&get, "LOG_FORMAT")?.unwrap_or_default(),
            sentry_dsn: get("SENTRY_DSN"),
        })
    }
}

fn parse<T>(get: &impl Fn(&str) -> Option<String>, key: &str) -> color_eyre::Result<Option<T>>
where
    T: FromStr,
    T::Err: Into<Report>,
{
    get(key)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(Into::<Report>::into)
                .wrap_err_with(|| format!("invalid value {value:?} for {key}"))
        })
        .transpose()
}

fn validate_color(color: &str) -> color_eyre::Result<()> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(eyre!("SNAKE_COLOR must look like #rrggbb, got {color:?}"))
    }
}
