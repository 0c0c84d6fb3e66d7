//! Settings layered from defaults, a TOML file, `FRONTPAGE_*` environment
//! variables and finally the command line.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use chrono::{Local, NaiveDate};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use frontpage_fetch::data::DEFAULT_BASE_URL;
use frontpage_fetch::effects::DEFAULT_MAX_CONNECTIONS;
use frontpage_fetch::{Catalog, DateRange, ScanKind};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::cli::App;

pub const DEFAULT_CONFIG_FILE: &str = "frontpage.toml";
pub const ENV_PREFIX: &str = "FRONTPAGE_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,
    pub output_dir: PathBuf,
    pub max_connections: usize,
    pub low_res_start: NaiveDate,
    pub high_res_start: NaiveDate,
    /// `None` means today, read once at startup.
    pub end_date: Option<NaiveDate>,
    pub kinds: Vec<ScanKind>,
    pub progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("."),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            low_res_start: ScanKind::LowRes.first_day(),
            high_res_start: ScanKind::HighRes.first_day(),
            end_date: None,
            kinds: ScanKind::ALL.to_vec(),
            progress: true,
        }
    }
}

impl Settings {
    /// Every layer below the command line.
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let file = config_file.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file_exact(file))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load(app: &App) -> anyhow::Result<Self> {
        if let Some(path) = &app.config {
            if !path.is_file() {
                bail!("config file {} does not exist", path.display());
            }
        }

        let mut settings: Settings = Self::figment(app.config.as_deref())
            .extract()
            .context("failed to read settings")?;
        settings.apply(app);
        settings.validate()?;
        Ok(settings)
    }

    fn apply(&mut self, app: &App) {
        if let Some(dir) = &app.output_dir {
            self.output_dir = dir.clone();
        }
        if let Some(base) = &app.base_url {
            self.base_url = base.clone();
        }
        if let Some(max) = app.max_connections {
            self.max_connections = max;
        }
        if let Some(until) = app.until {
            self.end_date = Some(until);
        }
        if let Some(kind) = app.only {
            self.kinds = vec![kind.into()];
        }
        if app.no_progress {
            self.progress = false;
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let url = Url::parse(&self.base_url)
            .with_context(|| format!("base URL {:?} is not a valid URL", self.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("base URL must use http or https, got {}", url.scheme());
        }
        if self.max_connections == 0 {
            bail!("max_connections must be at least 1");
        }
        Ok(())
    }

    pub fn start_for(&self, kind: ScanKind) -> NaiveDate {
        match kind {
            ScanKind::LowRes => self.low_res_start,
            ScanKind::HighRes => self.high_res_start,
        }
    }

    /// Ranges in `kinds` order, all ending on the configured or current day.
    pub fn catalog(&self) -> Catalog {
        let end = self.end_date.unwrap_or_else(|| Local::now().date_naive());
        let ranges = self
            .kinds
            .iter()
            .map(|&kind| DateRange::new(self.start_for(kind), end, kind))
            .collect();
        Catalog::new(self.base_url.clone(), ranges)
    }
}
