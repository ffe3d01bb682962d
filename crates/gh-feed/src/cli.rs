use clap::{Parser, ValueEnum};
use gh_feed_config::{AppConfig, ColorMode};

#[derive(Parser, Debug, Default)]
#[command(name = "gh-feed", version, about = "Print the GitHub activity you received")]
pub struct Cli {
    /// Print at most N events
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Print events as JSON, one object per line, limited to the fields gh-feed decodes
    #[arg(long)]
    pub json: bool,

    /// When to use colors
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorArg>,

    /// GitHub host to query (defaults to github.com or $GH_HOST)
    #[arg(long, value_name = "HOST")]
    pub hostname: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Always => ColorMode::Always,
            ColorArg::Never => ColorMode::Never,
        }
    }
}

impl Cli {
    /// Override config values with the flags that were given
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(limit) = self.limit {
            config.limit = Some(limit);
        }
        if let Some(color) = self.color {
            config.color = color.into();
        }
        if let Some(host) = &self.hostname {
            config.host = host.clone();
        }
        config
    }
}
