use clap::{Parser, ValueEnum};
use hub_logging::LogDestination;
use log::LevelFilter;
use talent_engine::{SearchSettings, SourceConfig, SourceKind};

/// Command-line configuration for the terminal app.
#[derive(Debug, Parser)]
#[command(name = "talent-hub", version)]
#[command(about = "Search jobs and professionals around Buenos Aires")]
pub struct AppConfig {
    /// Base URL of the search service
    #[arg(
        long,
        env = "TALENT_HUB_API_BASE",
        default_value = "http://localhost:8000"
    )]
    pub base_url: String,

    /// Where job listings come from
    #[arg(long, value_enum, default_value_t = SourceArg::Static)]
    pub jobs_source: SourceArg,

    /// Where professional profiles come from
    #[arg(long, value_enum, default_value_t = SourceArg::Remote)]
    pub talent_source: SourceArg,

    /// Log output
    #[arg(long, value_enum, default_value_t = LogArg::File)]
    pub log: LogArg,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    Static,
    Remote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogArg {
    Terminal,
    File,
    Both,
}

impl From<SourceArg> for SourceKind {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Static => SourceKind::Static,
            SourceArg::Remote => SourceKind::Remote,
        }
    }
}

impl From<LogArg> for LogDestination {
    fn from(arg: LogArg) -> Self {
        match arg {
            LogArg::Terminal => LogDestination::Terminal,
            LogArg::File => LogDestination::File,
            LogArg::Both => LogDestination::Both,
        }
    }
}

impl AppConfig {
    pub fn source_config(&self) -> SourceConfig {
        SourceConfig {
            jobs: self.jobs_source.into(),
            professionals: self.talent_source.into(),
            settings: SearchSettings {
                base_url: self.base_url.clone(),
                ..SearchSettings::default()
            },
        }
    }

    pub fn log_destination(&self) -> LogDestination {
        self.log.into()
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
