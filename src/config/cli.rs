use crate::config::{parse_format, Settings};
use crate::core::progress::SearchProgress;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "tm8s")]
#[command(about = "Find out whether two footballers ever played at the same club together")]
pub struct CliConfig {
    /// Player database CSV (Player Name, Club, Start Year, End Year)
    #[arg(long, global = true)]
    pub data: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Year used for current clubs (blank or "present" End Year)
    #[arg(long, global = true)]
    pub current_year: Option<i32>,

    /// Output format: text or json
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Disable ANSI colors in text output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Show a progress bar before revealing results
    #[arg(long, global = true)]
    pub progress: bool,

    /// Also write the rendered report to this file
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show every club where both players overlapped
    Connect { player1: String, player2: String },
    /// List all players in the database
    Players,
    /// Search players by partial name (case-insensitive)
    Search { query: String },
}

impl CliConfig {
    /// 將命令列參數套用到設定上，命令列優先
    pub fn apply(&self, mut settings: Settings) -> Result<Settings> {
        if let Some(data) = &self.data {
            settings.csv_path = data.clone();
        }
        if let Some(year) = self.current_year {
            settings.current_year = year;
        }
        if let Some(format) = &self.format {
            settings.format = parse_format("--format", format)?;
        }
        if self.no_color {
            settings.color = false;
        }
        if self.progress && settings.progress.is_none() {
            settings.progress = Some(SearchProgress::default());
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::render::OutputFormat;

    #[test]
    fn test_parse_connect() {
        let cli = CliConfig::try_parse_from([
            "tm8s",
            "connect",
            "Thierry Henry",
            "Cesc Fabregas",
            "--data",
            "league.csv",
            "--format",
            "json",
            "--no-color",
        ])
        .unwrap();

        match &cli.command {
            Command::Connect { player1, player2 } => {
                assert_eq!(player1, "Thierry Henry");
                assert_eq!(player2, "Cesc Fabregas");
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let settings = cli.apply(Settings::default()).unwrap();
        assert_eq!(settings.csv_path, "league.csv");
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(!settings.color);
        assert!(settings.progress.is_none());
    }

    #[test]
    fn test_cli_overrides_toml_settings() {
        let cli = CliConfig::try_parse_from(["tm8s", "--current-year", "2030", "--progress", "players"])
            .unwrap();
        let from_toml = Settings {
            current_year: 2024,
            csv_path: "toml.csv".to_string(),
            ..Settings::default()
        };

        let settings = cli.apply(from_toml).unwrap();

        assert_eq!(settings.current_year, 2030);
        assert_eq!(settings.csv_path, "toml.csv");
        assert_eq!(settings.progress, Some(SearchProgress::default()));
    }

    #[test]
    fn test_bad_format_flag() {
        let cli = CliConfig::try_parse_from(["tm8s", "search", "henry", "--format", "xml"]).unwrap();
        assert!(cli.apply(Settings::default()).is_err());
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(CliConfig::try_parse_from(["tm8s"]).is_err());
    }
}
