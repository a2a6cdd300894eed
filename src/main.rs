use clap::Parser;
use std::io::{IsTerminal, Write};
use tm8s::utils::error::ErrorSeverity;
use tm8s::utils::{logger, validation, validation::Validate};
use tm8s::{
    CliConfig, Command, ConnectionEngine, HistoryStore, LocalStorage, PlayerDatabase, Settings,
    Storage, Tm8sError, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置（選用）
    let toml_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    let mut settings = match Settings::from_toml(&toml_config).and_then(|s| cli.apply(s)) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    // 輸出到檔案或非終端機時不使用 ANSI 樣式
    if cli.output.is_some() || !std::io::stdout().is_terminal() {
        settings.color = false;
    }

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose, settings.log_level.as_deref());
    }

    tracing::info!("Starting tm8s");
    tracing::debug!("Settings: {:?}", settings);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    // 載入失敗時以空資料庫繼續，查詢時會回報找不到球員
    let db = PlayerDatabase::load_or_empty(&settings.csv_path, settings.current_year);
    let engine = ConnectionEngine::new(db);

    let rendered = match &cli.command {
        Command::Players => list_lines(engine.store().all_players()),
        Command::Search { query } => list_lines(engine.store().search_players(query)),
        Command::Connect { player1, player2 } => {
            match connect(&engine, &settings, player1, player2).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!(
                        "❌ Search failed: {} (Category: {:?}, Severity: {:?})",
                        e,
                        e.category(),
                        e.severity()
                    );
                    exit_with(&e);
                }
            }
        }
    };

    print!("{}", rendered);
    std::io::stdout().flush()?;

    if let Some(output) = &cli.output {
        let storage = LocalStorage::new(".");
        if let Err(e) = storage.write_file(output, rendered.as_bytes()).await {
            tracing::error!("❌ Failed to write report: {}", e);
            exit_with(&e);
        }
        tracing::info!("📁 Report saved to: {}", output);
    }

    Ok(())
}

async fn connect(
    engine: &ConnectionEngine<PlayerDatabase>,
    settings: &Settings,
    player1: &str,
    player2: &str,
) -> tm8s::Result<String> {
    validation::validate_non_empty_string("player1", player1)?;
    validation::validate_non_empty_string("player2", player2)?;

    let report = match &settings.progress {
        Some(progress) => {
            let report = engine
                .connect_paced(player1, player2, progress, |value| {
                    eprint!("\r🔍 Searching... {:>3}%", value);
                })
                .await;
            eprintln!();
            report?
        }
        None => engine.connect(player1, player2)?,
    };

    let renderer = settings.format.renderer(settings.color);
    renderer.render(&report)
}

fn list_lines(names: Vec<&str>) -> String {
    names.iter().map(|name| format!("{}\n", name)).collect()
}

fn exit_with(e: &Tm8sError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
