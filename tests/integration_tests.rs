use anyhow::Result;
use std::time::Duration;
use tempfile::TempDir;
use tm8s::{
    ConnectionEngine, HistoryStore, JsonRenderer, LocalStorage, PlayerDatabase, Renderer,
    SearchProgress, Settings, Storage, TenureRecord, TextRenderer, Tm8sError, TomlConfig,
};

const PLAYERS_CSV: &str = "\
Player Name,Club,Start Year,End Year
Thierry Henry,Monaco,1994,1999
Thierry Henry,Juventus,1999,1999
Thierry Henry,Arsenal,1999,2007
Thierry Henry,Barcelona,2007,2010
Thierry Henry,New York Red Bulls,2010,2014
Cesc Fabregas,Arsenal,2003,2011
Cesc Fabregas,Barcelona,2011,2014
Cesc Fabregas,Chelsea,2014,2019
Cesc Fabregas,Monaco,2019,2022
Lionel Messi,Barcelona,2004,2021
Lionel Messi,Paris Saint-Germain,2021,2023
Lionel Messi,Inter Miami,2023,present
Bukayo Saka,Arsenal,2018,
";

fn write_csv(dir: &TempDir) -> Result<std::path::PathBuf> {
    let path = dir.path().join("players_database.csv");
    std::fs::write(&path, PLAYERS_CSV)?;
    Ok(path)
}

#[test]
fn test_end_to_end_connect_from_csv() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_csv(&temp_dir)?;

    let db = PlayerDatabase::load(&path, 2025)?;
    assert_eq!(db.player_count(), 4);

    let engine = ConnectionEngine::new(db);
    let report = engine.connect("Thierry Henry", "Lionel Messi")?;

    assert_eq!(report.connections.len(), 1);
    let barcelona = &report.connections[0];
    assert_eq!(barcelona.club, "Barcelona");
    assert_eq!((barcelona.overlap_start, barcelona.overlap_end), (2007, 2010));
    assert_eq!(barcelona.player1_period, "2007-2010");
    assert_eq!(barcelona.player2_period, "2004-2021");

    let text = TextRenderer::new(false).render(&report)?;
    assert!(text.starts_with("Thierry Henry and Lionel Messi\n\n✓ PLAYED TOGETHER AT:\n\n"));
    assert!(text.contains("Barcelona\n✓ Played together: 2007-2010\n"));
    assert!(text.contains("Thierry Henry at club: 2007-2010\n"));
    assert!(text.contains("Lionel Messi at club: 2004-2021\n"));

    Ok(())
}

#[test]
fn test_only_overlapping_spells_are_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let db = PlayerDatabase::load(write_csv(&temp_dir)?, 2025)?;
    let engine = ConnectionEngine::new(db);

    // Barcelona 與 Monaco 的期間沒有交集
    let report = engine.connect("Cesc Fabregas", "Thierry Henry")?;
    let clubs: Vec<&str> = report.connections.iter().map(|c| c.club.as_str()).collect();
    assert_eq!(clubs, vec!["Arsenal"]);

    // 同為 Arsenal，但年份不重疊
    let report = engine.connect("Bukayo Saka", "Thierry Henry")?;
    assert!(!report.played_together());
    let text = TextRenderer::new(false).render(&report)?;
    assert!(text.ends_with("✗ Never played together at the same club\n"));

    Ok(())
}

#[test]
fn test_open_ended_tenure_uses_current_year() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let db = PlayerDatabase::load(write_csv(&temp_dir)?, 2026)?;

    assert_eq!(
        db.lookup("Lionel Messi").last(),
        Some(&TenureRecord::new("Inter Miami", 2023, 2026))
    );
    Ok(())
}

#[test]
fn test_unknown_player_is_reported_not_panicked() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let engine = ConnectionEngine::new(PlayerDatabase::load(write_csv(&temp_dir)?, 2025)?);

    assert!(engine.store().lookup("Zinedine Zidane").is_empty());
    assert!(!engine.can_search("Zinedine Zidane", "Lionel Messi"));
    assert!(matches!(
        engine.connect("Zinedine Zidane", "Lionel Messi"),
        Err(Tm8sError::UnknownPlayer { .. })
    ));
    Ok(())
}

#[test]
fn test_missing_database_loads_empty() {
    let temp_dir = TempDir::new().unwrap();
    let db = PlayerDatabase::load_or_empty(temp_dir.path().join("nope.csv"), 2025);

    assert_eq!(db.player_count(), 0);
    assert!(db.all_players().is_empty());
}

#[test]
fn test_player_listing_and_search() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let db = PlayerDatabase::load(write_csv(&temp_dir)?, 2025)?;

    assert_eq!(
        db.all_players(),
        vec!["Bukayo Saka", "Cesc Fabregas", "Lionel Messi", "Thierry Henry"]
    );
    assert_eq!(db.search_players("ME"), vec!["Lionel Messi"]);
    assert_eq!(
        db.search_players("e"),
        vec!["Cesc Fabregas", "Lionel Messi", "Thierry Henry"]
    );
    Ok(())
}

#[tokio::test]
async fn test_load_through_storage_and_export_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_csv(&temp_dir)?;
    let storage = LocalStorage::new(temp_dir.path());

    let db = PlayerDatabase::load_from_storage(&storage, "players_database.csv", 2025).await?;
    let engine = ConnectionEngine::new(db);

    let progress = SearchProgress::new(50, Duration::from_millis(1));
    let mut ticks = Vec::new();
    let report = engine
        .connect_paced("Cesc Fabregas", "Thierry Henry", &progress, |v| ticks.push(v))
        .await?;
    assert_eq!(ticks, vec![50, 100]);

    let json = JsonRenderer.render(&report)?;
    storage.write_file("reports/fabregas_henry.json", json.as_bytes()).await?;

    let saved = std::fs::read_to_string(temp_dir.path().join("reports/fabregas_henry.json"))?;
    let value: serde_json::Value = serde_json::from_str(&saved)?;
    assert_eq!(value["player1"], "Cesc Fabregas");
    assert_eq!(value["connections"][0]["club"], "Arsenal");
    assert_eq!(value["connections"][0]["overlap_start"], 2003);
    assert_eq!(value["connections"][0]["overlap_end"], 2007);
    Ok(())
}

#[test]
fn test_settings_from_toml_file_drive_loading() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let csv_path = write_csv(&temp_dir)?;
    let normalized_path = csv_path.to_string_lossy().replace('\\', "/");

    let config_path = temp_dir.path().join("tm8s.toml");
    std::fs::write(
        &config_path,
        format!(
            r#"
[data]
csv_path = "{}"
current_year = 2030

[display]
color = false
format = "json"
"#,
            normalized_path
        ),
    )?;

    let settings = Settings::from_toml(&TomlConfig::from_file(&config_path)?)?;
    let db = PlayerDatabase::load(&settings.csv_path, settings.current_year)?;

    assert_eq!(
        db.lookup("Lionel Messi").last(),
        Some(&TenureRecord::new("Inter Miami", 2023, 2030))
    );
    let rendered = settings
        .format
        .renderer(settings.color)
        .render(&ConnectionEngine::new(db).connect("Lionel Messi", "Thierry Henry")?)?;
    assert!(rendered.trim_start().starts_with('{'));
    Ok(())
}
