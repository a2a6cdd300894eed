//! CSV-backed [`HistoryStore`].
//!
//! Expected header: `Player Name,Club,Start Year,End Year`. Rows for the same
//! player are kept in file order. An empty `End Year` (or `present` /
//! `current`) marks a current club and resolves to the configured current
//! year.

use crate::domain::model::TenureRecord;
use crate::domain::ports::{HistoryStore, Storage};
use crate::utils::error::{Result, Tm8sError};
use chrono::Datelike;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct PlayerRow {
    #[serde(rename = "Player Name")]
    player_name: String,
    #[serde(rename = "Club")]
    club: String,
    #[serde(rename = "Start Year")]
    start_year: String,
    #[serde(rename = "End Year", default)]
    end_year: String,
}

pub fn current_calendar_year() -> i32 {
    chrono::Local::now().year()
}

#[derive(Debug, Clone, Default)]
pub struct PlayerDatabase {
    players: HashMap<String, Vec<TenureRecord>>,
}

impl PlayerDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// 從 CSV 檔案載入
    pub fn load<P: AsRef<Path>>(path: P, current_year: i32) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading player database from {}", path.display());
        let file = std::fs::File::open(path)?;
        let db = Self::from_reader(file, current_year)?;
        tracing::info!("Database loaded. Players: {}", db.player_count());
        Ok(db)
    }

    /// 載入失敗時記錄錯誤並回傳空資料庫
    pub fn load_or_empty<P: AsRef<Path>>(path: P, current_year: i32) -> Self {
        let path = path.as_ref();
        match Self::load(path, current_year) {
            Ok(db) => db,
            Err(e) => {
                tracing::error!("Failed to load {}: {}", path.display(), e);
                Self::new()
            }
        }
    }

    /// 透過 Storage 讀取 CSV 內容
    pub async fn load_from_storage<S: Storage>(
        storage: &S,
        path: &str,
        current_year: i32,
    ) -> Result<Self> {
        let data = storage.read_file(path).await?;
        let db = Self::from_reader(data.as_slice(), current_year)?;
        tracing::info!("Database loaded from storage. Players: {}", db.player_count());
        Ok(db)
    }

    pub fn from_reader<R: Read>(reader: R, current_year: i32) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut db = Self::new();
        for (index, row) in csv_reader.deserialize::<PlayerRow>().enumerate() {
            let row = row?;
            // 標題列為第 1 列
            let row_number = index as u64 + 2;

            let start_year = parse_year(row_number, "Start Year", &row.start_year)?;
            let end_year = match row.end_year.to_ascii_lowercase().as_str() {
                "" | "present" | "current" => current_year,
                _ => parse_year(row_number, "End Year", &row.end_year)?,
            };

            db.insert(row.player_name, TenureRecord::new(row.club, start_year, end_year));
        }

        Ok(db)
    }

    pub fn insert(&mut self, player: impl Into<String>, tenure: TenureRecord) {
        self.players.entry(player.into()).or_default().push(tenure);
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

fn parse_year(row: u64, column: &str, value: &str) -> Result<i32> {
    value.parse::<i32>().map_err(|e| Tm8sError::DataError {
        row,
        message: format!("invalid {} '{}': {}", column, value, e),
    })
}

impl HistoryStore for PlayerDatabase {
    fn lookup(&self, player: &str) -> &[TenureRecord] {
        self.players.get(player).map(Vec::as_slice).unwrap_or(&[])
    }

    fn contains(&self, player: &str) -> bool {
        self.players.contains_key(player)
    }

    fn all_players(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.players.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn search_players(&self, query: &str) -> Vec<&str> {
        let query = query.to_lowercase();
        let mut names: Vec<&str> = self
            .players
            .keys()
            .filter(|name| name.to_lowercase().contains(&query))
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names
    }

    fn player_count(&self) -> usize {
        self.players.len()
    }
}
