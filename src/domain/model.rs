use serde::{Deserialize, Serialize};

/// 球員在單一球會的一段連續效力期間
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenureRecord {
    pub club: String,
    pub start_year: i32,
    pub end_year: i32,
}

impl TenureRecord {
    pub fn new(club: impl Into<String>, start_year: i32, end_year: i32) -> Self {
        Self {
            club: club.into(),
            start_year,
            end_year,
        }
    }

    /// 原始年份區間，例如 `2010-2013`（不做任何檢查）
    pub fn period(&self) -> String {
        format!("{}-{}", self.start_year, self.end_year)
    }
}

/// 兩名球員在同一球會重疊的效力期間
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapRecord {
    pub club: String,
    pub overlap_start: i32,
    pub overlap_end: i32,
    pub player1_period: String,
    pub player2_period: String,
}

impl OverlapRecord {
    pub fn overlap_years(&self) -> i64 {
        crate::core::matcher::overlap_years(self.overlap_start, self.overlap_end)
    }
}

/// 一次查詢的完整結果，交給 Renderer 輸出
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionReport {
    pub player1: String,
    pub player2: String,
    pub connections: Vec<OverlapRecord>,
}

impl ConnectionReport {
    pub fn played_together(&self) -> bool {
        !self.connections.is_empty()
    }

    pub fn total_overlap_years(&self) -> i64 {
        self.connections.iter().map(OverlapRecord::overlap_years).sum()
    }
}
