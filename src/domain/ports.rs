use crate::domain::model::{ConnectionReport, TenureRecord};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// 以球員名稱（完全相符）查詢效力紀錄
pub trait HistoryStore: Send + Sync {
    /// 未知球員回傳空切片，不回傳錯誤
    fn lookup(&self, player: &str) -> &[TenureRecord];
    fn contains(&self, player: &str) -> bool;
    fn all_players(&self) -> Vec<&str>;
    fn search_players(&self, query: &str) -> Vec<&str>;
    fn player_count(&self) -> usize;
}

pub trait Renderer {
    fn render(&self, report: &ConnectionReport) -> Result<String>;
}
