use crate::core::matcher::find_connections;
use crate::core::progress::SearchProgress;
use crate::domain::model::ConnectionReport;
use crate::domain::ports::HistoryStore;
use crate::utils::error::{Result, Tm8sError};

pub struct ConnectionEngine<S: HistoryStore> {
    store: S,
}

impl<S: HistoryStore> ConnectionEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 兩個名稱都非空且存在於資料庫時才允許查詢
    pub fn can_search(&self, player1: &str, player2: &str) -> bool {
        let valid = |name: &str| !name.is_empty() && self.store.contains(name);
        valid(player1) && valid(player2)
    }

    pub fn connect(&self, player1: &str, player2: &str) -> Result<ConnectionReport> {
        for name in [player1, player2] {
            if !self.store.contains(name) {
                return Err(Tm8sError::UnknownPlayer {
                    name: name.to_string(),
                });
            }
        }

        let history1 = self.store.lookup(player1);
        let history2 = self.store.lookup(player2);
        tracing::debug!(
            "Matching {} ({} tenures) against {} ({} tenures)",
            player1,
            history1.len(),
            player2,
            history2.len()
        );

        let connections = find_connections(history1, history2);
        tracing::info!(
            "Found {} connection(s) between {} and {}",
            connections.len(),
            player1,
            player2
        );

        Ok(ConnectionReport {
            player1: player1.to_string(),
            player2: player2.to_string(),
            connections,
        })
    }

    /// Runs the progress animation first, then the same match as [`connect`].
    ///
    /// [`connect`]: ConnectionEngine::connect
    pub async fn connect_paced<F: FnMut(u8)>(
        &self,
        player1: &str,
        player2: &str,
        progress: &SearchProgress,
        on_progress: F,
    ) -> Result<ConnectionReport> {
        progress.run(on_progress).await;
        self.connect(player1, player2)
    }
}
