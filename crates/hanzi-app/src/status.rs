use std::sync::Arc;

use hanzi_types::Status;
use tokio::sync::RwLock;

/// Outcome counters for the current session
#[derive(Clone, Debug, Default)]
pub struct SessionStatus {
    pub generated: u64,
    pub not_found: u64,
    pub rejected: u64,
    pub current_message: String,
}

/// Application status
pub struct AppStatus {
    pub session: Arc<RwLock<SessionStatus>>,
}

impl AppStatus {
    pub fn new() -> Self {
        Self {
            session: Arc::new(RwLock::new(SessionStatus::default())),
        }
    }

    pub async fn record(&self, status: &Status) {
        let mut session = self.session.write().await;
        match status {
            Status::Ready(_) => session.generated += 1,
            Status::NotFound(_) => session.not_found += 1,
            Status::EmptyInput => session.rejected += 1,
            // LoadFailed comes from the output side and is not counted
            Status::Loading | Status::LoadFailed => {}
        }
        session.current_message = status.to_string();
    }

    pub async fn snapshot(&self) -> SessionStatus {
        self.session.read().await.clone()
    }
}

impl Default for AppStatus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counts_outcomes_per_session() {
        let status = AppStatus::new();
        status.record(&Status::Loading).await;
        status.record(&Status::Ready("学".to_string())).await;
        status.record(&Status::NotFound("龘".to_string())).await;
        status.record(&Status::EmptyInput).await;
        status.record(&Status::LoadFailed).await;

        let session = status.snapshot().await;
        assert_eq!(session.generated, 1);
        assert_eq!(session.not_found, 1);
        assert_eq!(session.rejected, 1);
        assert_eq!(session.current_message, Status::LoadFailed.to_string());
    }
}
