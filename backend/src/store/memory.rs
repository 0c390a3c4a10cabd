use crate::store::{StarStore, StoreError};
use async_trait::async_trait;
use common::model::star::Star;
use tokio::sync::RwLock;

/// Process-local star list. Contents are lost when the server stops.
pub struct MemoryStore {
    stars: RwLock<Vec<Star>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            stars: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl StarStore for MemoryStore {
    async fn append(
        &self,
        text: String,
        position: [f64; 3],
        color: &str,
    ) -> Result<Star, StoreError> {
        // Holding the write lock across the id assignment and the push keeps
        // the sequence gap-free under concurrent submissions.
        let mut stars = self.stars.write().await;
        let star = Star {
            id: (stars.len() + 1).to_string(),
            text,
            position,
            color: color.to_string(),
        };
        stars.push(star.clone());
        Ok(star)
    }

    async fn list_all(&self) -> Result<Vec<Star>, StoreError> {
        Ok(self.stars.read().await.clone())
    }
}
