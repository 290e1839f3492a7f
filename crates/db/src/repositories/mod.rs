use async_trait::async_trait;
use thiserror::Error;

use produtos_core::domain::produto::{Produto, ProdutoId};

pub mod memory;
pub mod produto;

pub use memory::InMemoryProdutoRepository;
pub use produto::SqlProdutoRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("decode error: {0}")]
    Decode(String),
}

/// Persistence capability consumed by the service layer. Implementations own
/// all storage concerns; callers enforce their own preconditions.
#[async_trait]
pub trait ProdutoRepository: Send + Sync {
    async fn get_by_id(&self, id: ProdutoId) -> Result<Option<Produto>, RepositoryError>;
    async fn save(&self, produto: Produto) -> Result<(), RepositoryError>;
    async fn update(&self, produto: Produto) -> Result<(), RepositoryError>;
    async fn delete(&self, id: ProdutoId) -> Result<(), RepositoryError>;
    async fn get_all(&self) -> Result<Vec<Produto>, RepositoryError>;
}
