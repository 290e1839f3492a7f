use std::collections::BTreeMap;

use tokio::sync::RwLock;

use produtos_core::domain::produto::{Produto, ProdutoId};

use super::{ProdutoRepository, RepositoryError};

/// In-memory repository. Listings come back ordered by id, which keeps tests
/// and local tooling deterministic.
#[derive(Default)]
pub struct InMemoryProdutoRepository {
    produtos: RwLock<BTreeMap<i64, Produto>>,
}

#[async_trait::async_trait]
impl ProdutoRepository for InMemoryProdutoRepository {
    async fn get_by_id(&self, id: ProdutoId) -> Result<Option<Produto>, RepositoryError> {
        let produtos = self.produtos.read().await;
        Ok(produtos.get(&id.0).cloned())
    }

    async fn save(&self, produto: Produto) -> Result<(), RepositoryError> {
        let mut produtos = self.produtos.write().await;
        produtos.insert(produto.id.0, produto);
        Ok(())
    }

    async fn update(&self, produto: Produto) -> Result<(), RepositoryError> {
        let mut produtos = self.produtos.write().await;
        produtos.insert(produto.id.0, produto);
        Ok(())
    }

    async fn delete(&self, id: ProdutoId) -> Result<(), RepositoryError> {
        let mut produtos = self.produtos.write().await;
        produtos.remove(&id.0);
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Produto>, RepositoryError> {
        let produtos = self.produtos.read().await;
        Ok(produtos.values().cloned().collect())
    }
}
