use std::sync::Arc;

use tracing::{info, warn};

use produtos_core::domain::produto::{Produto, ProdutoId};
use produtos_db::repositories::ProdutoRepository;

use crate::errors::ProdutoServiceError;

/// Orchestration layer over the injected repository: validates arguments and
/// existence preconditions, then forwards to the repository. Never stores
/// state itself, and performs at most one mutating repository call per
/// operation — none when validation fails.
pub struct ProdutoService {
    repository: Arc<dyn ProdutoRepository>,
}

impl ProdutoService {
    pub fn new(repository: Arc<dyn ProdutoRepository>) -> Self {
        Self { repository }
    }

    /// Pure pass-through lookup. Absence is not an error here, unlike
    /// update/delete; mutations validate existence, lookups do not.
    pub async fn get_produto(
        &self,
        id: ProdutoId,
    ) -> Result<Option<Produto>, ProdutoServiceError> {
        Ok(self.repository.get_by_id(id).await?)
    }

    /// Persists a new product. Check order: absent produto, empty nome,
    /// non-positive preco; the first violation short-circuits before any
    /// repository call.
    pub async fn salvar_produto(
        &self,
        produto: Option<Produto>,
    ) -> Result<(), ProdutoServiceError> {
        let produto = produto.ok_or(ProdutoServiceError::ProdutoAusente)?;
        produto.validar()?;

        let produto_id = produto.id;
        self.repository.save(produto).await?;
        info!(produto_id = produto_id.0, "produto salvo");
        Ok(())
    }

    /// Persists changes to an existing product. The existence check runs
    /// before field validation, so updating a missing record reports
    /// not-found even when the fields are also invalid.
    pub async fn atualizar_produto(
        &self,
        produto: Option<Produto>,
    ) -> Result<(), ProdutoServiceError> {
        let produto = produto.ok_or(ProdutoServiceError::ProdutoAusente)?;

        if self.repository.get_by_id(produto.id).await?.is_none() {
            warn!(produto_id = produto.id.0, "atualização rejeitada: produto não encontrado");
            return Err(ProdutoServiceError::AtualizacaoNaoEncontrado(produto.id));
        }
        produto.validar()?;

        let produto_id = produto.id;
        self.repository.update(produto).await?;
        info!(produto_id = produto_id.0, "produto atualizado");
        Ok(())
    }

    pub async fn excluir_produto(&self, id: ProdutoId) -> Result<(), ProdutoServiceError> {
        if self.repository.get_by_id(id).await?.is_none() {
            warn!(produto_id = id.0, "exclusão rejeitada: produto não encontrado");
            return Err(ProdutoServiceError::ExclusaoNaoEncontrado(id));
        }

        self.repository.delete(id).await?;
        info!(produto_id = id.0, "produto excluído");
        Ok(())
    }

    /// Pass-through listing; order and content come straight from the
    /// repository.
    pub async fn obter_todos_produtos(&self) -> Result<Vec<Produto>, ProdutoServiceError> {
        Ok(self.repository.get_all().await?)
    }
}
