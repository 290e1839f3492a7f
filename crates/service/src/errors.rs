use thiserror::Error;

use produtos_core::domain::produto::ProdutoId;
use produtos_core::errors::DomainError;
use produtos_db::repositories::RepositoryError;

/// Errors raised by [`ProdutoService`](crate::ProdutoService). The not-found
/// messages are part of the service contract; callers match on the literal
/// text.
#[derive(Debug, Error)]
pub enum ProdutoServiceError {
    #[error("O produto não pode ser nulo.")]
    ProdutoAusente,
    #[error(transparent)]
    CampoInvalido(#[from] DomainError),
    #[error("Não é possível atualizar o produto com ID {0} porque não foi encontrado.")]
    AtualizacaoNaoEncontrado(ProdutoId),
    #[error("Não é possível excluir o produto com ID {0} porque não foi encontrado.")]
    ExclusaoNaoEncontrado(ProdutoId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ProdutoServiceError {
    /// Name of the offending field for invalid-argument errors.
    pub fn campo(&self) -> Option<&'static str> {
        match self {
            Self::CampoInvalido(erro) => Some(erro.campo()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use produtos_core::domain::produto::ProdutoId;
    use produtos_core::errors::DomainError;

    use crate::errors::ProdutoServiceError;

    #[test]
    fn mensagens_de_nao_encontrado_interpolam_o_id() {
        assert_eq!(
            ProdutoServiceError::AtualizacaoNaoEncontrado(ProdutoId(1)).to_string(),
            "Não é possível atualizar o produto com ID 1 porque não foi encontrado."
        );
        assert_eq!(
            ProdutoServiceError::ExclusaoNaoEncontrado(ProdutoId(7)).to_string(),
            "Não é possível excluir o produto com ID 7 porque não foi encontrado."
        );
    }

    #[test]
    fn campo_e_exposto_apenas_para_erros_de_argumento() {
        assert_eq!(
            ProdutoServiceError::CampoInvalido(DomainError::NomeVazio).campo(),
            Some("nome")
        );
        assert_eq!(
            ProdutoServiceError::CampoInvalido(DomainError::PrecoNaoPositivo).campo(),
            Some("preco")
        );
        assert_eq!(ProdutoServiceError::ProdutoAusente.campo(), None);
        assert_eq!(ProdutoServiceError::ExclusaoNaoEncontrado(ProdutoId(1)).campo(), None);
    }

    #[test]
    fn mensagem_de_produto_ausente_preserva_o_texto_original() {
        assert_eq!(ProdutoServiceError::ProdutoAusente.to_string(), "O produto não pode ser nulo.");
    }
}
