use thiserror::Error;

/// Value-constraint violations on `Produto` fields. Messages are the
/// user-facing PT-BR texts callers assert on.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("O nome do produto não pode ser vazio ou nulo.")]
    NomeVazio,
    #[error("O preço do produto deve ser maior que zero.")]
    PrecoNaoPositivo,
}

impl DomainError {
    /// Name of the offending field.
    pub fn campo(&self) -> &'static str {
        match self {
            Self::NomeVazio => "nome",
            Self::PrecoNaoPositivo => "preco",
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::DomainError;

    #[test]
    fn erros_de_campo_carregam_o_nome_do_campo() {
        assert_eq!(DomainError::NomeVazio.campo(), "nome");
        assert_eq!(DomainError::PrecoNaoPositivo.campo(), "preco");
    }

    #[test]
    fn mensagens_preservam_o_texto_original() {
        assert_eq!(
            DomainError::NomeVazio.to_string(),
            "O nome do produto não pode ser vazio ou nulo."
        );
        assert_eq!(
            DomainError::PrecoNaoPositivo.to_string(),
            "O preço do produto deve ser maior que zero."
        );
    }
}
