use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Caller-assigned integer identifier for a product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProdutoId(pub i64);

impl From<i64> for ProdutoId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProdutoId {
    // Error messages interpolate the bare number ("... com ID 1 ...").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Produto {
    pub id: ProdutoId,
    pub nome: String,
    pub preco: Decimal,
}

impl Produto {
    pub fn new(id: impl Into<ProdutoId>, nome: impl Into<String>, preco: Decimal) -> Self {
        Self { id: id.into(), nome: nome.into(), preco }
    }

    /// Field-level validation for create/update. Checks nome before preco and
    /// stops at the first violation.
    pub fn validar(&self) -> Result<(), DomainError> {
        if self.nome.trim().is_empty() {
            return Err(DomainError::NomeVazio);
        }
        if self.preco <= Decimal::ZERO {
            return Err(DomainError::PrecoNaoPositivo);
        }
        Ok(())
    }
}
