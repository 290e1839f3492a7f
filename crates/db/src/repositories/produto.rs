use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::{sqlite::SqliteRow, Row};

use produtos_core::domain::produto::{Produto, ProdutoId};

use super::{ProdutoRepository, RepositoryError};
use crate::DbPool;

pub struct SqlProdutoRepository {
    pool: DbPool,
}

impl SqlProdutoRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ProdutoRepository for SqlProdutoRepository {
    async fn get_by_id(&self, id: ProdutoId) -> Result<Option<Produto>, RepositoryError> {
        let row = sqlx::query("SELECT id, nome, preco FROM produto WHERE id = ?")
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await?;

        row.map(produto_from_row).transpose()
    }

    async fn save(&self, produto: Produto) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO produto (id, nome, preco) VALUES (?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                nome = excluded.nome,
                preco = excluded.preco",
        )
        .bind(produto.id.0)
        .bind(&produto.nome)
        .bind(produto.preco.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, produto: Produto) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE produto SET nome = ?, preco = ? WHERE id = ?")
            .bind(&produto.nome)
            .bind(produto.preco.to_string())
            .bind(produto.id.0)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: ProdutoId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM produto WHERE id = ?").bind(id.0).execute(&self.pool).await?;

        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Produto>, RepositoryError> {
        let rows = sqlx::query("SELECT id, nome, preco FROM produto ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(produto_from_row).collect()
    }
}

fn produto_from_row(row: SqliteRow) -> Result<Produto, RepositoryError> {
    let preco_raw = row.try_get::<String, _>("preco")?;
    let preco = Decimal::from_str(&preco_raw)
        .map_err(|_| RepositoryError::Decode(format!("invalid decimal for `preco`: {preco_raw}")))?;

    Ok(Produto {
        id: ProdutoId(row.try_get("id")?),
        nome: row.try_get("nome")?,
        preco,
    })
}
