//! End-to-end path: database config -> sqlite pool -> migrations ->
//! SqlProdutoRepository -> ProdutoService.

use std::sync::Arc;

use rust_decimal::Decimal;

use produtos_core::config::DatabaseConfig;
use produtos_core::domain::produto::{Produto, ProdutoId};
use produtos_db::repositories::SqlProdutoRepository;
use produtos_db::{connect_from_config, migrations};
use produtos_service::{ProdutoService, ProdutoServiceError};

async fn service_over_sqlite() -> ProdutoService {
    // Single connection: each sqlite::memory: connection is its own database.
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        timeout_secs: 5,
    };
    let pool = connect_from_config(&config).await.expect("in-memory sqlite should connect");
    migrations::run_pending(&pool).await.expect("migrations should apply");
    ProdutoService::new(Arc::new(SqlProdutoRepository::new(pool)))
}

#[tokio::test]
async fn ciclo_completo_de_crud() {
    let service = service_over_sqlite().await;
    let produto = Produto::new(1, "Cabo USB", Decimal::new(1000, 2));

    service.salvar_produto(Some(produto.clone())).await.expect("save");
    assert_eq!(service.get_produto(ProdutoId(1)).await.expect("get"), Some(produto));

    let alterado = Produto::new(1, "Cabo USB-C", Decimal::new(1500, 2));
    service.atualizar_produto(Some(alterado.clone())).await.expect("update");
    assert_eq!(service.get_produto(ProdutoId(1)).await.expect("get"), Some(alterado));

    service.excluir_produto(ProdutoId(1)).await.expect("delete");
    assert_eq!(service.get_produto(ProdutoId(1)).await.expect("get"), None);
}

#[tokio::test]
async fn atualizar_sobre_banco_vazio_reporta_nao_encontrado() {
    let service = service_over_sqlite().await;
    let produto = Produto::new(42, "Carregador", Decimal::new(5000, 2));

    let erro = service.atualizar_produto(Some(produto)).await.expect_err("must fail");

    assert!(matches!(erro, ProdutoServiceError::AtualizacaoNaoEncontrado(ProdutoId(42))));
    assert_eq!(
        erro.to_string(),
        "Não é possível atualizar o produto com ID 42 porque não foi encontrado."
    );
}

#[tokio::test]
async fn listagem_reflete_o_conteudo_persistido() {
    let service = service_over_sqlite().await;
    let primeiro = Produto::new(1, "Produto1", Decimal::new(1000, 2));
    let segundo = Produto::new(2, "Produto2", Decimal::new(2000, 2));

    service.salvar_produto(Some(primeiro.clone())).await.expect("save");
    service.salvar_produto(Some(segundo.clone())).await.expect("save");

    let todos = service.obter_todos_produtos().await.expect("list");
    assert_eq!(todos, vec![primeiro, segundo]);
}

#[tokio::test]
async fn validacao_nunca_chega_ao_banco() {
    let service = service_over_sqlite().await;
    let invalido = Produto::new(1, "", Decimal::new(5000, 2));

    let erro = service.salvar_produto(Some(invalido)).await.expect_err("must fail");
    assert_eq!(erro.campo(), Some("nome"));

    assert!(service.obter_todos_produtos().await.expect("list").is_empty());
}
