pub mod errors;
pub mod service;

pub use errors::ProdutoServiceError;
pub use service::ProdutoService;
