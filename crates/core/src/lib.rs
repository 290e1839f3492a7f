pub mod config;
pub mod domain;
pub mod errors;

pub use config::{
    AppConfig, ConfigError, ConfigOverrides, DatabaseConfig, LoadOptions, LogFormat, LoggingConfig,
};
pub use domain::produto::{Produto, ProdutoId};
pub use errors::DomainError;

pub use rust_decimal;
