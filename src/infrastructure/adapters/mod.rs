//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod credential_resolver;
mod gateway_factory;
mod reporter;
mod user_confirmer;

pub use config_repository::JsonConfigRepository;
pub use credential_resolver::ConfigCredentialResolver;
pub use gateway_factory::SpotifyGatewayFactory;
pub use reporter::ConsoleReporter;
pub use user_confirmer::StdinConfirmer;
