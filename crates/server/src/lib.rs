pub mod api;
pub mod app;
pub mod docs;
pub mod dtos;
pub mod extractors;
pub mod middleware;
pub mod router;
pub mod services;

// 作为库供 upline 二进制装配，最小启动流程如下：
//
// use server::app::ApplicationServer;
// use utils::{AppConfig, Logger};
//
// #[tokio::main]
// async fn main() -> Result<(), anyhow::Error> {
//     utils::EnvLoader::load_env_file().ok();
//     let config = std::sync::Arc::new(AppConfig::parse());
//     let _guard = Logger::new(config.cargo_env);
//     ApplicationServer::serve(config).await?;
//     Ok(())
// }
