use cache::EmployeeCache;
use config::Config;
use std::sync::Arc;

pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod router;
pub mod routes;
pub mod upstream;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub cache: Arc<EmployeeCache>,
}
