use crate::{
    abstract_trait::{DynOperatorNotices, DynOrderGateway},
    config::Config,
    di::{DependenciesInject, DependenciesInjectDeps},
    gateway::HttpOrderGateway,
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub config: Config,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("config", &self.config)
            .finish()
    }
}

impl AppState {
    pub fn new(config: Config, notices: DynOperatorNotices) -> Self {
        let gateway: DynOrderGateway = Arc::new(HttpOrderGateway::new(
            &config.backend_url,
            &config.admin_token,
        ));

        let di_container = DependenciesInject::new(DependenciesInjectDeps { gateway, notices });

        Self {
            di_container,
            config,
        }
    }
}
