use crate::{
    abstract_trait::{DynOperatorNotices, DynOrderGateway},
    service::order::{OrderStore, StatusTransitionService},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_store: Arc<OrderStore>,
    pub status_transition: Arc<StatusTransitionService>,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_store", &"OrderStore")
            .field("status_transition", &"StatusTransitionService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub gateway: DynOrderGateway,
    pub notices: DynOperatorNotices,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps { gateway, notices } = deps;

        let order_store = Arc::new(OrderStore::new(gateway.clone()));
        let status_transition = Arc::new(StatusTransitionService::new(
            gateway,
            order_store.clone(),
            notices,
        ));

        Self {
            order_store,
            status_transition,
        }
    }
}
