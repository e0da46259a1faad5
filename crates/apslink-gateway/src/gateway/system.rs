use super::ApsGateway;
use crate::error::GatewayResult;
use crate::procedure::{ProcedureBackend, ProcedureCall};
use crate::view::ViewQuery;

impl<B> ApsGateway<B> {
    /// Rows of the `api_System` view.
    pub fn list_systems(&self) -> ViewQuery {
        ViewQuery::aliased("api_System", "system")
    }

    /// Rows of the `api_Module` view.
    pub fn list_modules(&self) -> ViewQuery {
        ViewQuery::aliased("api_Module", "module")
    }
}

impl<B: ProcedureBackend> ApsGateway<B> {
    /// Rename a system via `api_UpdateSystem`.
    ///
    /// Systems are provisioned by the panel; only the name is editable.
    pub async fn update_system(&self, id_system: i64, name: &str) -> GatewayResult<bool> {
        let call = ProcedureCall::new("api_UpdateSystem")
            .arg(id_system)
            .arg(name);
        self.run(call).await
    }

    /// Edit a module via `api_UpdateModule`.
    ///
    /// Modules are provisioned by the panel; only the name is editable, and
    /// the (module, system) pair identifies the target.
    pub async fn update_module(
        &self,
        id_module: i64,
        id_system: i64,
        name: Option<&str>,
    ) -> GatewayResult<bool> {
        let call = ProcedureCall::new("api_UpdateModule")
            .arg(id_module)
            .arg(id_system)
            .arg(name);
        self.run(call).await
    }
}
