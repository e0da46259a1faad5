use super::ApsGateway;
use crate::error::GatewayResult;
use crate::procedure::{ProcedureBackend, ProcedureCall};
use crate::view::ViewQuery;

impl<B> ApsGateway<B> {
    /// Rows of the `api_Folder` view.
    pub fn list_folders(&self) -> ViewQuery {
        ViewQuery::aliased("api_Folder", "folder")
    }
}

impl<B: ProcedureBackend> ApsGateway<B> {
    /// Create or edit a folder via `api_SaveFolder`.
    ///
    /// An absent or zero id creates a new folder; a `None` parent makes it a
    /// root of the hierarchy.
    pub async fn save_folder(
        &self,
        id_folder: Option<i64>,
        parent_id_folder: Option<i64>,
        name: Option<&str>,
    ) -> GatewayResult<bool> {
        let call = ProcedureCall::new("api_SaveFolder")
            .arg(id_folder)
            .arg(parent_id_folder)
            .arg(name);
        self.run(call).await
    }

    /// Delete a folder via `api_DeleteFolder`.
    pub async fn delete_folder(&self, id_folder: i64) -> GatewayResult<bool> {
        self.run(ProcedureCall::new("api_DeleteFolder").arg(id_folder))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::gateway;
    use crate::procedure::ProcArg;

    #[tokio::test]
    async fn save_folder_binds_in_declared_order() {
        let gw = gateway(1);
        assert!(gw.save_folder(None, Some(1), Some("Office")).await.unwrap());

        let call = gw.backend().last_call();
        assert_eq!(call.procedure(), "api_SaveFolder");
        assert_eq!(
            call.args(),
            &[
                ProcArg::Null,
                ProcArg::Int(1),
                ProcArg::Text("Office".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn delete_folder_passes_the_id() {
        let gw = gateway(1);
        assert!(gw.delete_folder(9).await.unwrap());
        let call = gw.backend().last_call();
        assert_eq!(call.procedure(), "api_DeleteFolder");
        assert_eq!(call.args(), &[ProcArg::Int(9)]);
    }
}
