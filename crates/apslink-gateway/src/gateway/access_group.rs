use super::ApsGateway;
use crate::error::GatewayResult;
use crate::procedure::{ProcedureBackend, ProcedureCall};
use crate::view::ViewQuery;
use apslink_core::AccessGroupUpsert;

impl<B> ApsGateway<B> {
    /// Rows of the `api_AccessGroup` view.
    pub fn list_access_groups(&self) -> ViewQuery {
        ViewQuery::aliased("api_AccessGroup", "accessGroup")
    }

    /// Rows of the `api_Person_AccessGroup` view: person-to-group
    /// assignments.
    pub fn list_person_access_groups(&self) -> ViewQuery {
        ViewQuery::aliased("api_Person_AccessGroup", "personAccessGroup")
    }
}

impl<B: ProcedureBackend> ApsGateway<B> {
    /// Create or edit an access group via `api_SaveAccessGroup`.
    ///
    /// The argument list is the five scalars followed by the complete
    /// access-flag block and then the complete authorization-value block,
    /// 64 slots each in slot order. 133 positional arguments in total.
    pub async fn save_access_group(&self, group: &AccessGroupUpsert) -> GatewayResult<bool> {
        let call = ProcedureCall::new("api_SaveAccessGroup")
            .arg(group.id_access_group)
            .arg(group.id_system)
            .arg(group.number)
            .arg(group.user_number)
            .arg(group.name.as_deref())
            .extend(group.access_modules.iter())
            .extend(group.authorization_modules.iter());
        self.run(call).await
    }

    /// Delete an access group via `api_DeleteAccessGroup`.
    pub async fn delete_access_group(&self, id_access_group: i64) -> GatewayResult<bool> {
        self.run(ProcedureCall::new("api_DeleteAccessGroup").arg(id_access_group))
            .await
    }

    /// Assign a person to an access group via `api_SavePerson_AccessGroup`.
    pub async fn save_person_access_group(
        &self,
        id_person: i64,
        id_access_group: i64,
    ) -> GatewayResult<bool> {
        let call = ProcedureCall::new("api_SavePerson_AccessGroup")
            .arg(id_person)
            .arg(id_access_group);
        self.run(call).await
    }

    /// Remove a person from an access group via
    /// `api_DeletePerson_AccessGroup`.
    pub async fn delete_person_access_group(
        &self,
        id_person: i64,
        id_access_group: i64,
    ) -> GatewayResult<bool> {
        let call = ProcedureCall::new("api_DeletePerson_AccessGroup")
            .arg(id_person)
            .arg(id_access_group);
        self.run(call).await
    }
}
