use super::ApsGateway;
use crate::error::GatewayResult;
use crate::procedure::{ProcedureBackend, ProcedureCall};
use crate::view::{JoinSpec, ViewQuery};

impl<B> ApsGateway<B> {
    /// Rows of `api_Event` joined to `api_EventDefinition`.
    ///
    /// The join matches on system, module, and event code. The definition
    /// view misspells its description column as `Decription`; the projection
    /// aliases it to `Description` so consumers see the corrected name. The
    /// underlying column is a vendor schema defect and is left for the
    /// schema owner to fix.
    pub fn list_events(&self) -> ViewQuery {
        ViewQuery::aliased("api_Event", "e")
            .projection("e.*, ed.Decription AS Description")
            .join(
                JoinSpec::inner("api_EventDefinition", "ed")
                    .on("ed.ID_System", "e.ID_System")
                    .on("ed.ID_Module", "e.ID_Module")
                    .on("ed.IDEventCode", "e.ID_EventCode"),
            )
    }
}

impl<B: ProcedureBackend> ApsGateway<B> {
    /// Edit an event-type definition via `api_UpdateEventDefinition`.
    ///
    /// The (event code, module, system) triple identifies the definition;
    /// there is no create or delete for definitions, the panel provisions
    /// them.
    pub async fn update_event_definition(
        &self,
        id_event_code: i64,
        id_module: i64,
        id_system: i64,
        description: Option<&str>,
        alert_text: Option<&str>,
        alert_level: Option<i32>,
    ) -> GatewayResult<bool> {
        let call = ProcedureCall::new("api_UpdateEventDefinition")
            .arg(id_event_code)
            .arg(id_module)
            .arg(id_system)
            .arg(description)
            .arg(alert_text)
            .arg(alert_level);
        self.run(call).await
    }
}
