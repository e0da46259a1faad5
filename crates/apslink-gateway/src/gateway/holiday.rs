use super::ApsGateway;
use crate::error::GatewayResult;
use crate::procedure::{ProcedureBackend, ProcedureCall};
use crate::view::ViewQuery;

impl<B> ApsGateway<B> {
    /// Rows of the `api_Holiday` view.
    pub fn list_holidays(&self) -> ViewQuery {
        ViewQuery::aliased("api_Holiday", "holiday")
    }
}

impl<B: ProcedureBackend> ApsGateway<B> {
    /// Create or edit a holiday via `api_SaveHoliday`.
    ///
    /// Holidays are year-less day/month pairs; an absent or zero id creates
    /// a new entry.
    pub async fn save_holiday(
        &self,
        id_holiday: Option<i64>,
        day: Option<i32>,
        month: Option<i32>,
        name: Option<&str>,
    ) -> GatewayResult<bool> {
        let call = ProcedureCall::new("api_SaveHoliday")
            .arg(id_holiday)
            .arg(day)
            .arg(month)
            .arg(name);
        self.run(call).await
    }

    /// Delete a holiday via `api_DeleteHoliday`.
    pub async fn delete_holiday(&self, id_holiday: i64) -> GatewayResult<bool> {
        self.run(ProcedureCall::new("api_DeleteHoliday").arg(id_holiday))
            .await
    }
}
