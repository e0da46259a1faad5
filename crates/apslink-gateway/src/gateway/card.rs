use super::ApsGateway;
use crate::error::GatewayResult;
use crate::procedure::{ProcedureBackend, ProcedureCall};
use crate::view::ViewQuery;
use apslink_core::CardUpsert;

impl<B> ApsGateway<B> {
    /// Rows of the `api_Card` view.
    pub fn list_cards(&self) -> ViewQuery {
        ViewQuery::aliased("api_Card", "card")
    }
}

impl<B: ProcedureBackend> ApsGateway<B> {
    /// Create or edit a card via `api_SaveCard`.
    ///
    /// An absent or zero id creates a new card; an existing id edits it.
    /// The owning person's id binds last, after the card attributes, as the
    /// procedure declares its parameters.
    pub async fn save_card(&self, card: &CardUpsert) -> GatewayResult<bool> {
        let call = ProcedureCall::new("api_SaveCard")
            .arg(card.id_card)
            .arg(card.code.as_deref())
            .arg(card.description.as_deref())
            .arg(card.is_visitors)
            .arg(card.is_one_time_use)
            .arg(card.id_person);
        self.run(call).await
    }

    /// Delete a card via `api_DeleteCard`.
    pub async fn delete_card(&self, id_card: i64) -> GatewayResult<bool> {
        self.run(ProcedureCall::new("api_DeleteCard").arg(id_card))
            .await
    }
}
