use super::ApsGateway;
use crate::error::GatewayResult;
use crate::procedure::{ProcArg, ProcedureBackend, ProcedureCall};
use crate::view::ViewQuery;
use apslink_core::PersonUpsert;

impl<B> ApsGateway<B> {
    /// Rows of the `api_Person` view.
    pub fn list_persons(&self) -> ViewQuery {
        ViewQuery::aliased("api_Person", "person")
    }
}

impl<B: ProcedureBackend> ApsGateway<B> {
    /// Create or edit a person via `api_SavePerson`.
    ///
    /// An absent or zero id creates a new person; an existing id edits that
    /// person. Validity bounds travel as `YYYY-MM-DD HH:MM:SS` text, or NULL
    /// when absent.
    pub async fn save_person(&self, person: &PersonUpsert) -> GatewayResult<bool> {
        let call = ProcedureCall::new("api_SavePerson")
            .arg(person.id_person)
            .arg(person.id_folder)
            .arg(person.first_name.as_deref())
            .arg(person.middle_name.as_deref())
            .arg(person.last_name.as_deref())
            .arg(person.title.as_deref())
            .arg(person.pin.as_deref())
            .arg(person.workplace.as_deref())
            .arg(person.job.as_deref())
            .arg(person.personal_number.as_deref())
            .arg(person.phone.as_deref())
            .arg(person.cell_phone.as_deref())
            .arg(person.email.as_deref())
            .arg(person.external_key1)
            .arg(person.external_key2)
            .arg(ProcArg::timestamp(person.validity_origin))
            .arg(ProcArg::timestamp(person.validity_expiration));
        self.run(call).await
    }

    /// Delete a person via `api_DeletePerson`.
    pub async fn delete_person(&self, id_person: i64) -> GatewayResult<bool> {
        self.run(ProcedureCall::new("api_DeletePerson").arg(id_person))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::gateway;
    use crate::procedure::ProcArg;
    use apslink_core::PersonUpsert;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn save_person_binds_all_seventeen_arguments_in_order() {
        let gw = gateway(1);
        let person = PersonUpsert {
            id_person: Some(5),
            first_name: Some("Jan".to_string()),
            last_name: Some("Novak".to_string()),
            external_key2: Some(99),
            ..Default::default()
        };

        assert!(gw.save_person(&person).await.unwrap());

        let call = gw.backend().last_call();
        assert_eq!(call.procedure(), "api_SavePerson");
        assert_eq!(call.args().len(), 17);
        assert_eq!(call.args()[0], ProcArg::Int(5));
        assert_eq!(call.args()[1], ProcArg::Null); // folder
        assert_eq!(call.args()[2], ProcArg::Text("Jan".to_string()));
        assert_eq!(call.args()[4], ProcArg::Text("Novak".to_string()));
        assert_eq!(call.args()[14], ProcArg::Int(99)); // external key 2
        assert_eq!(call.args()[15], ProcArg::Null); // validity origin
        assert_eq!(call.args()[16], ProcArg::Null); // validity expiration
    }

    #[tokio::test]
    async fn save_person_formats_validity_timestamps() {
        let gw = gateway(1);
        let origin = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        let person = PersonUpsert {
            validity_origin: Some(origin),
            ..Default::default()
        };

        gw.save_person(&person).await.unwrap();

        let call = gw.backend().last_call();
        assert_eq!(
            call.args()[15],
            ProcArg::Text("2024-01-02 03:04:05".to_string())
        );
        // An absent expiration stays NULL, never an empty string.
        assert_eq!(call.args()[16], ProcArg::Null);
    }

    #[tokio::test]
    async fn delete_person_passes_the_id() {
        let gw = gateway(1);
        assert!(gw.delete_person(42).await.unwrap());

        let call = gw.backend().last_call();
        assert_eq!(call.procedure(), "api_DeletePerson");
        assert_eq!(call.args(), &[ProcArg::Int(42)]);
    }

    #[tokio::test]
    async fn zero_affected_rows_reports_failure() {
        let gw = gateway(0);
        assert!(!gw.delete_person(42).await.unwrap());
    }

    #[test]
    fn list_persons_targets_the_person_view() {
        let gw = gateway(0);
        assert_eq!(gw.list_persons().sql(), "SELECT * FROM api_Person AS person");
    }
}
