use super::ApsGateway;
use crate::error::GatewayResult;
use crate::procedure::{ProcedureBackend, ProcedureCall};
use crate::view::ViewQuery;
use apslink_core::ScheduleUpsert;

impl<B> ApsGateway<B> {
    /// Rows of the `api_Schedule` view.
    pub fn list_schedules(&self) -> ViewQuery {
        ViewQuery::aliased("api_Schedule", "schedule")
    }
}

impl<B: ProcedureBackend> ApsGateway<B> {
    /// Create or edit a schedule via `api_SaveSchedule`.
    ///
    /// The argument list is id, number, and name followed by the 64 flattened
    /// timetable fields in bucket order (Monday through Sunday, then
    /// Holiday; interval 1 before interval 2; start hour/minute before stop
    /// hour/minute).
    pub async fn save_schedule(&self, schedule: &ScheduleUpsert) -> GatewayResult<bool> {
        let call = ProcedureCall::new("api_SaveSchedule")
            .arg(schedule.id_schedule)
            .arg(schedule.number)
            .arg(schedule.name.as_deref())
            .extend(schedule.week.flatten());
        self.run(call).await
    }

    /// Delete a schedule via `api_DeleteSchedule`.
    pub async fn delete_schedule(&self, id_schedule: i64) -> GatewayResult<bool> {
        self.run(ProcedureCall::new("api_DeleteSchedule").arg(id_schedule))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::gateway;
    use crate::procedure::ProcArg;
    use apslink_core::{IntervalTimes, ScheduleUpsert};

    #[tokio::test]
    async fn save_schedule_flattens_the_week_in_bucket_order() {
        let gw = gateway(1);
        let mut schedule = ScheduleUpsert {
            id_schedule: Some(2),
            number: Some(15),
            name: Some("Day shift".to_string()),
            ..Default::default()
        };
        schedule.week.monday.interval1 = IntervalTimes::new(8, 0, 16, 30);
        schedule.week.holiday.interval2 = IntervalTimes::new(10, 15, 11, 45);

        assert!(gw.save_schedule(&schedule).await.unwrap());

        let call = gw.backend().last_call();
        assert_eq!(call.procedure(), "api_SaveSchedule");
        assert_eq!(call.args().len(), 3 + 64);

        assert_eq!(call.args()[0], ProcArg::Int(2));
        assert_eq!(call.args()[1], ProcArg::Int(15));
        assert_eq!(call.args()[2], ProcArg::Text("Day shift".to_string()));

        // Monday interval 1 opens the timetable block.
        assert_eq!(call.args()[3], ProcArg::Int(8));
        assert_eq!(call.args()[4], ProcArg::Int(0));
        assert_eq!(call.args()[5], ProcArg::Int(16));
        assert_eq!(call.args()[6], ProcArg::Int(30));

        // Monday interval 2 is unset.
        assert_eq!(call.args()[7], ProcArg::Null);

        // Holiday interval 2 closes it.
        assert_eq!(call.args()[63], ProcArg::Int(10));
        assert_eq!(call.args()[66], ProcArg::Int(45));
    }

    #[tokio::test]
    async fn delete_schedule_passes_the_id() {
        let gw = gateway(1);
        assert!(gw.delete_schedule(3).await.unwrap());
        let call = gw.backend().last_call();
        assert_eq!(call.procedure(), "api_DeleteSchedule");
        assert_eq!(call.args(), &[ProcArg::Int(3)]);
    }

    #[test]
    fn list_schedules_targets_the_schedule_view() {
        let gw = gateway(0);
        assert_eq!(
            gw.list_schedules().sql(),
            "SELECT * FROM api_Schedule AS schedule"
        );
    }
}
