//! Panel control actions.
//!
//! These operations do not edit catalogue records; they trigger behavior in
//! the panel itself: pushing configuration down to the hardware, releasing
//! blocked persons or cards, opening a door, and poking registers, timers,
//! and the online-authorization switch.

use super::ApsGateway;
use crate::error::GatewayResult;
use crate::procedure::{ProcedureBackend, ProcedureCall};

impl<B: ProcedureBackend> ApsGateway<B> {
    /// Fire a user-defined event via `api_ExecuteUserEvent`.
    pub async fn execute_user_event(
        &self,
        id_system: i64,
        id_user_event: i64,
    ) -> GatewayResult<bool> {
        let call = ProcedureCall::new("api_ExecuteUserEvent")
            .arg(id_system)
            .arg(id_user_event);
        self.run(call).await
    }

    /// Push all access groups, schedules, and holidays to the hardware via
    /// `api_UploadAccessGroupsSchedulesAndHolidays`.
    pub async fn upload_access_groups_schedules_and_holidays(&self) -> GatewayResult<bool> {
        self.run(ProcedureCall::new(
            "api_UploadAccessGroupsSchedulesAndHolidays",
        ))
        .await
    }

    /// Refresh one person's permissions on the hardware via
    /// `api_UpdateAccessForPerson`.
    pub async fn update_access_for_person(&self, id_person: i64) -> GatewayResult<bool> {
        self.run(ProcedureCall::new("api_UpdateAccessForPerson").arg(id_person))
            .await
    }

    /// Release a blocked person via `api_ReleasePerson`.
    pub async fn release_person(&self, id_person: i64) -> GatewayResult<bool> {
        self.run(ProcedureCall::new("api_ReleasePerson").arg(id_person))
            .await
    }

    /// Release a blocked card via `api_ReleaseCard`.
    pub async fn release_card(&self, id_card: i64) -> GatewayResult<bool> {
        self.run(ProcedureCall::new("api_ReleaseCard").arg(id_card))
            .await
    }

    /// Open the door remotely via `api_RemoteOpenDoor`.
    pub async fn remote_open_door(&self) -> GatewayResult<bool> {
        self.run(ProcedureCall::new("api_RemoteOpenDoor")).await
    }

    /// Set a panel register via `api_SetRegister`.
    ///
    /// The panel documents the value range as 1-250; out-of-range values are
    /// passed through for the panel to accept or reject.
    pub async fn set_register(
        &self,
        id_system: i64,
        id_register: i64,
        value: i32,
    ) -> GatewayResult<bool> {
        let call = ProcedureCall::new("api_SetRegister")
            .arg(id_system)
            .arg(id_register)
            .arg(value);
        self.run(call).await
    }

    /// Set a panel timer via `api_SetTimer`.
    pub async fn set_timer(&self, id_system: i64, id_timer: i64, value: i32) -> GatewayResult<bool> {
        let call = ProcedureCall::new("api_SetTimer")
            .arg(id_system)
            .arg(id_timer)
            .arg(value);
        self.run(call).await
    }

    /// Push all data to the hardware via `api_UploadData`.
    pub async fn upload_data(&self) -> GatewayResult<bool> {
        self.run(ProcedureCall::new("api_UploadData")).await
    }

    /// Push one schedule to the hardware via `api_UploadScheduleX`.
    ///
    /// Takes the schedule ordinal (documented range 1-64), not the record
    /// id.
    pub async fn upload_schedule(&self, schedule_number: i32) -> GatewayResult<bool> {
        self.run(ProcedureCall::new("api_UploadScheduleX").arg(schedule_number))
            .await
    }

    /// Switch the panel to online authorization via
    /// `api_OnlineAuthorizationEnable`.
    pub async fn online_authorization_enable(&self) -> GatewayResult<bool> {
        self.run(ProcedureCall::new("api_OnlineAuthorizationEnable"))
            .await
    }

    /// Switch the panel back to local authorization via
    /// `api_OnlineAuthorizationDisable`.
    pub async fn online_authorization_disable(&self) -> GatewayResult<bool> {
        self.run(ProcedureCall::new("api_OnlineAuthorizationDisable"))
            .await
    }

    /// Apply the pending parameter set via `api_SetParameter`.
    pub async fn set_parameter(&self) -> GatewayResult<bool> {
        self.run(ProcedureCall::new("api_SetParameter")).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::gateway;
    use crate::procedure::ProcArg;

    #[tokio::test]
    async fn execute_user_event_binds_system_then_event() {
        let gw = gateway(1);
        assert!(gw.execute_user_event(1, 17).await.unwrap());

        let call = gw.backend().last_call();
        assert_eq!(call.procedure(), "api_ExecuteUserEvent");
        assert_eq!(call.args(), &[ProcArg::Int(1), ProcArg::Int(17)]);
    }

    #[tokio::test]
    async fn set_register_binds_system_register_value() {
        let gw = gateway(1);
        assert!(gw.set_register(1, 5, 250).await.unwrap());

        let call = gw.backend().last_call();
        assert_eq!(call.procedure(), "api_SetRegister");
        assert_eq!(
            call.args(),
            &[ProcArg::Int(1), ProcArg::Int(5), ProcArg::Int(250)]
        );
    }

    #[tokio::test]
    async fn out_of_range_register_value_is_passed_through() {
        // Range checking belongs to the panel, not this layer.
        let gw = gateway(0);
        assert!(!gw.set_register(1, 5, 9999).await.unwrap());
        assert_eq!(
            gw.backend().last_call().args()[2],
            ProcArg::Int(9999)
        );
    }

    #[tokio::test]
    async fn set_timer_binds_system_timer_value() {
        let gw = gateway(1);
        assert!(gw.set_timer(1, 2, 30).await.unwrap());

        let call = gw.backend().last_call();
        assert_eq!(call.procedure(), "api_SetTimer");
        assert_eq!(
            call.args(),
            &[ProcArg::Int(1), ProcArg::Int(2), ProcArg::Int(30)]
        );
    }

    #[tokio::test]
    async fn upload_schedule_takes_the_ordinal() {
        let gw = gateway(1);
        assert!(gw.upload_schedule(64).await.unwrap());

        let call = gw.backend().last_call();
        assert_eq!(call.procedure(), "api_UploadScheduleX");
        assert_eq!(call.args(), &[ProcArg::Int(64)]);
    }

    #[tokio::test]
    async fn no_argument_actions_call_with_empty_lists() {
        let gw = gateway(1);

        assert!(gw.upload_data().await.unwrap());
        assert_eq!(gw.backend().last_call().procedure(), "api_UploadData");
        assert!(gw.backend().last_call().args().is_empty());

        assert!(gw.remote_open_door().await.unwrap());
        assert_eq!(gw.backend().last_call().procedure(), "api_RemoteOpenDoor");

        assert!(gw.upload_access_groups_schedules_and_holidays().await.unwrap());
        assert_eq!(
            gw.backend().last_call().procedure(),
            "api_UploadAccessGroupsSchedulesAndHolidays"
        );

        assert!(gw.online_authorization_enable().await.unwrap());
        assert_eq!(
            gw.backend().last_call().procedure(),
            "api_OnlineAuthorizationEnable"
        );

        assert!(gw.online_authorization_disable().await.unwrap());
        assert_eq!(
            gw.backend().last_call().procedure(),
            "api_OnlineAuthorizationDisable"
        );

        assert!(gw.set_parameter().await.unwrap());
        assert_eq!(gw.backend().last_call().procedure(), "api_SetParameter");
    }

    #[tokio::test]
    async fn release_operations_target_their_ids() {
        let gw = gateway(1);

        assert!(gw.release_person(11).await.unwrap());
        let call = gw.backend().last_call();
        assert_eq!(call.procedure(), "api_ReleasePerson");
        assert_eq!(call.args(), &[ProcArg::Int(11)]);

        assert!(gw.release_card(12).await.unwrap());
        let call = gw.backend().last_call();
        assert_eq!(call.procedure(), "api_ReleaseCard");
        assert_eq!(call.args(), &[ProcArg::Int(12)]);

        assert!(gw.update_access_for_person(11).await.unwrap());
        let call = gw.backend().last_call();
        assert_eq!(call.procedure(), "api_UpdateAccessForPerson");
        assert_eq!(call.args(), &[ProcArg::Int(11)]);
    }
}
