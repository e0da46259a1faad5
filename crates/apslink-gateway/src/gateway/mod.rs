mod access_group;
mod card;
mod control;
mod event;
mod folder;
mod holiday;
mod person;
mod schedule;
mod system;

use crate::connection::Database;
use crate::error::GatewayResult;
use crate::procedure::{ProcedureBackend, ProcedureCall};
use crate::view::ViewQuery;
use tracing::debug;

/// The operation catalogue of the panel database.
///
/// Every method is one catalogue entry: reads return a [`ViewQuery`] handle
/// against a named view, writes invoke a named stored procedure with a fixed
/// positional argument list and report `true` when at least one row was
/// affected.
///
/// The gateway holds exactly one backend for its lifetime, injected at
/// construction; all calls share it. There is no internal queuing, retrying,
/// or caching, and no local validation of argument ranges. The panel owns
/// all of that.
///
/// # Write results
///
/// `false` from a write means the procedure reported zero affected rows.
/// That single signal covers "target not found", "no-op update", and
/// "procedure declined silently"; the catalogue offers no way to tell them
/// apart, and callers must not read more into it.
#[derive(Debug)]
pub struct ApsGateway<B = Database> {
    backend: B,
}

impl ApsGateway<Database> {
    /// Create a gateway over a connected panel database.
    pub fn new(database: Database) -> Self {
        Self { backend: database }
    }

    /// The held connection handle, for materializing [`ViewQuery`] reads.
    pub fn database(&self) -> &Database {
        &self.backend
    }
}

impl<B> ApsGateway<B> {
    /// Create a gateway over any procedure backend.
    ///
    /// Production code uses [`ApsGateway::new`]; this constructor is the
    /// seam for exercising the catalogue against a stub backend.
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    /// Rows of the panel-internal `Promenne` variables table.
    ///
    /// Diagnostic surface; column layout is vendor-defined, so callers
    /// usually narrow it with [`ViewQuery::projection`].
    pub fn list_variables(&self) -> ViewQuery {
        ViewQuery::new("Promenne")
    }
}

impl<B: ProcedureBackend> ApsGateway<B> {
    pub(crate) async fn run(&self, call: ProcedureCall) -> GatewayResult<bool> {
        let affected = self.backend.execute(&call).await?;
        debug!(
            procedure = call.procedure(),
            affected,
            success = affected > 0,
            "stored procedure executed"
        );
        Ok(affected > 0)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::Mutex;

    /// Backend stub that records every call and reports a canned
    /// affected-row count.
    pub(crate) struct RecordingBackend {
        rows_affected: u64,
        calls: Mutex<Vec<ProcedureCall>>,
    }

    impl RecordingBackend {
        pub(crate) fn reporting(rows_affected: u64) -> Self {
            Self {
                rows_affected,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn last_call(&self) -> ProcedureCall {
            self.calls
                .lock()
                .unwrap()
                .last()
                .expect("no procedure call recorded")
                .clone()
        }
    }

    impl ProcedureBackend for RecordingBackend {
        async fn execute(&self, call: &ProcedureCall) -> GatewayResult<u64> {
            self.calls.lock().unwrap().push(call.clone());
            Ok(self.rows_affected)
        }
    }

    pub(crate) fn gateway(rows_affected: u64) -> ApsGateway<RecordingBackend> {
        ApsGateway::with_backend(RecordingBackend::reporting(rows_affected))
    }
}
