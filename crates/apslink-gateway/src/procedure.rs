#![allow(async_fn_in_trait)]

use crate::connection::Database;
use crate::error::GatewayResult;
use apslink_core::constants::TIMESTAMP_FORMAT;
use chrono::NaiveDateTime;
use tracing::trace;

/// One positional argument of a stored-procedure call.
///
/// The panel's procedures bind by position, and an absent optional argument
/// must still occupy its position as SQL NULL. `ProcArg` makes that marker
/// explicit: an `Option` in the caller's record becomes `Null`, never a
/// dropped argument, an empty string, or a zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcArg {
    Null,
    Int(i64),
    Bool(bool),
    Text(String),
}

impl ProcArg {
    /// Timestamp argument in the panel's wire format.
    ///
    /// A present value is formatted as `YYYY-MM-DD HH:MM:SS` text; an absent
    /// value stays NULL.
    pub fn timestamp(value: Option<NaiveDateTime>) -> Self {
        match value {
            Some(t) => ProcArg::Text(t.format(TIMESTAMP_FORMAT).to_string()),
            None => ProcArg::Null,
        }
    }
}

impl From<i64> for ProcArg {
    fn from(value: i64) -> Self {
        ProcArg::Int(value)
    }
}

impl From<i32> for ProcArg {
    fn from(value: i32) -> Self {
        ProcArg::Int(value.into())
    }
}

impl From<bool> for ProcArg {
    fn from(value: bool) -> Self {
        ProcArg::Bool(value)
    }
}

impl From<&str> for ProcArg {
    fn from(value: &str) -> Self {
        ProcArg::Text(value.to_string())
    }
}

impl From<String> for ProcArg {
    fn from(value: String) -> Self {
        ProcArg::Text(value)
    }
}

impl<T: Into<ProcArg>> From<Option<T>> for ProcArg {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => ProcArg::Null,
        }
    }
}

/// A stored-procedure invocation: name plus ordered argument list.
///
/// Argument order is part of the remote contract; the builder appends in
/// call order and nothing ever reorders the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcedureCall {
    procedure: &'static str,
    args: Vec<ProcArg>,
}

impl ProcedureCall {
    pub fn new(procedure: &'static str) -> Self {
        Self {
            procedure,
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, value: impl Into<ProcArg>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Append a block of arguments, preserving iteration order.
    pub fn extend<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ProcArg>,
    {
        self.args.extend(values.into_iter().map(Into::into));
        self
    }

    /// The procedure name.
    pub fn procedure(&self) -> &'static str {
        self.procedure
    }

    /// The ordered argument list.
    pub fn args(&self) -> &[ProcArg] {
        &self.args
    }

    /// Render the `CALL` statement with one placeholder per argument.
    pub fn sql(&self) -> String {
        if self.args.is_empty() {
            return format!("CALL {}()", self.procedure);
        }
        let placeholders = vec!["?"; self.args.len()].join(", ");
        format!("CALL {}({})", self.procedure, placeholders)
    }
}

/// Executor of stored-procedure calls.
///
/// This is the outbound seam of the gateway: the production implementation
/// runs the `CALL` against the held pool, test implementations record the
/// call and report a canned affected-row count.
pub trait ProcedureBackend: Send + Sync {
    /// Execute the call and return the affected-row count.
    async fn execute(&self, call: &ProcedureCall) -> GatewayResult<u64>;
}

impl ProcedureBackend for Database {
    async fn execute(&self, call: &ProcedureCall) -> GatewayResult<u64> {
        let sql = call.sql();
        let mut query = sqlx::query(&sql);
        for arg in call.args() {
            query = match arg {
                ProcArg::Null => query.bind(None::<i64>),
                ProcArg::Int(v) => query.bind(*v),
                ProcArg::Bool(v) => query.bind(*v),
                ProcArg::Text(v) => query.bind(v.as_str()),
            };
        }
        let result = query.execute(self.pool()).await?;
        trace!(
            procedure = call.procedure(),
            rows = result.rows_affected(),
            "procedure executed"
        );
        Ok(result.rows_affected())
    }
}
