use crate::connection::Database;
use crate::error::GatewayResult;
use sqlx::mysql::MySqlRow;
use tracing::debug;

/// Inner-join clause of a view query.
///
/// Only equality predicates exist in the catalogue; each `on` pair renders
/// as `left = right` and pairs are chained with `AND` in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinSpec {
    view: &'static str,
    alias: &'static str,
    on: Vec<(&'static str, &'static str)>,
}

impl JoinSpec {
    pub fn inner(view: &'static str, alias: &'static str) -> Self {
        Self {
            view,
            alias,
            on: Vec::new(),
        }
    }

    /// Add an equality predicate.
    pub fn on(mut self, left: &'static str, right: &'static str) -> Self {
        self.on.push((left, right));
        self
    }

    fn render(&self) -> String {
        let predicates = self
            .on
            .iter()
            .map(|(left, right)| format!("{left} = {right}"))
            .collect::<Vec<_>>()
            .join(" AND ");
        format!("INNER JOIN {} AS {} ON {}", self.view, self.alias, predicates)
    }
}

/// A read against a named view.
///
/// Construction is pure: no connection is touched and nothing can fail until
/// the caller materializes the query with one of the fetch methods. The
/// handle is restartable; every fetch re-issues the statement, so a caller
/// can hold one `ViewQuery` and page or re-read at will.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery {
    view: &'static str,
    alias: Option<&'static str>,
    projection: String,
    join: Option<JoinSpec>,
}

impl ViewQuery {
    /// Query a view with the default projection `*`.
    pub fn new(view: &'static str) -> Self {
        Self {
            view,
            alias: None,
            projection: "*".to_string(),
            join: None,
        }
    }

    /// Query a view under an alias.
    pub fn aliased(view: &'static str, alias: &'static str) -> Self {
        Self {
            alias: Some(alias),
            ..Self::new(view)
        }
    }

    /// Replace the column projection.
    pub fn projection(mut self, projection: impl Into<String>) -> Self {
        self.projection = projection.into();
        self
    }

    /// Attach a join clause.
    pub fn join(mut self, join: JoinSpec) -> Self {
        self.join = Some(join);
        self
    }

    /// The view name this query targets.
    pub fn view(&self) -> &'static str {
        self.view
    }

    /// Render the SELECT statement.
    pub fn sql(&self) -> String {
        let mut sql = format!("SELECT {} FROM {}", self.projection, self.view);
        if let Some(alias) = self.alias {
            sql.push_str(&format!(" AS {alias}"));
        }
        if let Some(join) = &self.join {
            sql.push(' ');
            sql.push_str(&join.render());
        }
        sql
    }

    /// Materialize every row as `T`.
    ///
    /// Connectivity and SQL errors surface here, unwrapped, as raised by the
    /// driver.
    pub async fn fetch_all<T>(&self, db: &Database) -> GatewayResult<Vec<T>>
    where
        T: for<'r> sqlx::FromRow<'r, MySqlRow> + Send + Unpin,
    {
        let sql = self.sql();
        debug!(view = self.view, "materializing view query");
        Ok(sqlx::query_as::<_, T>(&sql).fetch_all(db.pool()).await?)
    }

    /// Materialize the first row as `T`, if any.
    pub async fn fetch_optional<T>(&self, db: &Database) -> GatewayResult<Option<T>>
    where
        T: for<'r> sqlx::FromRow<'r, MySqlRow> + Send + Unpin,
    {
        let sql = self.sql();
        debug!(view = self.view, "materializing view query");
        Ok(sqlx::query_as::<_, T>(&sql)
            .fetch_optional(db.pool())
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_projection_is_star() {
        let query = ViewQuery::aliased("api_Person", "person");
        assert_eq!(query.sql(), "SELECT * FROM api_Person AS person");
    }

    #[test]
    fn projection_override() {
        let query = ViewQuery::aliased("api_Card", "card").projection("IDCard, Code");
        assert_eq!(query.sql(), "SELECT IDCard, Code FROM api_Card AS card");
    }

    #[test]
    fn unaliased_view() {
        let query = ViewQuery::new("Promenne");
        assert_eq!(query.sql(), "SELECT * FROM Promenne");
    }

    #[test]
    fn join_chains_predicates_with_and() {
        let query = ViewQuery::aliased("api_Event", "e")
            .projection("e.*, ed.Decription AS Description")
            .join(
                JoinSpec::inner("api_EventDefinition", "ed")
                    .on("ed.ID_System", "e.ID_System")
                    .on("ed.ID_Module", "e.ID_Module")
                    .on("ed.IDEventCode", "e.ID_EventCode"),
            );
        assert_eq!(
            query.sql(),
            "SELECT e.*, ed.Decription AS Description FROM api_Event AS e \
             INNER JOIN api_EventDefinition AS ed ON ed.ID_System = e.ID_System \
             AND ed.ID_Module = e.ID_Module AND ed.IDEventCode = e.ID_EventCode"
        );
    }
}
