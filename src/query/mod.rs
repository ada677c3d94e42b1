//! The QuickBooks query adapter.
//!
//! QuickBooks reads collections through a SQL-like statement sent to the
//! `query` endpoint:
//!
//! ```text
//! GET /v3/company/{realm}/query?query=SELECT * FROM Invoice WHERE Balance > 0 MAXRESULTS 10
//! ```
//!
//! [`Query`] assembles such statements and executes them. Results come back
//! as `{"QueryResponse": {"Invoice": [...], "startPosition": 1, "maxResults": 10}}`;
//! an entity key missing from `QueryResponse` means zero rows.
//!
//! # Paging
//!
//! QuickBooks returns at most 1000 rows per statement. Unless
//! [`max_results`](Query::max_results) is set, [`Query::get`] issues one
//! statement per page of 1000 rows, starting at
//! [`start_position`](Query::start_position) (1 by default), until a page
//! comes back short.
//!
//! # Example
//!
//! ```rust,ignore
//! use quickbooks_api::query::Direction;
//!
//! let recent = client
//!     .query()
//!     .entity("Invoice")
//!     .where_eq("CustomerRef", "58")
//!     .order_by("TxnDate", Direction::Desc)
//!     .max_results(10)
//!     .get()
//!     .await?;
//! ```

use std::fmt;

use serde_json::Value;

use crate::clients::Client;
use crate::services::ServiceError;

/// Rows QuickBooks returns per statement at most.
pub const PAGE_SIZE: u32 = 1000;

/// Sort direction of an `ORDERBY` clause.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "ASC"),
            Self::Desc => write!(f, "DESC"),
        }
    }
}

/// A query against one QuickBooks entity.
///
/// Obtained from [`Service::query`](crate::services::Service::query), which
/// scopes it to the service's entity, or from [`Client::query`] followed by
/// [`entity`](Self::entity). Conditions are joined with `AND`.
#[derive(Clone, Debug)]
pub struct Query<'c> {
    client: &'c Client,
    entity: Option<String>,
    fields: Vec<String>,
    conditions: Vec<String>,
    order: Vec<(String, Direction)>,
    start_position: Option<u32>,
    max_results: Option<u32>,
}

impl<'c> Query<'c> {
    /// Creates an unscoped query.
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self {
            client,
            entity: None,
            fields: Vec::new(),
            conditions: Vec::new(),
            order: Vec::new(),
            start_position: None,
            max_results: None,
        }
    }

    /// Scopes the query to `name` (e.g., "Invoice").
    #[must_use]
    pub fn entity(mut self, name: impl Into<String>) -> Self {
        self.entity = Some(name.into());
        self
    }

    /// Restricts the selected fields. Without it, every field is selected.
    #[must_use]
    pub fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Adds `field = value`.
    #[must_use]
    pub fn where_eq(self, field: &str, value: impl Into<Value>) -> Self {
        self.where_op(field, "=", value)
    }

    /// Adds `field {operator} value`, e.g. `where_op("Balance", ">", 0)`.
    ///
    /// QuickBooks accepts `=`, `<`, `>`, `<=`, `>=` and `LIKE`.
    #[must_use]
    pub fn where_op(mut self, field: &str, operator: &str, value: impl Into<Value>) -> Self {
        self.conditions
            .push(format!("{field} {operator} {}", literal(&value.into())));
        self
    }

    /// Adds `field IN (values...)`.
    #[must_use]
    pub fn where_in<I, V>(mut self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<String> = values
            .into_iter()
            .map(|value| literal(&value.into()))
            .collect();
        self.conditions
            .push(format!("{field} IN ({})", values.join(", ")));
        self
    }

    /// Adds a sort key. Keys apply in the order they are added.
    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order.push((field.into(), direction));
        self
    }

    /// Sets the 1-based position of the first row.
    #[must_use]
    pub const fn start_position(mut self, position: u32) -> Self {
        self.start_position = Some(position);
        self
    }

    /// Limits the query to a single statement returning at most `max` rows.
    #[must_use]
    pub const fn max_results(mut self, max: u32) -> Self {
        self.max_results = Some(max);
        self
    }

    /// Returns the statement this query sends.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidQuery`] if no entity was set.
    pub fn to_sql(&self) -> Result<String, ServiceError> {
        let entity = self.entity_name()?;
        Ok(self.statement(entity, self.start_position, self.max_results))
    }

    /// Executes the query and returns every matching row.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidQuery`] if no entity was set,
    /// [`ServiceError::Decode`] if a response lacks `QueryResponse`, and
    /// [`ServiceError::Transport`] if a request fails.
    pub async fn get(&self) -> Result<Vec<Value>, ServiceError> {
        let entity = self.entity_name()?;

        if let Some(max) = self.max_results {
            let statement = self.statement(entity, self.start_position, Some(max));
            return self.fetch(entity, &statement).await;
        }

        let mut position = self.start_position.unwrap_or(1);
        let mut rows = Vec::new();
        loop {
            let statement = self.statement(entity, Some(position), Some(PAGE_SIZE));
            let page = self.fetch(entity, &statement).await?;
            let page_len = page.len();
            rows.extend(page);

            if page_len < PAGE_SIZE as usize {
                break;
            }
            match position.checked_add(PAGE_SIZE) {
                Some(next) => position = next,
                None => break,
            }
        }

        Ok(rows)
    }

    /// Executes the query for its first row.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn first(&self) -> Result<Option<Value>, ServiceError> {
        let rows = self.clone().max_results(1).get().await?;
        Ok(rows.into_iter().next())
    }

    /// Counts the matching rows with `SELECT COUNT(*)`.
    ///
    /// Field selection, ordering and paging are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidQuery`] if no entity was set,
    /// [`ServiceError::Decode`] if the response lacks
    /// `QueryResponse.totalCount`, and [`ServiceError::Transport`] if the
    /// request fails.
    pub async fn count(&self) -> Result<u64, ServiceError> {
        let entity = self.entity_name()?;
        let mut statement = format!("SELECT COUNT(*) FROM {entity}");
        self.push_conditions(&mut statement);

        let body = self.send(&statement).await?;
        body.get("QueryResponse")
            .and_then(|response| response.get("totalCount"))
            .and_then(Value::as_u64)
            .ok_or_else(|| ServiceError::Decode {
                key: "QueryResponse.totalCount".to_string(),
            })
    }

    fn entity_name(&self) -> Result<&str, ServiceError> {
        self.entity
            .as_deref()
            .ok_or_else(|| ServiceError::InvalidQuery {
                reason: "no entity set".to_string(),
            })
    }

    fn statement(&self, entity: &str, start: Option<u32>, max: Option<u32>) -> String {
        let fields = if self.fields.is_empty() {
            "*".to_string()
        } else {
            self.fields.join(", ")
        };
        let mut statement = format!("SELECT {fields} FROM {entity}");
        self.push_conditions(&mut statement);

        if !self.order.is_empty() {
            let order: Vec<String> = self
                .order
                .iter()
                .map(|(field, direction)| format!("{field} {direction}"))
                .collect();
            statement.push_str(" ORDERBY ");
            statement.push_str(&order.join(", "));
        }
        if let Some(start) = start {
            statement.push_str(&format!(" STARTPOSITION {start}"));
        }
        if let Some(max) = max {
            statement.push_str(&format!(" MAXRESULTS {max}"));
        }
        statement
    }

    fn push_conditions(&self, statement: &mut String) {
        if !self.conditions.is_empty() {
            statement.push_str(" WHERE ");
            statement.push_str(&self.conditions.join(" AND "));
        }
    }

    async fn send(&self, statement: &str) -> Result<Value, ServiceError> {
        tracing::debug!("Running QuickBooks query: {}", statement);

        let path = format!("query?query={}", urlencoding::encode(statement));
        let response = self.client.get(&path).await?;
        Ok(response.body)
    }

    async fn fetch(&self, entity: &str, statement: &str) -> Result<Vec<Value>, ServiceError> {
        let body = self.send(statement).await?;
        let response = body
            .get("QueryResponse")
            .ok_or_else(|| ServiceError::Decode {
                key: "QueryResponse".to_string(),
            })?;

        match response.get(entity) {
            None => Ok(Vec::new()),
            Some(Value::Array(rows)) => Ok(rows.clone()),
            Some(_) => Err(ServiceError::Decode {
                key: format!("QueryResponse.{entity}"),
            }),
        }
    }
}

/// Renders `value` as a query literal.
///
/// Strings are single-quoted with `\` escaped as `\\` and `'` as `\'`;
/// numbers and booleans are written bare.
fn literal(value: &Value) -> String {
    match value {
        Value::String(text) => quote(text),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => "NULL".to_string(),
        other => quote(&other.to_string()),
    }
}

fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\\', "\\\\").replace('\'', "\\'"))
}
