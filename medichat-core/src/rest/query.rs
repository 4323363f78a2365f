//! Query builder rendered as PostgREST parameters.

/// Sort direction of an ordered query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl Direction {
    /// PostgREST spelling: `asc` or `desc`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

/// Sort clause of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Column to sort by.
    pub column: String,
    /// Sort direction.
    pub direction: Direction,
}

/// `select * from <table> [where <col> = <value>] [order by <col> <dir>]`,
/// rendered as PostgREST query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    table: String,
    filter: Option<(String, String)>,
    order: Option<Order>,
}

impl TableQuery {
    /// Select every column of `table`.
    pub fn from(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            filter: None,
            order: None,
        }
    }

    /// Keep rows whose `column` equals `value`. Replaces any earlier filter.
    pub fn eq(
        mut self,
        column: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.filter = Some((column.into(), value.into()));
        self
    }

    /// Sort the result. Replaces any earlier order.
    pub fn order(
        mut self,
        column: impl Into<String>,
        direction: Direction,
    ) -> Self {
        self.order = Some(Order {
            column: column.into(),
            direction,
        });
        self
    }

    /// Target table.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Query string pairs, in a stable order: `select`, filter, `order`.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), "*".to_string())];
        if let Some((column, value)) = &self.filter {
            pairs.push((column.clone(), format!("eq.{value}")));
        }
        if let Some(order) = &self.order {
            pairs.push((
                "order".to_string(),
                format!("{}.{}", order.column, order.direction.as_str()),
            ));
        }
        pairs
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.table.trim().is_empty() {
            return Err("table name must not be empty".into());
        }
        if self.table.contains(['/', '?', '#']) {
            return Err(format!(
                "table name `{}` is not a plain identifier",
                self.table
            ));
        }
        if let Some((column, _)) = &self.filter
            && matches!(column.as_str(), "" | "select" | "order")
        {
            return Err(format!("cannot filter on column `{column}`"));
        }
        Ok(())
    }
}
