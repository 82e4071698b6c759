use rusqlite::ToSql;

/// Conjunctive WHERE clause with positionally bound values.
///
/// Clauses carry `?` placeholders in push order; values are never spliced
/// into the SQL text.
#[derive(Default)]
pub(crate) struct Predicates {
    clauses: Vec<&'static str>,
    params: Vec<Box<dyn ToSql>>,
}

impl Predicates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clause without a bound value
    pub fn always(&mut self, clause: &'static str) -> &mut Self {
        self.clauses.push(clause);
        self
    }

    pub fn bind<T: ToSql + 'static>(&mut self, clause: &'static str, value: T) -> &mut Self {
        self.clauses.push(clause);
        self.params.push(Box::new(value));
        self
    }

    /// Bind only when a value is present; absent filters impose nothing
    pub fn bind_opt<T: ToSql + 'static>(
        &mut self,
        clause: &'static str,
        value: Option<T>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.bind(clause, value);
        }
        self
    }

    pub fn where_clause(&self) -> String {
        if self.clauses.is_empty() {
            "1 = 1".to_string()
        } else {
            self.clauses.join(" AND ")
        }
    }

    pub fn params(&self) -> Vec<&dyn ToSql> {
        self.params.iter().map(|p| p.as_ref()).collect()
    }
}
