// src/application/validation/input.rs
use serde_json::{Map, Value};

/// Raw request input split by source.
///
/// Field lookup is fixed: the body wins over the query string, which wins over
/// path parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputBag {
    body: Map<String, Value>,
    query: Map<String, Value>,
    params: Map<String, Value>,
}

impl InputBag {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_body(mut self, body: Map<String, Value>) -> Self {
        self.body = body;
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: Map<String, Value>) -> Self {
        self.query = query;
        self
    }

    #[must_use]
    pub fn with_params(mut self, params: Map<String, Value>) -> Self {
        self.params = params;
        self
    }

    pub fn lookup(&self, field: &str) -> Option<&Value> {
        self.body
            .get(field)
            .or_else(|| self.query.get(field))
            .or_else(|| self.params.get(field))
    }

    pub const fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    pub const fn query(&self) -> &Map<String, Value> {
        &self.query
    }

    pub const fn params(&self) -> &Map<String, Value> {
        &self.params
    }
}

/// Collect string pairs (form fields, query parameters, path captures) into a
/// field map. Repeated keys keep the last value.
pub fn fields_from_pairs<I, K, V>(pairs: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), Value::String(value.into())))
        .collect()
}
