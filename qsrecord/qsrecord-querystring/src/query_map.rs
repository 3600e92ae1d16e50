use std::collections::HashMap;

use crate::decoder::RECORD_KEY_FIELD;

/// Parameters parsed from a query-string payload.
///
/// Names are lower-cased; values are kept raw (still percent-encoded). The
/// record key is held apart from payload values so it can be bound verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParamMap<'a> {
    params: HashMap<String, &'a str>,
    record_key: Option<&'a str>,
}

impl<'a> QueryParamMap<'a> {
    /// Parse `name=value` pairs separated by `&`.
    ///
    /// Each pair is split on its first `=`. Pairs without `=`, with an empty
    /// name, or with an empty value are dropped. A repeated name keeps its
    /// last value.
    pub fn parse(payload: &'a str) -> Self {
        let params = payload
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .filter(|(name, value)| !name.is_empty() && !value.is_empty())
            .map(|(name, value)| (name.to_lowercase(), value))
            .collect();
        Self {
            params,
            record_key: None,
        }
    }

    /// Bind the record key under the reserved `key` name, replacing any
    /// payload-supplied `key` parameter.
    pub fn insert_record_key(&mut self, key: &'a str) {
        self.params.remove(RECORD_KEY_FIELD);
        self.record_key = Some(key);
    }

    pub fn record_key(&self) -> Option<&'a str> {
        self.record_key
    }

    /// Look up `name`, resolving the reserved `key` name to the record key
    /// when one has been inserted.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        match self.record_key {
            Some(key) if name == RECORD_KEY_FIELD => Some(key),
            _ => self.params.get(name).copied(),
        }
    }

    pub fn len(&self) -> usize {
        self.params.len() + usize::from(self.record_key.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &'a str)> {
        self.params
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .chain(self.record_key.map(|key| (RECORD_KEY_FIELD, key)))
    }
}
