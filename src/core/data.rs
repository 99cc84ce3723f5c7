//! The fetched series: ordered labels + values.

use indexmap::IndexMap;
use serde_json::Value;

use crate::core::{
    error::{DataError, SelectError},
    range::{BoundPolicy, Selection, select},
};

/// Decoded JSON object, in document order.
pub type RawDataset = IndexMap<String, Value>;

/// Ordered `(label, value)` pairs; order is assumed chronological.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl Series {
    /// Build from parallel pairs.
    pub fn from_pairs<L, I>(pairs: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, f64)>,
    {
        let (labels, values) = pairs.into_iter().map(|(l, v)| (l.into(), v)).unzip();
        Self { labels, values }
    }

    /// Coerce every entry of a decoded object into a number.
    ///
    /// JSON numbers are taken as-is; strings holding a number (`"12.5"`)
    /// are parsed. Anything else, or a non-finite result, is a [`DataError`].
    pub fn from_raw(raw: &RawDataset) -> Result<Self, DataError> {
        let mut labels = Vec::with_capacity(raw.len());
        let mut values = Vec::with_capacity(raw.len());
        for (label, v) in raw {
            values.push(coerce(label, v)?);
            labels.push(label.clone());
        }
        Ok(Self { labels, values })
    }

    /// Decode a JSON document straight into a series.
    pub fn from_json(text: &str) -> Result<Self, crate::core::error::PlotError> {
        let raw: RawDataset = serde_json::from_str(text)?;
        Ok(Self::from_raw(&raw)?)
    }

    #[inline]
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Inclusive `start..=end` window, see [`select`].
    pub fn select(
        &self,
        start: Option<&str>,
        end: Option<&str>,
        policy: BoundPolicy,
    ) -> Result<Selection<'_>, SelectError> {
        select(&self.labels, &self.values, start, end, policy)
    }
}

fn coerce(label: &str, v: &Value) -> Result<f64, DataError> {
    let bad = || DataError {
        label: label.to_owned(),
        text: v.to_string(),
    };
    let n = match v {
        Value::Number(n) => n.as_f64().ok_or_else(bad)?,
        Value::String(s) => lexical_core::parse::<f64>(s.trim().as_bytes()).map_err(|_| bad())?,
        _ => return Err(bad()),
    };
    if n.is_finite() { Ok(n) } else { Err(bad()) }
}
