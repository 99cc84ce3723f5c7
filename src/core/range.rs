//! Cutting an inclusive `start..=end` window out of a labelled series.

use tracing::{debug, warn};

use crate::core::error::SelectError;

/// What to do with a boundary label that is not in the series.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum BoundPolicy {
    /// Fail with `InvalidStartDate` / `InvalidEndDate`.
    #[default]
    Strict,
    /// Log a warning and treat the bound as absent.
    Lenient,
}

/// Borrowed, contiguous slice of a series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection<'a> {
    pub labels: &'a [String],
    pub values: &'a [f64],
}

impl Selection<'_> {
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
}

/// Select the labels/values between `start` and `end`, both inclusive.
///
/// * only `start` → from `start` to the end of the series
/// * only `end` → from the beginning through `end`
/// * neither → everything
///
/// When both resolve, `start` has to sit strictly before `end`.
pub fn select<'a>(
    labels: &'a [String],
    values: &'a [f64],
    start: Option<&str>,
    end: Option<&str>,
    policy: BoundPolicy,
) -> Result<Selection<'a>, SelectError> {
    if labels.len() != values.len() {
        return Err(SelectError::LengthMismatch {
            labels: labels.len(),
            values: values.len(),
        });
    }

    let start_index = resolve(labels, start, policy, SelectError::InvalidStartDate)?;
    let end_index = resolve(labels, end, policy, SelectError::InvalidEndDate)?;

    if let (Some(s), Some(e)) = (start_index, end_index) {
        if s >= e {
            return Err(SelectError::InvertedRange {
                start: labels[s].clone(),
                end: labels[e].clone(),
                start_index: s,
                end_index: e,
            });
        }
    }

    let lo = start_index.unwrap_or(0);
    let hi = end_index.map_or(labels.len(), |e| e + 1);
    debug!(lo, hi, total = labels.len(), "range selected");

    Ok(Selection {
        labels: &labels[lo..hi],
        values: &values[lo..hi],
    })
}

/// First index of `wanted`, honouring the policy on a miss.
fn resolve(
    labels: &[String],
    wanted: Option<&str>,
    policy: BoundPolicy,
    missing: fn(String) -> SelectError,
) -> Result<Option<usize>, SelectError> {
    let Some(wanted) = wanted else {
        return Ok(None);
    };
    match labels.iter().position(|l| l == wanted) {
        Some(i) => Ok(Some(i)),
        None => match policy {
            BoundPolicy::Strict => Err(missing(wanted.to_owned())),
            BoundPolicy::Lenient => {
                warn!(label = wanted, "{}; ignoring this bound", missing(wanted.to_owned()));
                Ok(None)
            }
        },
    }
}
