//! Error types for metric computation

use std::fmt;
use thiserror::Error;

/// The metrics this crate computes, used to tag failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Assortativity,
    ClusteringCoefficient,
    ShortestPath,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Assortativity => "assortativity",
            Metric::ClusteringCoefficient => "average clustering coefficient",
            Metric::ShortestPath => "average shortest path",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while computing a metric
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    /// The metric is mathematically undefined for this graph.
    /// Never reported as zero or NaN.
    #[error("{metric} is undefined: {reason}")]
    UndefinedMetric { metric: Metric, reason: String },

    /// A work or time budget ran out before the metric finished
    #[error("{metric} exceeded its resource budget: {reason}")]
    ResourceExhaustion { metric: Metric, reason: String },
}

impl MetricsError {
    pub fn undefined(metric: Metric, reason: impl Into<String>) -> Self {
        MetricsError::UndefinedMetric {
            metric,
            reason: reason.into(),
        }
    }

    pub fn exhausted(metric: Metric, reason: impl Into<String>) -> Self {
        MetricsError::ResourceExhaustion {
            metric,
            reason: reason.into(),
        }
    }

    /// Which metric failed
    pub fn metric(&self) -> Metric {
        match self {
            MetricsError::UndefinedMetric { metric, .. }
            | MetricsError::ResourceExhaustion { metric, .. } => *metric,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, MetricsError::UndefinedMetric { .. })
    }
}

pub type MetricsResult<T> = Result<T, MetricsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_names_failing_metric() {
        let err = MetricsError::undefined(Metric::Assortativity, "zero degree variance");
        assert_eq!(err.metric(), Metric::Assortativity);
        assert!(err.is_undefined());
        assert_eq!(
            err.to_string(),
            "assortativity is undefined: zero degree variance"
        );

        let err = MetricsError::exhausted(Metric::ShortestPath, "deadline passed");
        assert!(!err.is_undefined());
        assert_eq!(
            err.to_string(),
            "average shortest path exceeded its resource budget: deadline passed"
        );
    }
}
