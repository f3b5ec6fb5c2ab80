//! Query-grouped dataset structure for Pure Rust RankEval.
//!
//! A [`QueryDataset`] holds the flat relevance labels of every instance and
//! the offsets where each query starts. Feature vectors are not kept: metric
//! evaluation only ever looks at labels and the caller's predictions.

use crate::core::error::{RankEvalError, Result};
use crate::core::traits::RankingDataset;
use crate::core::types::*;

use ndarray::{Array1, ArrayView1};
use std::ops::Range;

/// In-memory dataset of relevance labels grouped into contiguous queries.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryDataset {
    /// Relevance labels (num_instances,)
    labels: Array1<Label>,
    /// Query boundaries, `num_queries + 1` entries from 0 to num_instances
    query_offsets: Vec<usize>,
    /// Query identifiers, when built from an id column
    query_ids: Option<Vec<QueryId>>,
}

impl QueryDataset {
    /// Create a dataset from labels and the number of instances per query.
    pub fn from_query_sizes(labels: Array1<Label>, sizes: &[usize]) -> Result<Self> {
        let mut query_offsets = Vec::with_capacity(sizes.len() + 1);
        let mut offset = 0usize;
        query_offsets.push(offset);
        for (q, &size) in sizes.iter().enumerate() {
            offset = offset.checked_add(size).ok_or_else(|| {
                crate::dataset_error!("query sizes overflow at query {} (size {})", q, size)
            })?;
            query_offsets.push(offset);
        }

        if offset != labels.len() {
            return Err(RankEvalError::shape_mismatch(
                format!("labels length: {}", labels.len()),
                format!("sum of query sizes: {}", offset),
            ));
        }

        Ok(Self {
            labels,
            query_offsets,
            query_ids: None,
        })
    }

    /// Create a dataset from labels and explicit query boundary offsets.
    ///
    /// `offsets` must start at 0, be non-decreasing and end at `labels.len()`.
    pub fn from_query_offsets(labels: Array1<Label>, offsets: Vec<usize>) -> Result<Self> {
        Self::validate_offsets(&offsets, labels.len())?;
        Ok(Self {
            labels,
            query_offsets: offsets,
            query_ids: None,
        })
    }

    /// Create a dataset from labels and a per-instance query id column.
    ///
    /// Every maximal run of equal consecutive ids becomes one query.
    pub fn from_query_ids(labels: Array1<Label>, ids: &ArrayView1<'_, QueryId>) -> Result<Self> {
        if ids.len() != labels.len() {
            return Err(RankEvalError::shape_mismatch(
                format!("labels length: {}", labels.len()),
                format!("query ids length: {}", ids.len()),
            ));
        }

        let mut query_offsets = vec![0];
        let mut query_ids = Vec::new();
        let mut current: Option<QueryId> = None;

        for (i, &id) in ids.iter().enumerate() {
            match current {
                Some(prev) if prev == id => {}
                Some(_) => {
                    query_offsets.push(i);
                    query_ids.push(id);
                    current = Some(id);
                }
                None => {
                    query_ids.push(id);
                    current = Some(id);
                }
            }
        }
        if !labels.is_empty() {
            query_offsets.push(labels.len());
        }

        Ok(Self {
            labels,
            query_offsets,
            query_ids: Some(query_ids),
        })
    }

    fn validate_offsets(offsets: &[usize], num_instances: usize) -> Result<()> {
        match offsets.first() {
            Some(0) => {}
            Some(&first) => {
                return Err(crate::dataset_error!(
                    "query offsets must start at 0, found {}",
                    first
                ))
            }
            None => return Err(crate::dataset_error!("query offsets must not be empty")),
        }

        if let Some(w) = offsets.windows(2).find(|w| w[1] < w[0]) {
            return Err(crate::dataset_error!(
                "query offsets must be non-decreasing, found {} after {}",
                w[1],
                w[0]
            ));
        }

        let last = offsets[offsets.len() - 1];
        if last != num_instances {
            return Err(RankEvalError::shape_mismatch(
                format!("last query offset: {}", num_instances),
                format!("{}", last),
            ));
        }

        Ok(())
    }

    /// Query boundary offsets (`num_queries + 1` entries).
    pub fn query_offsets(&self) -> &[usize] {
        &self.query_offsets
    }

    /// Query identifiers in query order, if the dataset was built from ids.
    pub fn query_ids(&self) -> Option<&[QueryId]> {
        self.query_ids.as_deref()
    }

    /// Number of instances in query `query`.
    pub fn query_size(&self, query: usize) -> usize {
        let range = self.query_range(query);
        range.end - range.start
    }

    /// Labels of one query.
    pub fn query_labels(&self, query: usize) -> ArrayView1<'_, Label> {
        let range = self.query_range(query);
        self.labels.slice(ndarray::s![range.start..range.end])
    }

    /// Whether the dataset holds no instances.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl RankingDataset for QueryDataset {
    fn labels(&self) -> ArrayView1<'_, Label> {
        self.labels.view()
    }

    fn num_queries(&self) -> usize {
        self.query_offsets.len().saturating_sub(1)
    }

    fn query_range(&self, query: usize) -> Range<usize> {
        self.query_offsets[query]..self.query_offsets[query + 1]
    }
}
