//! Query-grouped datasets for metric evaluation.
//!
//! Loading files is left to callers; this module only provides an in-memory
//! [`QueryDataset`] that satisfies the [`RankingDataset`] contract.
//!
//! ```rust
//! use rankeval_rust::dataset::QueryDataset;
//! use rankeval_rust::RankingDataset;
//! use ndarray::array;
//!
//! # fn main() -> rankeval_rust::Result<()> {
//! let dataset = QueryDataset::from_query_sizes(array![3.0, 0.0, 1.0, 1.0, 1.0], &[3, 2])?;
//! assert_eq!(dataset.num_queries(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! [`RankingDataset`]: crate::core::traits::RankingDataset

#[allow(clippy::module_inception)]
pub mod dataset;

pub use dataset::QueryDataset;

/// Summary statistics over the query structure of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryStatistics {
    /// Number of queries
    pub num_queries: usize,
    /// Number of instances
    pub num_instances: usize,
    /// Smallest query size
    pub min_query_size: usize,
    /// Largest query size
    pub max_query_size: usize,
    /// Number of queries without any instance
    pub num_empty_queries: usize,
}

/// Compute query-size statistics for any dataset.
pub fn query_statistics(dataset: &dyn crate::core::traits::RankingDataset) -> QueryStatistics {
    let sizes: Vec<usize> = dataset
        .query_ranges()
        .into_iter()
        .map(|r| r.end - r.start)
        .collect();

    QueryStatistics {
        num_queries: sizes.len(),
        num_instances: dataset.num_instances(),
        min_query_size: sizes.iter().copied().min().unwrap_or(0),
        max_query_size: sizes.iter().copied().max().unwrap_or(0),
        num_empty_queries: sizes.iter().filter(|&&s| s == 0).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_query_statistics() {
        let dataset =
            QueryDataset::from_query_sizes(array![1.0, 0.0, 2.0, 1.0, 0.0, 0.0], &[3, 0, 1, 2])
                .unwrap();
        let stats = query_statistics(&dataset);
        assert_eq!(stats.num_queries, 4);
        assert_eq!(stats.num_instances, 6);
        assert_eq!(stats.min_query_size, 0);
        assert_eq!(stats.max_query_size, 3);
        assert_eq!(stats.num_empty_queries, 1);
    }
}
