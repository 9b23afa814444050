//! Depth statistics over randomly built trees. Since nothing rebalances an [`OrderedTree`], its
//! depth depends only on insertion order, and sampling many random orders shows how far from
//! `lg N` a typical tree ends up.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::stats::{sample_depths, Sampling};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let sampling = Sampling { trees: 50, ..Sampling::default() };
//! let stats = sample_depths(&sampling, &mut StdRng::seed_from_u64(7)).unwrap();
//!
//! assert_eq!(stats.trees, 50);
//! assert!(stats.min as f64 <= stats.mean && stats.mean <= stats.max as f64);
//! ```

use std::fmt;

use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::tree::OrderedTree;

/// Ways a sampling run can be misconfigured.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// Statistics over zero trees have no minimum or maximum.
    #[error("at least one tree must be sampled")]
    NoTrees,
    /// Values are drawn from `0..max_value`, which is empty when `max_value` is 0.
    #[error("values must be drawn from a non-empty range")]
    EmptyRange,
}

/// How many random trees to build and what to fill them with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sampling {
    /// Number of trees to build.
    pub trees: usize,
    /// Number of random draws inserted into each tree. Repeated draws are only stored once, so a
    /// tree can end up with fewer values than this.
    pub values_per_tree: usize,
    /// Values are drawn uniformly from `0..max_value`.
    pub max_value: u32,
}

impl Default for Sampling {
    fn default() -> Self {
        Self {
            trees: 1000,
            values_per_tree: 20,
            max_value: 100,
        }
    }
}

/// Summary of the depths seen in a sampling run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthStats {
    /// Number of trees the statistics cover.
    pub trees: usize,
    /// Depth of the shallowest tree.
    pub min: usize,
    /// Depth of the deepest tree.
    pub max: usize,
    /// Average depth over all trees.
    pub mean: f64,
}

impl fmt::Display for DepthStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Maximum Depth: {}", self.max)?;
        writeln!(f, "Minimum Depth: {}", self.min)?;
        write!(f, "Average Depth: {}", self.mean)
    }
}

/// Builds a tree from `values` draws out of `0..max_value`, inserted in the order drawn.
pub fn random_tree<R>(
    values: usize,
    max_value: u32,
    rng: &mut R,
) -> Result<OrderedTree<u32>, StatsError>
where
    R: Rng + ?Sized,
{
    if max_value == 0 {
        return Err(StatsError::EmptyRange);
    }
    Ok((0..values).map(|_| rng.random_range(0..max_value)).collect())
}

/// Builds `sampling.trees` random trees and summarizes their depths.
pub fn sample_depths<R>(sampling: &Sampling, rng: &mut R) -> Result<DepthStats, StatsError>
where
    R: Rng + ?Sized,
{
    if sampling.trees == 0 {
        return Err(StatsError::NoTrees);
    }

    let mut min = usize::MAX;
    let mut max = 0;
    let mut total = 0;
    for _ in 0..sampling.trees {
        let depth = random_tree(sampling.values_per_tree, sampling.max_value, rng)?.depth();
        min = min.min(depth);
        max = max.max(depth);
        total += depth;
    }

    let stats = DepthStats {
        trees: sampling.trees,
        min,
        max,
        mean: total as f64 / sampling.trees as f64,
    };
    debug!("sampled {:?}: {:?}", sampling, stats);
    Ok(stats)
}
