//! Parallel engine built on the `rayon` fork-join runtime.

pub(crate) mod partition;
pub(crate) mod quick_sort;
