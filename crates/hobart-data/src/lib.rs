#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod document;
pub mod error;
pub mod fact;
pub mod flatten;
pub mod group;

pub use document::{FactDocument, RawNode, SectorAverages};
pub use error::{DataError, Result};
pub use fact::{Fact, local_name};
pub use flatten::{flatten, flatten_nodes, flatten_recursive};
pub use group::{
    ContextGroup, FactColumn, StatementCategory, filter_by_category, group_by_context,
    natural_cmp, search, sort_facts,
};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
