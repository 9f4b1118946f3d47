#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod concepts;
pub mod matcher;
pub mod metric;
pub mod ratios;
pub mod regional;
pub mod registry;
pub mod resolve;

pub use matcher::{ConceptMatcher, ExactMatcher, MatcherKind, PrefixedMatcher, SubstringMatcher};
pub use metric::{MetricSet, MetricValue, safe_div};
pub use ratios::{Ratio, compute_ratios, compute_ratios_with};
pub use regional::{RegionalMetric, compute_regional_metrics, compute_regional_metrics_with};
pub use registry::{MetricCategory, MetricInfo, available_metrics, get_metric_info, metrics_by_category};
pub use resolve::{ConceptResolver, Resolved, parse_value, resolve};
