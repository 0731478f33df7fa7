//! Catalog Filter/Aggregate Engine
//!
//! One parametrized filter shared by every catalog view (products, stock,
//! movements, QR generator, reports). A view describes its predicates as a
//! [`FilterSpec`], the engine returns the matching records in their original
//! order plus an [`AggregateResult`]. Evaluation is pure: records are only
//! borrowed and the same inputs always give the same output.

pub mod aggregate;
pub mod engine;
pub mod filter_spec;
mod predicate;
pub mod record;
pub mod response;
pub mod schema;
pub mod value;

pub use aggregate::{margin_percent, round_to, AggregateResult, AggregateSpec, BucketCounts, MarginSpec};
pub use engine::{evaluate, evaluate_with, filter, FilterOutcome};
pub use filter_spec::{FilterSpec, RangeBound, RangeFilter, ALL};
pub use record::Record;
pub use response::FilterResponse;
pub use schema::{parse_date, FieldDef, FieldKind, RecordSchema};
pub use value::FieldValue;
