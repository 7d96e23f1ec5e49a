//! CSV ingestion: schema detection, row coercion, file drivers.

pub mod coerce;
pub mod mixed;
pub mod record;
pub mod reader;
pub mod schema;

pub use coerce::{coerce_row, parse_flag, Columns};
pub use mixed::{MixedMetric, MixedRecord};
pub use record::{BenchmarkRecord, Metric};
pub use reader::{load_mixed_records, load_records};
pub use schema::{detect_layout, Layout};
