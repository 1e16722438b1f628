pub mod format;
pub mod number_format;
pub mod range;
pub mod step;
pub mod temporal;
pub mod types;

pub use format::FormatAdapter;
pub use number_format::{NumberFormat, NumberFormatConfig};
pub use range::{CoordinateTable, RangeBuild, RangeEntry, RangePoint, build_range};
pub use step::{CalendarUnit, DAY_MS, StepSetting, StepSpec, WEEK_MS};
pub use temporal::{DEFAULT_DATE_FORMAT, TemporalConverter};
pub use types::{Domain, DomainKind, HandleCount, Handles};
