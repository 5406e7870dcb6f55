pub mod lookup;
pub mod reference_sets;
pub mod series_cleaner;

pub use lookup::{lookup_temperature, LookupOutcome};
pub use reference_sets::ReferenceSets;
pub use series_cleaner::clean;
