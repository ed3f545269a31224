mod generated_columns;
pub use generated_columns::{GeneratedColumns, Validation};

mod raw;
pub use raw::RawSourceGen;

mod update;
pub use update::UpdateSourceGen;
