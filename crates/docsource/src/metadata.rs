mod column_ident;
pub use column_ident::ColumnIdent;

mod functions;
pub use functions::Functions;

mod generated_column;
pub use generated_column::GeneratedColumn;

mod scalar;
pub use scalar::Scalar;
