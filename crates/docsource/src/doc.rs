mod document;
pub use document::Document;

mod value;
pub use value::Value;
