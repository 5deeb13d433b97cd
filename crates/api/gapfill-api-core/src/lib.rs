//! gapfill-api-core: ordered sequence model, value paths and coercion (engine-agnostic)

pub mod coercion;
pub mod json;
pub mod key;
pub mod sequence;
pub mod value;
pub mod value_path;

pub use coercion::Number;
pub use key::Key;
pub use sequence::Sequence;
pub use value::{Value, ValueKind};
pub use value_path::ValuePath;
