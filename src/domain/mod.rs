pub mod error;
pub mod translate;
pub mod variables;

pub use error::AppError;
pub use translate::translate;
pub use variables::VariableMap;
