pub mod question;
pub mod quiz;
pub use question::{Answer, Question};
pub use quiz::{IdKind, Quiz};
