pub mod category;
pub mod transaction;

pub use category::{Categorization, Category};
pub use transaction::{ParsedTransaction, PaymentMode};
