pub mod decimal;
pub mod party;
pub mod record;

pub use decimal::{lenient_f64, lenient_f64_opt, parse_decimal};
pub use party::{Party, PartyPayload};
pub use record::{input_text, Record};
