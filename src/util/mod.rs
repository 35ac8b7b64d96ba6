pub mod debounce;
pub mod sequence;
pub mod time;

pub use debounce::{DebounceTicket, Debouncer};
pub use sequence::{RequestSequence, RequestToken};
