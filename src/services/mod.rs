// Service exports
pub mod feedback;
pub mod store;

pub use feedback::{SwipeFeedback, DEFAULT_RESET_DELAY_MS};
pub use store::{SessionManager, StoreError};
