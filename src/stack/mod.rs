// error module
mod error;
// dl_stack module
mod dl_stack;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the stack module.
//─────────────────────────────────────────────────────────────────────────────
pub use dl_stack::{DLStack, Iter};
pub use error::StackError;
