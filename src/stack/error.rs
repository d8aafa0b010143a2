use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for stack operations.
/// Both variants signal misuse of the stack API by the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    /// Error when popping or peeking an empty stack.
    #[error("Stack is empty")]
    EmptyStack,

    /// Error when the k-th position is zero or past the bottom of the stack.
    #[error("Invalid k-th position {k} for a stack of {size} item(s)")]
    InvalidPosition { k: usize, size: usize },
}
