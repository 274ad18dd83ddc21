use std::fmt;

use crate::handle::HandleId;

/// Misuse of the handle model by the host integration.
///
/// None of these are reachable through the drag state machine; they guard
/// direct calls into [`crate::handle_set::HandleSet`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HandleError {
    /// No handle with this id is in the set.
    UnknownHandle(HandleId),
    /// The handle has no linked partner, so removing it would break pairing.
    Unpaired(HandleId),
    /// A handle cannot be linked to itself.
    SelfLink(HandleId),
    /// Links always join one color handle and one alpha handle.
    KindMismatch(HandleId, HandleId),
}

impl fmt::Display for HandleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandleError::UnknownHandle(id) => write!(f, "unknown handle {id}"),
            HandleError::Unpaired(id) => write!(f, "handle {id} has no linked partner"),
            HandleError::SelfLink(id) => write!(f, "handle {id} cannot be linked to itself"),
            HandleError::KindMismatch(a, b) => {
                write!(f, "handles {a} and {b} are not a color/alpha pair")
            }
        }
    }
}

impl std::error::Error for HandleError {}

/// An export format name that is not recognized.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FormatError {
    pub name: String,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown export format `{}` (expected `css` or `tuple`)", self.name)
    }
}

impl std::error::Error for FormatError {}
