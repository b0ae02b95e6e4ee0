#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while inspecting objects.
pub enum SetError {
    /// Tried to view an atom as a set.
    NotASet {
        /// The name of the atom.
        name: String,
    },
}

impl std::fmt::Display for SetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotASet { name } => {
                write!(f, "Type error: '{name}' is an atom and cannot be viewed as a set.")
            },
        }
    }
}

impl std::error::Error for SetError {}
