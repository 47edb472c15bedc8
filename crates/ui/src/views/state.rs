#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    UnknownCategory(String),
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ViewError::UnknownCategory(name) => format!("La categoría «{name}» no existe."),
        }
    }
}
