use crate::parsing::Dialect;

/// Host language identifier of a document, e.g. `typescriptreact`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageId(String);

impl LanguageId {
    pub const JAVASCRIPT_REACT: &'static str = "javascriptreact";
    pub const TYPESCRIPT_REACT: &'static str = "typescriptreact";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn javascript_react() -> Self {
        Self::new(Self::JAVASCRIPT_REACT)
    }

    pub fn typescript_react() -> Self {
        Self::new(Self::TYPESCRIPT_REACT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Dialect to try first when parsing documents of this language.
    pub fn dialect_hint(&self) -> Option<Dialect> {
        match self.0.as_str() {
            "typescriptreact" | "typescript" => Some(Dialect::Tsx),
            "javascriptreact" | "javascript" => Some(Dialect::Jsx),
            _ => None,
        }
    }
}

impl std::fmt::Display for LanguageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
