use std::fmt;

/// Typed failure of any text-to-value step.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("'{input}' is not a number")]
    InvalidNumber { input: String },
    #[error("Invalid JSON: {detail}")]
    InvalidJson { detail: String },
    #[error("Token could not be decoded")]
    InvalidToken,
    #[error("Weight data has {} schema violation(s): {}", issues.len(), join_issues(issues))]
    SchemaViolation { issues: Vec<SchemaIssue> },
}

/// JSON shape an element was expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Array,
    Object,
    String,
    Number,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Array => "array",
            Self::Object => "object",
            Self::String => "string",
            Self::Number => "number",
        };
        f.write_str(name)
    }
}

/// One violated field, e.g. `$[1].weight: expected number, found string`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    pub path: String,
    pub expected: Expected,
    pub found: &'static str,
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, found {}",
            self.path, self.expected, self.found
        )
    }
}

fn join_issues(issues: &[SchemaIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error from the session command script.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
}
