//! Result rendering for the command line.

use std::fmt;

use prep_model::Value;
use serde::Serialize;

/// What a command produced: a sequence or a single string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    List(Vec<Value>),
    Text(String),
}

impl CommandOutput {
    pub fn floats(values: Vec<f64>) -> Self {
        Self::List(values.into_iter().map(Value::Float).collect())
    }

    pub fn integers(values: Vec<i64>) -> Self {
        Self::List(values.into_iter().map(Value::Int).collect())
    }

    pub fn words(values: Vec<String>) -> Self {
        Self::List(values.into_iter().map(Value::Text).collect())
    }

    /// Number of elements for a list, characters for text.
    pub fn len(&self) -> usize {
        match self {
            Self::List(values) => values.len(),
            Self::Text(text) => text.chars().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lists render bracketed and comma-separated; text renders as-is.
impl fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(values) => {
                write!(f, "[")?;
                for (pos, value) in values.iter().enumerate() {
                    if pos > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            }
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

/// Result output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Renders a command result in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(output: &CommandOutput, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(output.to_string()),
        OutputFormat::Json => serde_json::to_string(output),
    }
}
