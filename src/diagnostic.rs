use crate::theme::DEFAULT_BREAKPOINT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    UnresolvableAlias,
    MissingBreakpointTable,
    MissingBreakpointValue,
    MissingDefaultValues,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub namespace: String,
    pub breakpoint: String,
    pub message: String,
}

impl Diagnostic {
    pub fn unresolvable_alias(namespace: &str, breakpoint: &str, value: &str) -> Self {
        Self {
            kind: DiagnosticKind::UnresolvableAlias,
            namespace: namespace.to_string(),
            breakpoint: breakpoint.to_string(),
            message: format!(
                "no alias in the '{}' value table matches value '{}'",
                namespace, value
            ),
        }
    }

    pub fn missing_breakpoint_table(namespace: &str, breakpoint: &str) -> Self {
        Self {
            kind: DiagnosticKind::MissingBreakpointTable,
            namespace: namespace.to_string(),
            breakpoint: breakpoint.to_string(),
            message: format!("'{}.{}' is not defined in the theme", namespace, breakpoint),
        }
    }

    pub fn missing_breakpoint_value(namespace: &str, breakpoint: &str, alias: &str) -> Self {
        Self {
            kind: DiagnosticKind::MissingBreakpointValue,
            namespace: namespace.to_string(),
            breakpoint: breakpoint.to_string(),
            message: format!(
                "'{}.{}' has no value for alias '{}'",
                namespace, breakpoint, alias
            ),
        }
    }

    pub fn missing_default_values(namespace: &str) -> Self {
        Self {
            kind: DiagnosticKind::MissingDefaultValues,
            namespace: namespace.to_string(),
            breakpoint: DEFAULT_BREAKPOINT.to_string(),
            message: format!(
                "'{}' is configured but defines no '{}' value table",
                namespace, DEFAULT_BREAKPOINT
            ),
        }
    }
}
