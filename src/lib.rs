pub mod css;
pub mod diagnostic;
pub mod generator;
pub mod mapping;
pub mod theme;

pub use css::{CssOutput, Declaration, MediaBlock, RuleBody, escape_selector, render_rule};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use generator::{
    GenerateError, GeneratorConfig, RegisteredUtilities, Utility, UtilityRegistry, UtilityRule,
    emit_css, generate, resolve_breakpoint_value, reverse_search, sorted_screens,
};
pub use mapping::{PropertyMapping, font_size_mapping, margin_mapping, padding_mapping};
pub use theme::{
    DEFAULT_BREAKPOINT, SPACING_NAMESPACE, ScaleTable, TEXT_NAMESPACE, Theme, ThemeError,
    ValueTable,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildResult {
    pub css: CssOutput,
    pub utilities: RegisteredUtilities,
    pub diagnostics: Vec<Diagnostic>,
}

fn missing_default(
    namespace: &str,
    config: &GeneratorConfig,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<(), GenerateError> {
    let diagnostic = Diagnostic::missing_default_values(namespace);
    if config.strict {
        return Err(GenerateError::from_diagnostics(namespace, vec![diagnostic]));
    }
    diagnostics.push(diagnostic);
    Ok(())
}

pub fn register_responsive_utilities(
    theme: &Theme,
    config: &GeneratorConfig,
    registry: &mut dyn UtilityRegistry,
) -> Result<Vec<Diagnostic>, GenerateError> {
    let mut diagnostics = Vec::new();

    if theme.is_active(SPACING_NAMESPACE) {
        match theme.default_values(SPACING_NAMESPACE) {
            Some(values) => {
                diagnostics.extend(generate(
                    &padding_mapping(),
                    SPACING_NAMESPACE,
                    values,
                    theme,
                    config,
                    registry,
                )?);
                diagnostics.extend(generate(
                    &margin_mapping(),
                    SPACING_NAMESPACE,
                    values,
                    theme,
                    config,
                    registry,
                )?);
            }
            None => missing_default(SPACING_NAMESPACE, config, &mut diagnostics)?,
        }
    }

    if theme.is_active(TEXT_NAMESPACE) {
        match theme.default_values(TEXT_NAMESPACE) {
            Some(values) => {
                diagnostics.extend(generate(
                    &font_size_mapping(),
                    TEXT_NAMESPACE,
                    values,
                    theme,
                    config,
                    registry,
                )?);
            }
            None => missing_default(TEXT_NAMESPACE, config, &mut diagnostics)?,
        }
    }

    Ok(diagnostics)
}

pub fn build(theme: &Theme, config: &GeneratorConfig) -> Result<BuildResult, GenerateError> {
    let mut utilities = RegisteredUtilities::new();
    let diagnostics = register_responsive_utilities(theme, config, &mut utilities)?;
    let css = emit_css(&utilities.utilities, config);
    Ok(BuildResult {
        css,
        utilities,
        diagnostics,
    })
}
