use indexmap::IndexMap;
use std::cmp::Ordering;
use std::fmt;

use crate::css::{CssOutput, Declaration, MediaBlock, RuleBody, render_rule};
use crate::diagnostic::Diagnostic;
use crate::mapping::PropertyMapping;
use crate::theme::{DEFAULT_BREAKPOINT, ScaleTable, Theme, ValueTable};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratorConfig {
    pub minify: bool,
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilityRule {
    pub class_name: String,
    pub alias: String,
    pub body: RuleBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utility {
    pub prefix: String,
    pub values: ValueTable,
    pub rules: Vec<UtilityRule>,
}

pub trait UtilityRegistry {
    fn register(&mut self, utility: Utility);
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegisteredUtilities {
    pub utilities: Vec<Utility>,
}

impl RegisteredUtilities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.utilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utilities.is_empty()
    }
}

impl UtilityRegistry for RegisteredUtilities {
    fn register(&mut self, utility: Utility) {
        self.utilities.push(utility);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateError {
    pub message: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerateError {
    pub fn from_diagnostics(namespace: &str, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            message: format!(
                "failed to generate '{}' utilities: {} diagnostic(s)",
                namespace,
                diagnostics.len()
            ),
            diagnostics,
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for GenerateError {}

fn leading_magnitude(raw: &str) -> Option<f64> {
    let value = raw.trim_start();
    let bytes = value.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    value[..end].parse::<f64>().ok()
}

fn compare_widths(a: &str, b: &str) -> Ordering {
    match (leading_magnitude(a), leading_magnitude(b)) {
        (Some(a_value), Some(b_value)) => {
            a_value.partial_cmp(&b_value).unwrap_or(Ordering::Equal)
        }
        _ => Ordering::Equal,
    }
}

pub fn sorted_screens(screens: &IndexMap<String, String>) -> Vec<(&str, &str)> {
    let mut entries = screens
        .iter()
        .map(|(name, width)| (name.as_str(), width.as_str()))
        .collect::<Vec<_>>();
    entries.sort_by(|(_, a), (_, b)| compare_widths(a, b));
    entries
}

pub fn reverse_search<'a>(value: &str, table: &'a ValueTable) -> Option<&'a str> {
    table
        .iter()
        .find(|(_, raw)| raw.as_str() == value)
        .map(|(alias, _)| alias.as_str())
}

pub fn resolve_breakpoint_value<'a>(
    scale: &'a ScaleTable,
    values: &ValueTable,
    namespace: &str,
    breakpoint: &str,
    value: &str,
) -> Result<&'a str, Diagnostic> {
    let Some(alias) = reverse_search(value, values) else {
        return Err(Diagnostic::unresolvable_alias(namespace, breakpoint, value));
    };
    let Some(table) = scale.get(breakpoint) else {
        return Err(Diagnostic::missing_breakpoint_table(namespace, breakpoint));
    };
    match table.get(alias) {
        Some(resolved) => Ok(resolved.as_str()),
        None => Err(Diagnostic::missing_breakpoint_value(
            namespace, breakpoint, alias,
        )),
    }
}

fn lookup_alias<'a>(
    table: Option<&'a ValueTable>,
    alias: &str,
    namespace: &str,
    breakpoint: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<&'a str> {
    let table = table?;
    match table.get(alias) {
        Some(value) => Some(value.as_str()),
        None => {
            diagnostics.push(Diagnostic::missing_breakpoint_value(
                namespace, breakpoint, alias,
            ));
            None
        }
    }
}

fn class_name_for(prefix: &str, alias: &str) -> String {
    if alias == DEFAULT_BREAKPOINT {
        prefix.to_string()
    } else {
        format!("{}-{}", prefix, alias)
    }
}

struct ResolvedAlias<'a> {
    alias: &'a str,
    default_value: Option<&'a str>,
    screen_values: Vec<Option<&'a str>>,
}

pub fn generate(
    mapping: &PropertyMapping,
    namespace: &str,
    values: &ValueTable,
    theme: &Theme,
    config: &GeneratorConfig,
    registry: &mut dyn UtilityRegistry,
) -> Result<Vec<Diagnostic>, GenerateError> {
    let scale = theme.scale(namespace);
    let screens = sorted_screens(&theme.screens);
    let media_screens = screens
        .iter()
        .filter(|(name, _)| *name != DEFAULT_BREAKPOINT)
        .copied()
        .collect::<Vec<_>>();

    let mut diagnostics = Vec::new();
    let default_table = scale.and_then(|tables| tables.get(DEFAULT_BREAKPOINT));
    let mut screen_tables = Vec::with_capacity(media_screens.len());
    for (name, width) in &media_screens {
        screen_tables.push((*name, *width, scale.and_then(|tables| tables.get(*name))));
    }

    if !values.is_empty() {
        if default_table.is_none() {
            diagnostics.push(Diagnostic::missing_breakpoint_table(
                namespace,
                DEFAULT_BREAKPOINT,
            ));
        }
        for (name, _, table) in &screen_tables {
            if table.is_none() {
                diagnostics.push(Diagnostic::missing_breakpoint_table(namespace, name));
            }
        }
    }

    let mut resolved = Vec::with_capacity(values.len());
    for (alias, raw) in values {
        let resolved_alias = reverse_search(raw, values).unwrap_or(alias.as_str());
        let default_value = lookup_alias(
            default_table,
            resolved_alias,
            namespace,
            DEFAULT_BREAKPOINT,
            &mut diagnostics,
        );
        let mut screen_values = Vec::with_capacity(screen_tables.len());
        for (name, _, table) in &screen_tables {
            screen_values.push(lookup_alias(
                *table,
                resolved_alias,
                namespace,
                name,
                &mut diagnostics,
            ));
        }
        resolved.push(ResolvedAlias {
            alias: alias.as_str(),
            default_value,
            screen_values,
        });
    }

    let mut utilities = Vec::with_capacity(mapping.len() * 2);
    for (prefix, properties) in mapping.entries() {
        let mut default_rules = Vec::with_capacity(resolved.len());
        let mut responsive_rules = Vec::with_capacity(resolved.len());
        for entry in &resolved {
            let class_name = class_name_for(prefix, entry.alias);

            let mut declarations = Vec::new();
            if let Some(value) = entry.default_value {
                for property in properties {
                    declarations.push(Declaration::new(property, value));
                }
            }
            default_rules.push(UtilityRule {
                class_name: class_name.clone(),
                alias: entry.alias.to_string(),
                body: RuleBody::Declarations(declarations),
            });

            let mut blocks = Vec::new();
            for ((_, width, _), value) in screen_tables.iter().zip(&entry.screen_values) {
                let Some(value) = value else {
                    continue;
                };
                let declarations = properties
                    .iter()
                    .map(|property| Declaration::new(property, value))
                    .collect();
                blocks.push(MediaBlock {
                    condition: format!("@media (min-width: {})", width),
                    declarations,
                });
            }
            responsive_rules.push(UtilityRule {
                class_name,
                alias: entry.alias.to_string(),
                body: RuleBody::MediaBlocks(blocks),
            });
        }
        utilities.push(Utility {
            prefix: prefix.clone(),
            values: values.clone(),
            rules: default_rules,
        });
        utilities.push(Utility {
            prefix: prefix.clone(),
            values: values.clone(),
            rules: responsive_rules,
        });
    }

    if config.strict && !diagnostics.is_empty() {
        return Err(GenerateError::from_diagnostics(namespace, diagnostics));
    }
    for utility in utilities {
        registry.register(utility);
    }
    Ok(diagnostics)
}

pub fn emit_css(utilities: &[Utility], config: &GeneratorConfig) -> CssOutput {
    let mut rules = Vec::new();
    for utility in utilities {
        for rule in &utility.rules {
            if let Some(css) = render_rule(&rule.class_name, &rule.body, config.minify) {
                rules.push(css);
            }
        }
    }
    let css = if config.minify {
        rules.join("")
    } else {
        rules.join("\n")
    };
    CssOutput::new(css)
}
