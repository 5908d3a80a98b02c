use std::fmt;
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: &str, value: &str) -> Self {
        Self {
            property: property.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaBlock {
    pub condition: String,
    pub declarations: Vec<Declaration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleBody {
    Declarations(Vec<Declaration>),
    MediaBlocks(Vec<MediaBlock>),
}

impl RuleBody {
    pub fn is_empty(&self) -> bool {
        match self {
            RuleBody::Declarations(declarations) => declarations.is_empty(),
            RuleBody::MediaBlocks(blocks) => {
                blocks.iter().all(|block| block.declarations.is_empty())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssOutput(String);

impl CssOutput {
    pub fn new(css: String) -> Self {
        Self(css)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for CssOutput {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl fmt::Display for CssOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl From<String> for CssOutput {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<CssOutput> for String {
    fn from(value: CssOutput) -> Self {
        value.0
    }
}

pub fn escape_selector(class_name: &str) -> String {
    let mut escaped = String::with_capacity(class_name.len());
    for c in class_name.chars() {
        match c {
            '.' | '/' | ':' | '%' | '#' | '[' | ']' | '(' | ')' | ',' | '\'' | '"' | '\\'
            | '&' | '@' | '+' | '*' | '!' | '=' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn indent_css_block(css: &str, spaces: usize) -> String {
    let padding = " ".repeat(spaces);
    css.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", padding, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn declaration_lines(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(|declaration| format!("  {}: {};", declaration.property, declaration.value))
        .collect::<Vec<_>>()
        .join("\n")
}

fn minified_declarations(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(|declaration| format!("{}:{}", declaration.property, declaration.value))
        .collect::<Vec<_>>()
        .join(";")
}

fn render_media_block(block: &MediaBlock, minify: bool) -> String {
    if minify {
        format!(
            "{}{{{}}}",
            block.condition,
            minified_declarations(&block.declarations)
        )
    } else {
        format!(
            "{} {{\n{}\n}}",
            block.condition,
            declaration_lines(&block.declarations)
        )
    }
}

pub fn render_rule(class_name: &str, body: &RuleBody, minify: bool) -> Option<String> {
    if body.is_empty() {
        return None;
    }
    let selector = format!(".{}", escape_selector(class_name));
    match body {
        RuleBody::Declarations(declarations) => {
            if minify {
                Some(format!(
                    "{}{{{}}}",
                    selector,
                    minified_declarations(declarations)
                ))
            } else {
                Some(format!(
                    "{} {{\n{}\n}}",
                    selector,
                    declaration_lines(declarations)
                ))
            }
        }
        RuleBody::MediaBlocks(blocks) => {
            let rendered = blocks
                .iter()
                .filter(|block| !block.declarations.is_empty())
                .map(|block| render_media_block(block, minify))
                .collect::<Vec<_>>();
            if rendered.is_empty() {
                return None;
            }
            if minify {
                Some(format!("{}{{{}}}", selector, rendered.join("")))
            } else {
                Some(format!(
                    "{} {{\n{}\n}}",
                    selector,
                    indent_css_block(&rendered.join("\n"), 2)
                ))
            }
        }
    }
}
