//! Component assembly and library building.
//!
//! The assembler takes the translator result and the accessibility-enhanced
//! fragment as two separate inputs, in that order; the two are never merged
//! into one pass.

use indexmap::IndexMap;
use trellis_core::{component_name, DesignNode};

use crate::a11y::enhance;
use crate::analyzer::PropDecl;
use crate::error::{CodegenError, Result};
use crate::markup::MarkupNode;
use crate::translate::{translate, Translation};

/// A generated component: sanitized PascalCase name plus full source text.
///
/// Created per request and immutable afterwards; nothing is cached between
/// calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedComponent {
    pub name: String,
    pub source: String,
}

/// Assemble a full component definition from a translation and the
/// enhanced markup fragment.
///
/// Properties are de-duplicated by exact name, first occurrence wins. An
/// interface entry is optional when the property has a default or its type
/// denotes child content. Formatting is best-effort: on failure the
/// unformatted source is returned and a warning is logged.
pub fn assemble(name: &str, translation: &Translation, enhanced: &MarkupNode) -> GeneratedComponent {
    let component = component_name(name).unwrap_or_else(|| "Component".to_string());

    let mut props: Vec<&PropDecl> = Vec::new();
    for prop in &translation.props {
        if !props.iter().any(|p| p.name == prop.name) {
            props.push(prop);
        }
    }

    let mut lines = vec!["import React from 'react';".to_string()];
    for import in &translation.imports {
        if !lines.contains(import) {
            lines.push(import.clone());
        }
    }
    lines.push(String::new());

    if !props.is_empty() {
        lines.push(format!("interface {component}Props {{"));
        for prop in &props {
            if let Some(description) = &prop.description {
                lines.push(format!("  /** {description} */"));
            }
            let optional = if prop.is_optional() { "?" } else { "" };
            lines.push(format!("  {}{}: {};", prop.name, optional, prop.ty.ts()));
        }
        lines.push("}".to_string());
        lines.push(String::new());
    }

    let params = if props.is_empty() {
        String::new()
    } else {
        let bindings: Vec<String> = props
            .iter()
            .map(|p| match &p.default {
                Some(default) => format!("{} = {}", p.name, default),
                None => p.name.clone(),
            })
            .collect();
        format!("{{ {} }}: {component}Props", bindings.join(", "))
    };

    lines.push(format!("export function {component}({params}) {{"));
    lines.push("  return (".to_string());
    lines.push(enhanced.render_indented(2));
    lines.push("  );".to_string());
    lines.push("}".to_string());

    let raw = format!("{}\n", lines.join("\n"));
    let source = match format_source(&raw) {
        Ok(formatted) => formatted,
        Err(err) => {
            tracing::warn!(component = %component, error = %err, "formatting failed, emitting unformatted source");
            raw
        }
    };

    GeneratedComponent {
        name: component,
        source,
    }
}

/// Run the full pipeline for one node: translate, enhance, assemble.
pub fn generate_component(name: &str, node: &DesignNode) -> GeneratedComponent {
    let translation = translate(node);
    let enhanced = enhance(translation.fragment.clone(), node);
    assemble(name, &translation, &enhanced)
}

/// Generate a batch of named nodes into a name-to-component map.
///
/// The sanitized PascalCase name is the key; a later collision overwrites
/// the earlier entry. Items are independent, so one item's formatting
/// fallback never affects the rest of the batch.
pub fn build_library(items: &[(String, DesignNode)]) -> IndexMap<String, GeneratedComponent> {
    let mut library = IndexMap::new();
    for (name, node) in items {
        let component = generate_component(name, node);
        library.insert(component.name.clone(), component);
    }
    library
}

/// Best-effort source normalization.
///
/// Verifies bracket balance outside string literals, trims trailing
/// whitespace, collapses runs of blank lines, and guarantees a trailing
/// newline. An unbalanced source is reported as a formatting error rather
/// than silently emitted.
pub fn format_source(source: &str) -> Result<String> {
    check_balance(source)?;

    let mut out = Vec::new();
    let mut blank_run = 0usize;
    for line in source.lines() {
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push(trimmed.to_string());
    }
    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    Ok(format!("{}\n", out.join("\n")))
}

fn check_balance(source: &str) -> Result<()> {
    let mut stack = Vec::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in source.chars() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' | '`' => quote = Some(c),
            '(' | '[' | '{' => stack.push(c),
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if stack.pop() != Some(expected) {
                    return Err(CodegenError::Formatting(format!(
                        "unbalanced '{c}' in generated source"
                    )));
                }
            }
            _ => {}
        }
    }
    if quote.is_some() {
        return Err(CodegenError::Formatting(
            "unterminated string literal in generated source".to_string(),
        ));
    }
    if let Some(open) = stack.pop() {
        return Err(CodegenError::Formatting(format!(
            "unclosed '{open}' in generated source"
        )));
    }
    Ok(())
}
