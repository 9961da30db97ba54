//! Message rendering for recorded violations
//!
//! Walks a violation's candidate codes in order and renders the first
//! catalog hit, substituting `{0}`, `{1}`, ... with the violation's
//! positional arguments. When nothing matches, the rule's default text is
//! returned verbatim; failing that, a diagnostic placeholder names the code
//! and subject so the miss is reportable without being fatal.
//!
//! Copyright (c) 2025 Veto Team
//! Licensed under the Apache-2.0 license

use crate::catalog::MessageCatalog;
use serde_json::Value;
use tracing::warn;
use veto_core::Violation;

/// Where a rendered message came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    /// A catalog template matched this candidate code
    Catalog { code: String },
    /// No code matched; the rule's default text was used
    DefaultText,
    /// Neither a code nor a default text was available
    Diagnostic,
}

/// A display string plus the resolution path that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub source: MessageSource,
}

impl Rendered {
    /// True when nothing resolved and the text is only a diagnostic.
    pub fn is_diagnostic(&self) -> bool {
        self.source == MessageSource::Diagnostic
    }
}

/// Render a message for an ordered candidate code list.
///
/// The first code with a catalog entry for `locale` wins and has its
/// template's positional placeholders substituted. A miss falls back to
/// `default_message` verbatim; default text is treated as already final and
/// is NOT argument-substituted, matching the reference behavior even though
/// it is asymmetric with catalog templates.
pub fn render(
    codes: &[String],
    arguments: &[Value],
    default_message: Option<&str>,
    locale: &str,
    catalog: &MessageCatalog,
) -> Rendered {
    let subject = codes.first().map(String::as_str).unwrap_or("<no code>");
    render_for_subject(codes, arguments, default_message, locale, catalog, subject)
}

/// Render a stored [`Violation`], using the collector's object name for the
/// diagnostic subject.
pub fn render_violation(
    violation: &Violation,
    object_name: &str,
    locale: &str,
    catalog: &MessageCatalog,
) -> Rendered {
    let subject = match &violation.field {
        Some(field) => format!("object '{}', field '{}'", object_name, field),
        None => format!("object '{}'", object_name),
    };
    render_for_subject(
        &violation.codes,
        &violation.arguments,
        violation.default_message.as_deref(),
        locale,
        catalog,
        &subject,
    )
}

fn render_for_subject(
    codes: &[String],
    arguments: &[Value],
    default_message: Option<&str>,
    locale: &str,
    catalog: &MessageCatalog,
    subject: &str,
) -> Rendered {
    for code in codes {
        if let Some(template) = catalog.lookup(locale, code) {
            return Rendered {
                text: substitute(template, arguments),
                source: MessageSource::Catalog { code: code.clone() },
            };
        }
    }

    if let Some(text) = default_message {
        return Rendered {
            text: text.to_string(),
            source: MessageSource::DefaultText,
        };
    }

    let primary = codes.first().map(String::as_str).unwrap_or("<no code>");
    warn!(code = primary, subject, locale, "no message resolved");
    Rendered {
        text: format!("no message found for code '{}' ({})", primary, subject),
        source: MessageSource::Diagnostic,
    }
}

/// Substitute `{0}`, `{1}`, ... placeholders with positional arguments.
///
/// Out-of-range or malformed placeholders are left verbatim.
fn substitute(template: &str, arguments: &[Value]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        match after_open.find('}') {
            Some(close) => {
                let body = &after_open[..close];
                match parse_index(body).and_then(|index| arguments.get(index)) {
                    Some(argument) => out.push_str(&argument_text(argument)),
                    None => {
                        out.push('{');
                        out.push_str(body);
                        out.push('}');
                    }
                }
                rest = &after_open[close + 1..];
            }
            None => {
                // Unterminated placeholder, keep the tail as-is.
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }

    out.push_str(rest);
    out
}

fn parse_index(body: &str) -> Option<usize> {
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    body.parse().ok()
}

/// Plain display form of an argument: strings without JSON quoting, numbers
/// and booleans as written, null as empty.
fn argument_text(argument: &Value) -> String {
    match argument {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
