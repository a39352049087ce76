// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Miette diagnostics for `switchyard.toml`.
//!
//! Every section denies unknown keys, so most user mistakes surface here as
//! a misspelled `[analyzer]` field or a bad `[[models]]` entry. Each one is
//! pointed at in the file that contains it, with the closest valid key.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Jaro-Winkler score a valid key needs before it is offered as a fix.
/// `max_prompt_char` and `complexity_treshold` both clear it.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A problem with the router configuration.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// A section or `[[models]]` entry holds a key it does not define.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(switchyard::config::unknown_key),
        help("{}", format_unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        key: String,
        suggestion: Option<String>,
        /// Comma-separated keys the enclosing section accepts.
        valid_keys: String,
        #[label("this key is not recognized")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// Wrong type, or a capability, level or priority name that does not
    /// exist.
    #[error("invalid value for key `{key}`: {detail}")]
    #[diagnostic(code(switchyard::config::invalid_value), help("expected {expected}"))]
    InvalidValue {
        /// Dotted path, e.g. `models.1.complexity_threshold`.
        key: String,
        detail: String,
        expected: String,
    },

    /// A `[[models]]` entry without one of its required fields.
    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(switchyard::config::missing_key),
        help("add `{key} = <value>` to your switchyard.toml")
    )]
    MissingKey { key: String },

    /// Parsed, but outside the range the router accepts.
    #[error("validation error: {message}")]
    #[diagnostic(code(switchyard::config::validation))]
    Validation { message: String },

    #[error("configuration error: {0}")]
    #[diagnostic(code(switchyard::config::other))]
    Other(String),
}

fn format_unknown_key_help(suggestion: Option<&str>, valid_keys: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? Valid keys: {valid_keys}"),
        None => format!("valid keys: {valid_keys}"),
    }
}

/// One diagnostic per error figment collected while extracting the config.
///
/// `toml_sources` pairs each loaded file path with its text, for spans.
pub fn figment_to_config_errors(
    err: figment::Error,
    toml_sources: &[(String, String)],
) -> Vec<ConfigError> {
    use figment::error::Kind;

    let mut errors = Vec::new();

    for error in err {
        let path: Vec<String> = error.path.iter().map(|s| s.to_string()).collect();
        let config_error = match &error.kind {
            Kind::UnknownField(field, expected) => {
                let valid_keys: Vec<&str> = expected.to_vec();
                let suggestion = suggest_key(field, &valid_keys);
                let (span, src) = find_source_span(&error, &path, field, toml_sources);

                ConfigError::UnknownKey {
                    key: field.clone(),
                    suggestion,
                    valid_keys: valid_keys.join(", "),
                    span,
                    src,
                }
            }
            Kind::MissingField(field) => ConfigError::MissingKey {
                key: dotted(&path, field),
            },
            Kind::InvalidType(actual, expected) => ConfigError::InvalidValue {
                key: path.join("."),
                detail: format!("found {actual}"),
                expected: expected.to_string(),
            },
            Kind::UnknownVariant(variant, expected) => ConfigError::InvalidValue {
                key: path.join("."),
                detail: format!("unknown variant `{variant}`"),
                expected: format!("one of {}", expected.join(", ")),
            },
            _ => ConfigError::Other(format!("{error}")),
        };

        errors.push(config_error);
    }

    errors
}

fn dotted(path: &[String], field: &str) -> String {
    if path.is_empty() {
        field.to_string()
    } else {
        format!("{}.{field}", path.join("."))
    }
}

fn find_source_span(
    error: &figment::error::Error,
    path: &[String],
    field: &str,
    toml_sources: &[(String, String)],
) -> (Option<SourceSpan>, Option<NamedSource<String>>) {
    let source_path = error
        .metadata
        .as_ref()
        .and_then(|m| m.source.as_ref())
        .and_then(|s| match s {
            figment::Source::File(path) => Some(path.display().to_string()),
            _ => None,
        });

    let source = source_path.as_ref().and_then(|p| {
        toml_sources
            .iter()
            .find(|(candidate, _)| candidate == p)
            .map(|(p, content)| (p.as_str(), content.as_str()))
    });

    if let Some((name, content)) = source
        && let Some(offset) = find_key_offset(content, path, field)
    {
        let span = SourceSpan::new(offset.into(), field.len());
        let named = NamedSource::new(name, content.to_string());
        return (Some(span), Some(named));
    }

    (None, None)
}

/// Byte offset of `field` below the table that `path` names.
///
/// `["analyzer"]` searches after the `[analyzer]` header. `["models", "2"]`
/// searches after the third `[[models]]` header. An empty path searches from
/// the start of the document.
pub fn find_key_offset(content: &str, path: &[String], field: &str) -> Option<usize> {
    let search_start = match path {
        [] => 0,
        [section, index, ..] if index.parse::<usize>().is_ok() => {
            let header = format!("[[{section}]]");
            let nth = index.parse::<usize>().ok()?;
            let (pos, _) = content.match_indices(&header).nth(nth)?;
            pos + header.len()
        }
        [section, ..] => {
            let header = format!("[{section}]");
            content.find(&header).map(|pos| pos + header.len())?
        }
    };

    let remaining = &content[search_start..];

    let mut byte_offset = 0;
    for line in remaining.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(after) = trimmed.strip_prefix(field)
            && (after.starts_with(' ') || after.starts_with('=') || after.starts_with('\t'))
        {
            let field_start_in_line = line.len() - trimmed.len();
            return Some(search_start + byte_offset + field_start_in_line);
        }
        byte_offset += line.len();
    }

    None
}

/// The valid key closest to `unknown`, if any is close enough.
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    valid_keys
        .iter()
        .map(|&key| (key, strsim::jaro_winkler(unknown, key)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(key, _)| key.to_string())
}

/// Print each error to stderr with miette's graphical report.
pub fn render_errors(errors: &[ConfigError]) {
    use miette::GraphicalReportHandler;

    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        let diagnostic: &dyn Diagnostic = error;
        if handler.render_report(&mut buf, diagnostic).is_ok() {
            eprint!("{buf}");
        } else {
            eprintln!("Error: {error}");
        }
    }
}
