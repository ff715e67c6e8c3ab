use super::Reference;
use crate::format::{Template, ValueFormat};
use ssm_env_core::{
    Environment, Error, FileMode, ParseErrorKind, Result, HOME_VAR, OPTION_CHMOD,
    OPTION_DEFAULT, OPTION_DESTINATION, OPTION_TEMPLATE, SSM_SCHEME,
};
use ssm_env_utils::expand_home;
use std::borrow::Cow;
use std::path::PathBuf;
use url::{form_urlencoded, Url};

/// The recognised query options; the first occurrence of a key wins
#[derive(Debug, Default)]
struct Options {
    default: Option<String>,
    destination: Option<String>,
    template: Option<String>,
    chmod: Option<String>,
}

impl Options {
    fn parse(query: &str) -> std::result::Result<Self, String> {
        validate_query(query)?;

        let mut options = Options::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                OPTION_DEFAULT => &mut options.default,
                OPTION_DESTINATION => &mut options.destination,
                OPTION_TEMPLATE => &mut options.template,
                OPTION_CHMOD => &mut options.chmod,
                other => {
                    tracing::debug!(option = %other, "Ignoring unknown reference option");
                    continue;
                }
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        Ok(options)
    }
}

/// Reject what a lenient decoder would silently accept: `;` separators and
/// `%` not followed by two hex digits.
fn validate_query(query: &str) -> std::result::Result<(), String> {
    for pair in query.split('&') {
        if pair.contains(';') {
            return Err(format!("invalid semicolon separator in '{pair}'"));
        }
        let bytes = pair.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'%' {
                let escape = bytes.get(i + 1..i + 3);
                if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
                    let end = (i + 3).min(bytes.len());
                    return Err(format!(
                        "invalid URL escape '{}'",
                        String::from_utf8_lossy(&bytes[i..end])
                    ));
                }
                i += 3;
            } else {
                i += 1;
            }
        }
    }
    Ok(())
}

/// Expand `$NAME` and `${NAME}` from the snapshot; unknown names become empty
fn expand_variables<'a>(raw: &'a str, env: &Environment) -> Cow<'a, str> {
    shellexpand::env_with_context_no_errors(raw, |name| Some(env.get(name).unwrap_or("")))
}

/// Treat an empty option the same as a missing one
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub(super) fn parse(variable: &str, raw: &str, env: &Environment) -> Result<Reference> {
    let fail = |kind: ParseErrorKind, message: String| Error::reference_parse(variable, kind, message);

    let expanded = expand_variables(raw, env);
    let uri = Url::parse(&expanded).map_err(|e| fail(ParseErrorKind::MalformedUri, e.to_string()))?;

    if uri.scheme() != SSM_SCHEME {
        return Err(fail(
            ParseErrorKind::MalformedUri,
            format!("expected scheme '{SSM_SCHEME}', found '{}'", uri.scheme()),
        ));
    }
    if let Some(host) = uri.host_str().filter(|h| !h.is_empty()) {
        return Err(fail(
            ParseErrorKind::HostNotAllowed,
            format!("specified host '{host}', use ssm:/// with an extra /"),
        ));
    }
    if !uri.username().is_empty() || uri.password().is_some() || uri.port().is_some() {
        return Err(fail(
            ParseErrorKind::HostNotAllowed,
            "specified an authority, use ssm:/// with an extra /".to_string(),
        ));
    }
    if uri.cannot_be_a_base() || uri.path().is_empty() {
        return Err(fail(
            ParseErrorKind::MissingPath,
            "no parameter path, expected ssm:///<path>".to_string(),
        ));
    }

    let options = Options::parse(uri.query().unwrap_or_default())
        .map_err(|message| fail(ParseErrorKind::InvalidQuery, message))?;

    let destination = non_empty(options.destination)
        .map(|destination| {
            expand_home(&destination, env.get(HOME_VAR))
                .map(|expanded| PathBuf::from(expanded.into_owned()))
                .map_err(|e| fail(ParseErrorKind::HomeExpansion, e.to_string()))
        })
        .transpose()?;

    let format = match non_empty(options.template) {
        Some(source) => ValueFormat::Template(
            Template::compile(&source)
                .map_err(|message| fail(ParseErrorKind::InvalidTemplate, message))?,
        ),
        None => ValueFormat::Raw,
    };

    let file_mode = non_empty(options.chmod)
        .map(|chmod| {
            FileMode::from_octal(&chmod).map_err(|message| fail(ParseErrorKind::InvalidFileMode, message))
        })
        .transpose()?
        .filter(|mode| !mode.is_unset());

    Ok(Reference {
        variable: variable.to_string(),
        parameter: uri.path().to_string(),
        default: non_empty(options.default),
        destination,
        file_mode,
        format,
    })
}
