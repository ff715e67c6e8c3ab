//! Value formatting
//!
//! A reference either uses the fetched value as-is or passes it through a
//! template first. The same formatting applies wherever a raw value is used:
//! the fetched parameter, the `default`, and what ends up in a destination
//! file.

use ssm_env_core::TEMPLATE_VALUE_KEY;
use std::error::Error as StdError;
use std::fmt;
use tera::{Context, Tera};

/// How a raw value becomes the value that is used
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValueFormat {
    /// Use the raw value unchanged
    #[default]
    Raw,
    /// Render the raw value through a template
    Template(Template),
}

impl ValueFormat {
    /// Format `raw`; only a template can fail
    pub fn apply(&self, raw: &str) -> Result<String, String> {
        match self {
            ValueFormat::Raw => Ok(raw.to_string()),
            ValueFormat::Template(template) => {
                template.render(raw).map_err(|e| error_chain(&e))
            }
        }
    }
}

/// A compiled template with the raw value bound as `value`.
///
/// ```text
/// template={{ value | upper }}
/// template=Bearer {{ value }}
/// ```
#[derive(Clone)]
pub struct Template {
    source: String,
    tera: Tera,
}

impl Template {
    const NAME: &'static str = "secret";

    /// Compile `source`, rejecting invalid syntax up front
    pub fn compile(source: &str) -> Result<Self, String> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(Self::NAME, source)
            .map_err(|e| error_chain(&e))?;

        Ok(Self {
            source: source.to_string(),
            tera,
        })
    }

    fn render(&self, raw: &str) -> tera::Result<String> {
        let mut context = Context::new();
        context.insert(TEMPLATE_VALUE_KEY, raw);
        self.tera.render(Self::NAME, &context)
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("source", &self.source)
            .finish()
    }
}

impl PartialEq for Template {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Template {}

/// Tera keeps the useful part of its messages in the source chain
fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
