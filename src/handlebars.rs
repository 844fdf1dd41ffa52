use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde::Serialize;

pub fn create_new_handlebars<'b>() -> Handlebars<'b> {
    let mut handlebars = Handlebars::new();
    // control files and unit files are not HTML
    handlebars.register_escape_fn(str::to_string);
    handlebars.set_strict_mode(true);

    handlebars
}

/// Renders `template` against `variables`. Any reference missing from
/// `variables` is an error.
pub fn render<T>(handlebars: &Handlebars<'_>, template: &str, variables: &T) -> Result<String>
where
    T: Serialize,
{
    handlebars
        .render_template(template, variables)
        .context("render template")
}
