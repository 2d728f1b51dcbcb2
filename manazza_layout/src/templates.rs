use minijinja::{Environment, Value};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("template rendering error")]
pub struct TemplateError;

pub fn render_template(
    template: &str,
    context: impl Serialize,
) -> Result<String, TemplateError> {
    let env = Environment::new();
    // .html extension enables HTML escaping
    // https://docs.rs/minijinja/2.12.0/minijinja/fn.default_auto_escape_callback.html
    env.render_named_str("template.html", template, context)
        .map_err(|_| TemplateError)
}

/// Marks pre-rendered markup as safe, it will be inserted without escaping
pub fn safe_markup(markup: impl Into<String>) -> Value {
    Value::from_safe_string(markup.into())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use super::*;

    #[test]
    fn test_render_template_escape_html() {
        let template = r#"<meta name="description" content="{{ value }}">"#;
        let context = json!({"value": r#"test"><script>"#});
        let output = render_template(template, context).unwrap();
        assert_eq!(
            output,
            r#"<meta name="description" content="test&quot;&gt;&lt;script&gt;">"#,
        );
    }

    #[derive(Serialize)]
    struct Wrapper {
        content: Value,
    }

    #[test]
    fn test_render_template_safe_markup() {
        let template = "<main>{{ content }}</main>";
        let context = Wrapper { content: safe_markup("<p>a & b</p>") };
        let output = render_template(template, context).unwrap();
        assert_eq!(output, "<main><p>a & b</p></main>");
    }
}
