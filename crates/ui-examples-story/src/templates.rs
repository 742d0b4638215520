//! Story module template.

use minijinja::{context, AutoEscape, Environment};

/// Values substituted into the story module.
#[derive(Debug, Clone, serde::Serialize)]
pub struct StoryContext {
    /// Import lines, newline separated
    pub imports: String,
    /// Story title, already escaped for a single-quoted string
    pub title: String,
    /// Render function source
    pub render: String,
    /// Named story export
    pub export_name: String,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the story module template.
    pub fn new() -> Self {
        let mut env = Environment::new();

        // Generated JavaScript, never HTML-escaped.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);

        env.add_template_owned("story.js".to_string(), STORY_TEMPLATE.to_string())
            .expect("Failed to add story template");

        Self { env }
    }

    /// Render the story module.
    pub fn render_story(&self, story: &StoryContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("story.js")?;

        tmpl.render(context! {
            imports => &story.imports,
            title => &story.title,
            render => &story.render,
            export_name => &story.export_name,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const STORY_TEMPLATE: &str = r#"
{{ imports }}

export default {
  title: '{{ title }}',
  render: {{ render }},
  play: async ({ canvasElement }) => {
    Drupal.attachBehaviors(canvasElement, window.drupalSettings)
  },
}

export const {{ export_name }} = {}
"#;
