use std::sync::Arc;

use comrak::options::Options;
use comrak::{Arena, format_html, parse_document};
use once_cell::sync::Lazy;

use crate::application::render::types::{ConversionError, Converter};

/// Default Comrak-based converter.
///
/// Raw HTML in the source passes through untouched; the output is treated as
/// trusted and no sanitisation stage runs after conversion.
pub struct ComrakConverter {
    options: Options<'static>,
}

impl ComrakConverter {
    fn new() -> Self {
        Self {
            options: default_options(),
        }
    }
}

static CONVERTER: Lazy<Arc<ComrakConverter>> = Lazy::new(|| Arc::new(ComrakConverter::new()));

/// Access the shared converter instance, initialised on first use.
pub fn converter() -> Arc<ComrakConverter> {
    Arc::clone(&CONVERTER)
}

impl Default for ComrakConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter for ComrakConverter {
    fn convert(&self, markdown: &str) -> Result<String, ConversionError> {
        let arena = Arena::new();
        let root = parse_document(&arena, markdown, &self.options);

        let mut html = String::new();
        format_html(root, &self.options, &mut html).map_err(|err| ConversionError::Markdown {
            message: err.to_string(),
        })?;
        Ok(html)
    }
}

fn default_options() -> Options<'static> {
    let mut options = Options::default();

    let ext = &mut options.extension;
    ext.strikethrough = true;
    ext.table = true;
    ext.autolink = true;
    ext.tasklist = true;

    let render = &mut options.render;
    render.github_pre_lang = true;
    render.r#unsafe = true;

    options
}

#[cfg(test)]
mod tests {
    use super::converter;
    use crate::application::render::types::Converter;

    #[test]
    fn heading_renders_to_html() {
        let html = converter().convert("# Hello").expect("conversion succeeds");
        assert_eq!(html, "<h1>Hello</h1>\n");
    }

    #[test]
    fn raw_html_passes_through() {
        let html = converter()
            .convert("before\n\n<script>alert('x')</script>\n\nafter")
            .expect("conversion succeeds");

        assert!(html.contains("<script>alert('x')</script>"));
    }

    #[test]
    fn table_extension_is_enabled() {
        let html = converter()
            .convert("| a | b |\n| - | - |\n| 1 | 2 |")
            .expect("conversion succeeds");

        assert!(html.contains("<table>"));
    }

    #[test]
    fn conversion_is_deterministic() {
        let first = converter()
            .convert("*emphasis* and `code`")
            .expect("conversion succeeds");
        let second = converter()
            .convert("*emphasis* and `code`")
            .expect("conversion succeeds");

        assert_eq!(first, second);
    }
}
