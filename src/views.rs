//! View rendering seam
//!
//! Handlers hand a view name and a JSON data bag to a [`ViewRenderer`]. The
//! bundled [`HtmlShellRenderer`] emits a small HTML document carrying the
//! title, any form errors, and the data bag for client-side templates.

use serde::Serialize;
use serde_json::Value;

use crate::error::AppResult;

pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: &str, context: &Value) -> AppResult<String>;
}

/// Data bag with the page title merged in
#[derive(Serialize)]
pub struct Page<'a, T: Serialize> {
    pub title: &'a str,
    #[serde(flatten)]
    pub body: T,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlShellRenderer;

impl ViewRenderer for HtmlShellRenderer {
    fn render(&self, view: &str, context: &Value) -> AppResult<String> {
        let title = html_escape::encode_text(context.get("title").and_then(Value::as_str).unwrap_or_default());

        let mut errors = String::new();
        if let Some(list) = context.get("errors").and_then(Value::as_array).filter(|l| !l.is_empty()) {
            errors.push_str("<ul class=\"errors\">");
            for error in list {
                let msg = error.get("msg").and_then(Value::as_str).unwrap_or_default();
                errors.push_str(&format!("<li>{}</li>", html_escape::encode_text(msg)));
            }
            errors.push_str("</ul>");
        }

        // `<` never appears raw inside the script block
        let data = serde_json::to_string(context)?.replace('<', "\\u003c");

        Ok(format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
             <body data-view=\"{view}\">\n<h1>{title}</h1>\n{errors}\n\
             <script type=\"application/json\" id=\"view-data\">{data}</script>\n</body>\n</html>\n",
            title = title,
            view = html_escape::encode_double_quoted_attribute(view),
            errors = errors,
            data = data,
        ))
    }
}
