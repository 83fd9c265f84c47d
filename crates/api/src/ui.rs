//! Server-rendered HTML for entity forms.

use discontent_core::form::FormField;
use discontent_core::registry::RecordType;

/// Wrap `body` in a minimal HTML document.
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{}</title>\n\
         </head>\n\
         <body>\n\
         {body}\
         </body>\n\
         </html>\n",
        escape(title)
    )
}

/// Render the submission form for `record_type` populated with `fields`.
///
/// The form posts back to the same entity endpoint.
pub fn entity_form(record_type: &RecordType, fields: &[FormField]) -> String {
    let inputs: String = fields.iter().map(field_input).collect();

    format!(
        "<h1>{title}</h1>\n\
         <form method=\"post\" action=\"/api/entities/{collection}\">\n\
         {inputs}\
         <button type=\"submit\">Save</button>\n\
         </form>\n",
        title = escape(record_type.type_name()),
        collection = escape(record_type.collection()),
    )
}

/// One labelled text input; identifiers are read-only.
fn field_input(field: &FormField) -> String {
    let name = escape(field.name);
    let read_only = if field.read_only { " readonly" } else { "" };

    format!(
        "<div>\n\
         <label for=\"{name}\">{name}</label>\n\
         <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\"{read_only}>\n\
         </div>\n",
        value = escape(&field.value),
    )
}

/// Full page for an entity form.
pub fn entity_page(record_type: &RecordType, fields: &[FormField]) -> String {
    page(record_type.type_name(), &entity_form(record_type, fields))
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
