//! Server-rendered HTML for the single-page interface.

pub const TITLE: &str = "Graphic designer tool";
pub const INPUT_LABEL: &str = "Visual description";
pub const INPUT_PLACEHOLDER: &str =
    "Type the description of the visual you want to create here here...";
pub const OUTPUT_LABEL: &str = "Generated visual";

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:52rem;margin:2rem auto;padding:0 1rem;color:#1f2937}\
h1{font-size:1.6rem}\
label{display:block;font-weight:600;margin:1rem 0 .4rem}\
textarea{width:100%;min-height:6rem;padding:.6rem;font:inherit;box-sizing:border-box}\
button{margin-top:.8rem;padding:.5rem 1.4rem;font:inherit;cursor:pointer}\
.output{margin-top:1.5rem;border:1px solid #d1d5db;border-radius:.5rem;padding:1rem;min-height:8rem}\
.output img{max-width:100%;height:auto}\
.error{color:#b91c1c}";

/// What the page shows besides the form.
#[derive(Debug, Default)]
pub struct PageView {
    pub description: String,
    pub image_data_uri: Option<String>,
    pub error: Option<String>,
}

pub fn render(view: &PageView) -> String {
    let mut html = String::with_capacity(2048);
    html.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    html.push_str(&format!("<title>{}</title>", TITLE));
    html.push_str(&format!("<style>{}</style></head><body>", STYLE));
    html.push_str(&format!("<h1>{}</h1>", TITLE));

    html.push_str("<form method=\"post\" action=\"/generate\">");
    html.push_str(&format!(
        "<label for=\"description\">{}</label>",
        INPUT_LABEL
    ));
    html.push_str(&format!(
        "<textarea id=\"description\" name=\"description\" placeholder=\"{}\">{}</textarea>",
        escape_html(INPUT_PLACEHOLDER),
        escape_html(&view.description)
    ));
    html.push_str("<button type=\"submit\">Submit</button></form>");

    html.push_str(&format!(
        "<section class=\"output\"><label>{}</label>",
        OUTPUT_LABEL
    ));
    if let Some(error) = &view.error {
        html.push_str(&format!("<p class=\"error\">{}</p>", escape_html(error)));
    }
    if let Some(uri) = &view.image_data_uri {
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">",
            uri,
            escape_html(&view.description)
        ));
    }
    html.push_str("</section></body></html>");
    html
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
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
