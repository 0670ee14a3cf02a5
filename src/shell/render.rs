//! HTML rendering of a shell state

use super::state::ShellState;
use crate::flatten::FlatTable;
use crate::types::{max_season, Dataset, MIN_SEASON};

/// Form values echoed back into the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormValues {
    /// Selected dataset
    pub dataset: Dataset,
    /// Season shown in the number input
    pub season: i32,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            dataset: Dataset::default(),
            season: max_season(),
        }
    }
}

const STYLE: &str = "body{font-family:sans-serif;margin:2rem}\
table{border-collapse:collapse;font-size:0.9rem}\
th,td{border:1px solid #ccc;padding:0.25rem 0.5rem;text-align:left}\
.success{color:#155724}.error{color:#721c24}";

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
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

/// Render the whole page for `state`
pub fn render_page(state: &ShellState, form: FormValues) -> String {
    let title = form.dataset.title();
    let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    html.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n"));
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));
    html.push_str(&render_form(form));

    match state {
        ShellState::Idle => {}
        ShellState::ErrorShown { message } => {
            html.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(message)));
        }
        ShellState::Displaying {
            output,
            message,
            download,
        } => {
            if let Some(message) = message {
                html.push_str(&format!(
                    "<p class=\"success\">{}</p>\n",
                    escape_html(message)
                ));
            }
            html.push_str("<h2>Formula 1 Dataset</h2>\n");
            html.push_str(&format!("<p>{}</p>\n", escape_html(&output.summary())));
            if let Some(blob) = download {
                html.push_str(&format!("<p>{}</p>\n", blob.to_anchor("Download Dataset")));
            }
            html.push_str(&render_table(&output.table));
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_form(form: FormValues) -> String {
    let mut html = String::from("<form method=\"post\" action=\"/generate\">\n");
    html.push_str("<label for=\"season\">Enter the season</label>\n");
    html.push_str(&format!(
        "<input type=\"number\" id=\"season\" name=\"season\" min=\"{MIN_SEASON}\" max=\"{}\" step=\"1\" value=\"{}\">\n",
        max_season(),
        form.season
    ));
    html.push_str("<label for=\"dataset\">Dataset</label>\n<select id=\"dataset\" name=\"dataset\">\n");
    for dataset in Dataset::ALL {
        let selected = if dataset == form.dataset { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{}\"{selected}>{}</option>\n",
            dataset.as_str(),
            escape_html(dataset.title())
        ));
    }
    html.push_str("</select>\n");
    html.push_str("<button type=\"submit\" formaction=\"/generate\">Generate Dataset</button>\n");
    html.push_str("<button type=\"submit\" formaction=\"/save\">Save Data to CSV</button>\n");
    html.push_str("<button type=\"submit\" formaction=\"/reset\">Reset</button>\n");
    html.push_str("</form>\n");
    html
}

fn render_table(table: &FlatTable) -> String {
    let mut html = String::from("<table>\n<thead><tr>");
    for column in table.columns() {
        html.push_str(&format!("<th>{}</th>", escape_html(column)));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for record in table.records() {
        html.push_str("<tr>");
        for cell in record {
            html.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
    html
}
