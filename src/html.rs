// src/html.rs
//! Sheet to HTML table, and the document that hosts it in an embedded browser.

use std::borrow::Cow;
use std::fmt::Write;

use crate::data_types::Sheet;

pub const DEFAULT_WIDGET_SCRIPT_URL: &str =
    "https://cdn.grapecity.com/spreadjs/15.0.0/spread.sheets.all.min.js";

/// Inline style applied to every cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellStyle {
    pub border: String,
    pub padding: String,
    pub text_align: String,
}

impl Default for CellStyle {
    fn default() -> Self {
        CellStyle {
            border: "1px solid black".to_string(),
            padding: "8px".to_string(),
            text_align: "center".to_string(),
        }
    }
}

impl CellStyle {
    fn to_css(&self) -> String {
        format!(
            "border: {}; padding: {}; text-align: {}",
            self.border, self.padding, self.text_align
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Render the first row as a `<thead>` of `<th>` cells.
    pub header_row: bool,
    /// Mark cells `contenteditable` so the hosting widget can edit them in place.
    pub editable: bool,
    pub empty_cell_text: String,
    pub cell_style: CellStyle,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            header_row: true,
            editable: true,
            empty_cell_text: String::new(),
            cell_style: CellStyle::default(),
        }
    }
}

pub fn sheet_to_html_table(sheet: &Sheet, options: &TableOptions) -> String {
    let style = escape(&options.cell_style.to_css()).into_owned();
    let mut html = String::from("<table>");

    let (header, body) = match sheet.rows.split_first() {
        Some((first, rest)) if options.header_row => (Some(first), rest),
        _ => (None, sheet.rows.as_slice()),
    };

    let (first_row, first_col) = (sheet.origin.0 as usize, sheet.origin.1 as usize);

    if let Some(cells) = header {
        html.push_str("<thead>");
        push_row(&mut html, "th", (first_row, first_col), cells, &style, options);
        html.push_str("</thead>");
    }

    let offset = first_row + usize::from(header.is_some());
    html.push_str("<tbody>");
    for (i, cells) in body.iter().enumerate() {
        push_row(&mut html, "td", (offset + i, first_col), cells, &style, options);
    }
    html.push_str("</tbody></table>");
    html
}

fn push_row(
    html: &mut String,
    tag: &str,
    (row, first_col): (usize, usize),
    cells: &[String],
    style: &str,
    options: &TableOptions,
) {
    html.push_str("<tr>");
    for (col, value) in cells.iter().enumerate() {
        let text = if value.is_empty() {
            options.empty_cell_text.as_str()
        } else {
            value.as_str()
        };
        let _ = write!(
            html,
            "<{tag} id=\"sjs-{}{}\" style=\"{style}\"{}>{}</{tag}>",
            column_name(first_col + col),
            row + 1,
            if options.editable { " contenteditable=\"true\"" } else { "" },
            escape(text),
        );
    }
    html.push_str("</tr>");
}

/// Zero-based column index to its spreadsheet letters (0 → A, 26 → AA).
pub fn column_name(mut index: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}

fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Wraps a rendered table in a standalone document that loads the grid
/// widget and exposes `exportSpreadsheet` / `importSpreadsheet` to the host.
///
/// The document talks to the host through `window.ReactNativeWebView.postMessage`;
/// see [`crate::bridge`] for the messages it sends.
pub fn bootstrap_document(table_html: &str, widget_script_url: &str) -> String {
    format!(
        r#"<html>
  <head>
    <script src="{script}"></script>
    <style>
      body {{
        margin: 0;
        font-family: Arial, sans-serif;
      }}
      .container {{
        display: flex;
        flex-direction: column;
        height: 100vh;
      }}
      .spreadjs-container {{
        flex: 1;
        width: 100%;
      }}
      table {{
        border-collapse: collapse;
        width: 100%;
        margin: 10px 0;
      }}
      th, td {{
        border: 1px solid #ddd;
        padding: 12px;
        text-align: center;
        font-size: 24px;
      }}
      th {{
        background-color: #f2f2f2;
      }}
      td {{
        background-color: #ffffff;
      }}
    </style>
  </head>
  <body>
    <div class="container">
      <div id="spreadjs" class="spreadjs-container"></div>
      {table}
    </div>
    <script>
      const spread = new GC.Spread.Sheets.Workbook(document.getElementById('spreadjs'));

      window.ReactNativeWebView.postMessage('SpreadJS initialized');

      window.exportSpreadsheet = function() {{
        const json = spread.toJSON();
        const base64 = btoa(unescape(encodeURIComponent(JSON.stringify(json))));
        window.ReactNativeWebView.postMessage('export:' + base64);
      }};

      window.importSpreadsheet = function(base64Data) {{
        try {{
          const json = JSON.parse(decodeURIComponent(escape(atob(base64Data))));
          spread.fromJSON(json);
          window.ReactNativeWebView.postMessage('import:done');
        }} catch (e) {{
          console.error('Error importing spreadsheet:', e);
          window.ReactNativeWebView.postMessage('import:error');
        }}
      }};
    </script>
  </body>
</html>
"#,
        script = escape(widget_script_url),
        table = table_html,
    )
}
