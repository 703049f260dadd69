//! Server-rendered HTML pages.

use tabscope::Report;
use tabscope::render::escape_html;

const STYLESHEET: &str = "/static/style.css";

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"{STYLESHEET}\">\n\
         </head>\n\
         <body>\n\
         <main class=\"container\">\n\
         {body}\
         </main>\n\
         </body>\n\
         </html>\n",
        title = escape_html(title),
    )
}

fn alerts<'a>(messages: impl IntoIterator<Item = &'a str>) -> String {
    messages
        .into_iter()
        .map(|m| format!("<div class=\"alert alert-warning\">{}</div>\n", escape_html(m)))
        .collect()
}

/// The upload form, with an optional warning from a rejected upload.
pub fn index_page(warning: Option<&str>) -> String {
    let mut body = String::from("<h1>Upload a CSV file</h1>\n");
    body.push_str(&alerts(warning.filter(|w| !w.is_empty())));
    body.push_str(
        "<form method=\"post\" action=\"/upload\" enctype=\"multipart/form-data\">\n\
         <input type=\"file\" name=\"datafile\" accept=\".csv,.tsv,.txt\">\n\
         <button type=\"submit\" class=\"btn\">Upload</button>\n\
         </form>\n",
    );
    layout("Tabscope", &body)
}

/// Preview, statistics, notices, and charts for one upload.
///
/// Chart images are only emitted when the report carries charts.
pub fn result_page(report: &Report) -> String {
    let notices: Vec<String> = report.notices.iter().map(|n| n.to_string()).collect();

    let mut body = format!(
        "<h1>Results for {}</h1>\n",
        escape_html(&report.source.file)
    );
    body.push_str(&alerts(notices.iter().map(String::as_str)));

    body.push_str("<h2>Data preview</h2>\n");
    body.push_str(&report.preview_html);
    body.push_str("\n<h2>Descriptive statistics</h2>\n");
    body.push_str(&report.stats_html);
    body.push('\n');

    if let (Some(charts), Some((wave, bars))) = (&report.charts, report.chart_uris()) {
        let column = escape_html(&charts.column);
        body.push_str("<h2>Visualizations</h2>\n");
        body.push_str(&format!(
            "<img class=\"chart\" src=\"{}\" alt=\"Wave pattern of {}\">\n",
            wave, column
        ));
        body.push_str(&format!(
            "<img class=\"chart\" src=\"{}\" alt=\"Bar chart of {}\">\n",
            bars, column
        ));
    }

    body.push_str("<p><a href=\"/\">Upload another file</a></p>\n");
    layout("Tabscope results", &body)
}

/// Shown only for faults on the server side.
pub fn error_page(message: &str) -> String {
    let body = format!(
        "<h1>Something went wrong</h1>\n{}<p><a href=\"/\">Back to upload</a></p>\n",
        alerts([message])
    );
    layout("Tabscope error", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabscope::Tabscope;

    #[test]
    fn test_index_page_escapes_warning() {
        let page = index_page(Some("<script>"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("name=\"datafile\""));
    }

    #[test]
    fn test_index_page_without_warning() {
        assert!(!index_page(None).contains("alert"));
        assert!(!index_page(Some("")).contains("alert"));
    }

    #[test]
    fn test_result_page_without_charts_has_no_images() {
        let report = Tabscope::new()
            .analyze_bytes("cities.csv", b"city\nOslo\n")
            .unwrap();
        let page = result_page(&report);
        assert!(!page.contains("<img"));
        assert!(page.contains("No numeric column available for visualization."));
    }

    #[test]
    fn test_result_page_with_charts() {
        let report = Tabscope::new()
            .analyze_bytes("t.csv", b"Temperature\n1\n2\n")
            .unwrap();
        let page = result_page(&report);
        assert_eq!(page.matches("src=\"data:image/png;base64,").count(), 2);
    }
}
