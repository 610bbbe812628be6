use crate::chart::Spec;

const VEGA_CDN: &str = "https://cdn.jsdelivr.net/npm/vega@5";
const VEGA_LITE_CDN: &str = "https://cdn.jsdelivr.net/npm/vega-lite@5";
const VEGA_EMBED_CDN: &str = "https://cdn.jsdelivr.net/npm/vega-embed@6";

/// Standalone page that hands `spec` to vega-embed for browser-side rendering.
pub fn render_html(title: &str, spec: &Spec) -> serde_json::Result<String> {
    // Keep `</script>` inside string values from closing the script block.
    let spec_json = serde_json::to_string(spec)?.replace("</", "<\\/");
    let title = escape_html(title);

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("  <meta charset=\"utf-8\">\n");
    out.push_str(&format!("  <title>{title}</title>\n"));
    for src in [VEGA_CDN, VEGA_LITE_CDN, VEGA_EMBED_CDN] {
        out.push_str(&format!("  <script src=\"{src}\"></script>\n"));
    }
    out.push_str("</head>\n<body>\n");
    out.push_str("  <div id=\"vis\"></div>\n");
    out.push_str("  <script type=\"text/javascript\">\n");
    out.push_str(&format!("    const spec = {spec_json};\n"));
    out.push_str("    vegaEmbed('#vis', spec).catch(console.error);\n");
    out.push_str("  </script>\n</body>\n</html>\n");
    Ok(out)
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/html.rs"]
mod tests;
