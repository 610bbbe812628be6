use super::*;
use crate::chart::Spec;

#[test]
fn test_html_embeds_spec() {
    let spec = Spec {
        title: Some("a </script> title".to_string()),
        ..Spec::top_level()
    };
    let html = render_html("KPI <bullets>", &spec).unwrap();
    assert!(html.contains("<title>KPI &lt;bullets&gt;</title>"));
    assert!(html.contains("vega-embed@6"));
    assert!(html.contains("vegaEmbed('#vis', spec)"));
    assert!(html.contains("a <\\/script> title"));
    assert_eq!(html.matches("</script>").count(), 4);
}

#[test]
fn test_escape_html() {
    assert_eq!(escape_html(r#"a&b"c"#), "a&amp;b&quot;c");
}
