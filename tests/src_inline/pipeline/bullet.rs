use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::report::ToolMeta;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_ctx(write_html: bool) -> RunContext {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("bulletband_bullet_{}_{}", std::process::id(), id));
    RunContext {
        out_dir: dir,
        write_html,
        tool: ToolMeta {
            name: "bulletband".to_string(),
            version: "test".to_string(),
        },
    }
}

#[test]
fn test_run_bullet_writes_outputs() {
    let ctx = make_ctx(true);
    let config = BulletConfig {
        data_path: None,
        params: BulletParams::default_v1(),
    };
    let written = run_bullet(&config, &ctx).unwrap();
    assert_eq!(written.summary, ctx.out_dir.join("bullet.summary.json"));

    let spec: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&written.spec).unwrap()).unwrap();
    assert_eq!(spec["facet"]["row"]["field"], "title");

    let html = fs::read_to_string(written.html.as_ref().unwrap()).unwrap();
    assert!(html.contains("vegaEmbed"));

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&written.summary).unwrap()).unwrap();
    assert_eq!(summary["chart"], "bullet");
    assert_eq!(summary["source"], "built-in");
    assert_eq!(summary["n_records"], 5);
    assert_eq!(summary["n_layers"], 6);
    assert_eq!(summary["tool"]["version"], "test");
    assert!(summary["unsorted_thresholds"].as_array().unwrap().is_empty());
}

#[test]
fn test_run_bullet_from_file_without_html() {
    let ctx = make_ctx(false);
    fs::create_dir_all(&ctx.out_dir).unwrap();
    let data_path = ctx.out_dir.join("kpi.tsv");
    fs::write(
        &data_path,
        "title\tsubtitle\trange1\trange2\trange3\tmeasure1\tmeasure2\tmarker\n\
         Latency\tms\t300\t200\t100\t150\t180\t120\n",
    )
    .unwrap();

    let config = BulletConfig {
        data_path: Some(data_path),
        params: BulletParams::default_v1(),
    };
    let written = run_bullet(&config, &ctx).unwrap();
    assert!(written.html.is_none());
    assert!(!ctx.out_dir.join(HTML_FILE).exists());

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&written.summary).unwrap()).unwrap();
    assert_eq!(summary["n_records"], 1);
    assert_eq!(summary["unsorted_thresholds"][0], "Latency");
}

#[test]
fn test_run_bullet_missing_file_fails() {
    let ctx = make_ctx(false);
    let config = BulletConfig {
        data_path: Some(ctx.out_dir.join("does-not-exist.tsv")),
        params: BulletParams::default_v1(),
    };
    assert!(matches!(
        run_bullet(&config, &ctx),
        Err(AppError::Input(_))
    ));
}
