//! Compile every fixture under `tests/fixtures/` and print a one-line summary per form,
//! followed by the rendered HTML of the forms that compiled.
use json_form::sink::{HtmlPage, Workbench};
use json_form::source::SchemaSource;

fn main() {
    let pattern = concat!(env!("CARGO_MANIFEST_DIR"), "/../tests/fixtures/*.json");
    let mut bench = Workbench::new(HtmlPage::new(true, None));
    let mut rendered = Vec::new();

    for entry in glob::glob(pattern).expect("valid fixture pattern") {
        let path = match entry {
            Ok(x) => x,
            Err(error) => {
                eprintln!("❌ unreadable fixture: {error}");
                continue;
            }
        };
        let source = SchemaSource::File(path);
        if bench.load(&source).is_err() {
            eprintln!("❌ {}", source.display_name());
            continue;
        }
        let Some(tree) = bench.sink.tree() else { continue };
        let nodes = serde_json::to_value(tree).map(|v| count_nodes(&v)).unwrap_or_default();
        eprintln!("✅ {}: {} field(s), {nodes} node(s)", source.display_name(), tree.fields.len());
        rendered.push(bench.sink.render(&Default::default()));
    }

    for message in bench.errors.messages() {
        eprintln!("   {message}");
    }
    for html in rendered {
        println!("{html}");
    }
}

fn count_nodes(value: &serde_json::Value) -> usize {
    match value {
        serde_json::Value::Object(map) => {
            usize::from(map.contains_key("node")) + map.values().map(count_nodes).sum::<usize>()
        }
        serde_json::Value::Array(xs) => xs.iter().map(count_nodes).sum(),
        _ => 0,
    }
}
