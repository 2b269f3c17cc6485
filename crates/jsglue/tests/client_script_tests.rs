//! Runs the generated script under node
//!
//! Every case is evaluated twice: by the emitted `url_for` in node and by
//! `UrlBuilder` in Rust. Both must agree with the expected outcome. Tests
//! are skipped when `node` is not installed.

use std::io::Write;
use std::process::{Command, Stdio};

use jsglue::{generate_js, get_routes, Encoding, Location, RouteTable, UrlBuilder};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn table() -> RouteTable {
    get_routes(
        &[
            ("index", "/"),
            ("show_item", "/item/<id>"),
            ("about_page", "/about"),
            ("post", "/blog/<int:year>/<slug>/comments"),
            ("list", "/items"),
            ("list", "/items/page/<int:page>"),
            ("ctor", "/c/<constructor>"),
        ][..],
    )
}

fn location() -> Location {
    Location::new("https:", "example.com:8080")
}

/// A call to `url_for`; `None` omits the argument object entirely
struct Case {
    endpoint: &'static str,
    args: Option<Value>,
    expected: Result<&'static str, &'static str>,
}

fn case(endpoint: &'static str, args: Value, expected: Result<&'static str, &'static str>) -> Case {
    Case {
        endpoint,
        args: Some(args),
        expected,
    }
}

/// Evaluates `script` plus the cases in node
///
/// Returns `None` when node is unavailable.
fn run_in_node(script: &str, cases: &[Case]) -> Option<Value> {
    let calls: Vec<Value> = cases
        .iter()
        .map(|c| match &c.args {
            Some(args) => json!({"endpoint": c.endpoint, "args": args}),
            None => json!({"endpoint": c.endpoint}),
        })
        .collect();

    let harness = format!(
        r#"var location = {{ protocol: 'https:', host: 'example.com:8080' }};
{script}
var cases = {cases};
function run(c) {{
  try {{
    return {{ url: 'args' in c ? JSGlue.url_for(c.endpoint, c.args) : JSGlue.url_for(c.endpoint) }};
  }} catch (e) {{
    return {{ error: e.name, message: e.message }};
  }}
}}
var caller = {{ id: 3, _external: true, _anchor: 'a' }};
JSGlue.url_for('show_item', caller);
process.stdout.write(JSON.stringify({{ results: cases.map(run), caller: caller }}));
"#,
        script = script,
        cases = Value::Array(calls),
    );

    let mut child = match Command::new("node")
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            eprintln!("skipping: node is not available ({})", e);
            return None;
        }
    };

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(harness.as_bytes())
        .expect("write harness to node");
    let output = child.wait_with_output().expect("wait for node");
    assert!(
        output.status.success(),
        "node failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    Some(serde_json::from_slice(&output.stdout).expect("node prints JSON"))
}

/// Checks node's results and `UrlBuilder` against each case
fn assert_cases(encoding: Encoding, cases: &[Case]) {
    let table = table();
    let script = generate_js(&table, "JSGlue", encoding).unwrap();
    let Some(output) = run_in_node(&script, cases) else {
        return;
    };

    let location = location();
    let builder = UrlBuilder::new(&table).with_location(&location).with_encoding(encoding);

    for (case, js) in cases.iter().zip(output["results"].as_array().unwrap()) {
        let rust = builder.build_value(case.endpoint, case.args.as_ref());
        let context = format!("{} {:?}", case.endpoint, case.args);

        match case.expected {
            Ok(url) => {
                assert_eq!(js["url"].as_str(), Some(url), "node: {}", context);
                assert_eq!(rust.as_deref(), Ok(url), "rust: {}", context);
            }
            Err(name) => {
                let err = rust.unwrap_err();
                assert_eq!(js["error"].as_str(), Some(name), "node: {}", context);
                assert_eq!(err.name(), name, "rust: {}", context);
                let has_control_keys = case
                    .args
                    .as_ref()
                    .and_then(Value::as_object)
                    .map_or(false, |o| o.keys().any(|k| k.starts_with('_')));
                if !has_control_keys || name != "BuildError" {
                    assert_eq!(js["message"].as_str(), Some(err.to_string().as_str()), "{}", context);
                }
            }
        }
    }
}

#[test]
fn test_script_matches_builder() {
    assert_cases(
        Encoding::Raw,
        &[
            case("show_item", json!({"id": 5, "highlight": true}), Ok("/item/5?highlight=true")),
            Case {
                endpoint: "about_page",
                args: None,
                expected: Ok("/about"),
            },
            case("post", json!({"year": 2024, "slug": "hello"}), Ok("/blog/2024/hello/comments")),
            case("post", json!({"slug": "s", "year": 1}), Ok("/blog/1/s/comments")),
            case(
                "show_item",
                json!({"b": 2, "id": 7, "_private": "x", "a": "one"}),
                Ok("/item/7?b=2&a=one"),
            ),
            case("show_item", json!({"id": 1, "q": "x", "_anchor": "top"}), Ok("/item/1?q=x#top")),
            case("index", json!({"_anchor": "main"}), Ok("/#main")),
            case("list", json!({"page": 3}), Ok("/items/page/3")),
            case("list", json!({}), Ok("/items")),
            case("post", json!({"year": 2024}), Err("BuildError")),
            case("nope", json!({}), Err("BuildError")),
        ],
    );
}

#[test]
fn test_script_external_and_scheme() {
    assert_cases(
        Encoding::Raw,
        &[
            case(
                "show_item",
                json!({"id": 1, "_external": true}),
                Ok("https://example.com:8080/item/1"),
            ),
            case(
                "show_item",
                json!({"id": 1, "_external": true, "_scheme": "ftp"}),
                Ok("ftp://example.com:8080/item/1"),
            ),
            case(
                "index",
                json!({"_external": true, "_anchor": "top", "q": 1}),
                Ok("https://example.com:8080/?q=1#top"),
            ),
            case("show_item", json!({"id": 1, "_scheme": "https"}), Err("ValueError")),
            case(
                "show_item",
                json!({"id": 1, "_external": false, "_scheme": "https"}),
                Err("ValueError"),
            ),
        ],
    );
}

#[test]
fn test_script_rejects_non_objects() {
    assert_cases(
        Encoding::Raw,
        &[
            case("index", json!("id=1"), Err("TypeError")),
            case("index", json!(5), Err("TypeError")),
            case("index", json!(null), Err("TypeError")),
            case("index", json!([1]), Err("TypeError")),
        ],
    );
}

#[test]
fn test_script_ignores_inherited_properties() {
    assert_cases(
        Encoding::Raw,
        &[
            case("ctor", json!({}), Err("BuildError")),
            case("ctor", json!({"constructor": "x"}), Ok("/c/x")),
        ],
    );
}

#[test]
fn test_script_value_coercion() {
    assert_cases(
        Encoding::Raw,
        &[
            case("show_item", json!({"id": null, "tags": ["a", "b"]}), Ok("/item/null?tags=a,b")),
            case(
                "show_item",
                json!({"id": 1, "big": 1e21, "small": 1e-7, "neg": -0.0, "half": 0.5}),
                Ok("/item/1?big=1e+21&small=1e-7&neg=0&half=0.5"),
            ),
            case("show_item", json!({"id": 1, "q": "a b&c", "_anchor": "x y"}), Ok("/item/1?q=a b&c#x y")),
        ],
    );
}

#[test]
fn test_script_percent_encoding() {
    assert_cases(
        Encoding::Percent,
        &[case(
            "show_item",
            json!({"id": "a b", "q": "a b&c", "_anchor": "x y"}),
            Ok("/item/a b?q=a%20b%26c#x%20y"),
        )],
    );
}

#[test]
fn test_script_leaves_caller_arguments_untouched() {
    let table = table();
    let script = generate_js(&table, "JSGlue", Encoding::Raw).unwrap();
    let Some(output) = run_in_node(&script, &[]) else {
        return;
    };
    assert_eq!(output["caller"], json!({"id": 3, "_external": true, "_anchor": "a"}));
}
