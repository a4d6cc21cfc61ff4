use deform::page::payload_from_page;
use deform::{load_config, render_payload, render_to_html, Config, DeformError, Payload};
use serde_json::json;
use std::fs;
use tempfile::tempdir;

#[test]
fn config_file_overrides_only_named_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "submit_label = \"Save\"\nerror_list_class = \"errorlist\"\ntrace_level = \"debug\"\n",
    )
    .unwrap();

    let config = load_config(Some(path.as_path())).unwrap();
    assert_eq!(config.submit_label, "Save");
    assert_eq!(config.error_list_class.as_deref(), Some("errorlist"));
    assert_eq!(config.trace_level.as_deref(), Some("debug"));
    assert_eq!(config.field_wrapper_class, "field-wrapper");
    assert!(config.wrap_field);
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = tempdir().unwrap();
    let err = load_config(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(matches!(err, DeformError::Config(msg) if msg.contains("absent.toml")));
}

#[test]
fn invalid_config_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "wrap_label = maybe").unwrap();
    assert!(matches!(Config::from_file(&path), Err(DeformError::Config(_))));
}

#[test]
fn configured_markers_reach_the_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        concat!(
            "submit_label = \"Record\"\n",
            "field_wrapper_class = \"row\"\n",
            "form_wrapper_class = \"txn\"\n",
            "help_text_class = \"hint\"\n",
        ),
    )
    .unwrap();
    let config = Config::from_file(&path).unwrap();

    let form = json!({
        "errors": [],
        "fields": [{
            "label": {"text": "Memo", "attrs": {}},
            "field": {
                "template_name": "django/forms/widgets/text.html",
                "type": "text",
                "name": "memo",
                "attrs": {},
            },
            "errors": [],
            "help_text": "Optional",
        }],
        "hidden_fields": [],
    });
    let html = render_to_html(
        &json!({
            "management_form": {"errors": [], "fields": [], "hidden_fields": []},
            "forms": [form],
        }),
        &config,
    )
    .unwrap();

    assert_eq!(
        html,
        concat!(
            r#"<form><div class="txn"><div class="row"><label>Memo</label>"#,
            r#"<input type="text" name="memo"><span class="hint">Optional</span></div></div>"#,
            r#"<button type="submit">Record</button></form>"#,
        )
    );
}

#[test]
fn page_payload_file_renders() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("page.html");
    fs::write(
        &path,
        r#"<html><body>
<form id="content" method="post"></form>
<script id="deform-data" type="application/json">{"errors": ["Totals <must> balance"], "fields": [], "hidden_fields": []}</script>
</body></html>"#,
    )
    .unwrap();

    let html = fs::read_to_string(&path).unwrap();
    let payload = payload_from_page(&html, "deform-data").unwrap();
    assert!(matches!(payload, Payload::Form(_)));

    let mut form = deform::Element::new("form");
    render_payload(&mut form, &payload, &Config::default()).unwrap();
    assert_eq!(
        form.inner_html(),
        r#"<div><p>Totals &lt;must&gt; balance</p></div><button type="submit">Submit</button>"#
    );
}
