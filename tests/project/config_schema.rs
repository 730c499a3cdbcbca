use linksieve::{Config, extract_links};

#[test]
fn minimal_config_deserializes_with_defaults() {
    let parsed = Config::from_toml_str("").expect("empty config should deserialize");

    assert!(parsed.links.enabled);
    assert_eq!(parsed.links.max_links_per_message, 3);
}

#[test]
fn loaded_config_drives_extraction() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[links]
max_links_per_message = 1
"#,
    )
    .expect("write config");

    let config = Config::load(&path).expect("config should load");
    let links = extract_links(
        "https://first.example https://second.example",
        &config.links,
    );

    assert_eq!(links, vec!["https://first.example"]);
}

#[test]
fn disabled_links_section_turns_extraction_off() {
    let config =
        Config::from_toml_str("[links]\nenabled = false\n").expect("config should deserialize");

    assert!(extract_links("https://example.com", &config.links).is_empty());
}
