use crate::add_test;
use crate::common::{aligned, Fixture, RESULT_SET};

fn expected_text() -> Vec<String> {
    vec![
        "x3000c0s1b0:".to_string(),
        aligned("\t", "PowerState", "On"),
        "\tBootOrder:".to_string(),
        "x3000c0s2b0:".to_string(),
        aligned("\t", "PowerState", "Off"),
        "\tBootOrder:".to_string(),
        format!("\t\t{:<60}", "UefiHttp"),
        format!("\t\t{:<60}", "Pxe"),
        "\tAttributes:".to_string(),
        aligned("\t\t", "Rome0001 (SMT Control)", "Auto"),
        aligned("\t\t", "Rome0039 (SVM Mode)", "Enabled"),
        aligned("\t\t", "Unknown123", "7"),
    ]
}

// Render a result set file as text
add_test!(render_file_as_text, async {
    let mut fixture = Fixture::with_file("results.json", RESULT_SET);
    let path = fixture.path("results.json");

    let output = fixture.run(&["render", &path]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout.lines().collect::<Vec<_>>(), expected_text());
});

// Render a result set piped through stdin
add_test!(render_stdin_as_text, async {
    let mut fixture = Fixture::new();

    let output = fixture
        .run_with_stdin(&["render", "-"], RESULT_SET.as_bytes())
        .await;
    assert!(output.status.success());
    assert_eq!(output.stdout.lines().collect::<Vec<_>>(), expected_text());

    let output = fixture
        .run_with_stdin(&["render"], RESULT_SET.as_bytes())
        .await;
    assert!(output.status.success());
    assert_eq!(output.stdout.lines().collect::<Vec<_>>(), expected_text());
});

// JSON rendering round-trips the result set
add_test!(render_as_json, async {
    let mut fixture = Fixture::with_file("results.json", RESULT_SET);
    let path = fixture.path("results.json");

    let output = fixture.run(&["render", "--json", &path]).await;
    assert!(output.status.success());
    assert!(output.stdout.starts_with("{\n  \"x3000c0s1b0\": {\n    \"PowerState\": \"On\""));

    let rendered: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    let original: serde_json::Value = serde_json::from_str(RESULT_SET).unwrap();
    assert_eq!(rendered, original);
});

// Invalid input is reported with the file name
add_test!(render_invalid_input, async {
    let mut fixture = Fixture::with_file("bad.json", "{\"host\": \"On\"}");
    let path = fixture.path("bad.json");

    let output = fixture.run(&["render", &path]).await;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        output.stderr.trim_end(),
        format!("gru: {path}: host: expected an object of fields")
    );
});

// Missing input files are reported
add_test!(render_missing_file, async {
    let mut fixture = Fixture::new();
    let path = fixture.path("missing.json");

    let output = fixture.run(&["render", &path]).await;
    assert!(!output.status.success());
    assert!(output.stderr.starts_with(&format!("gru: {path}: ")));
});
