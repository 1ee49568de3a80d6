use crate::add_test;
use crate::common::{aligned, Fixture, MILAN_DESCRIPTOR, SHADOWING_DESCRIPTOR};

// A single attribute is described under its decoded name
add_test!(describe_attribute, async {
    let mut fixture = Fixture::new();

    let output = fixture.run(&["attributes", "Rome0039"]).await;
    assert!(output.status.success());

    let lines: Vec<&str> = output.stdout.lines().collect();
    assert_eq!(lines[0], "Rome0039 (SVM Mode):");
    assert!(lines.contains(&aligned("\t", "DisplayName", "SVM Mode").as_str()));
    assert!(lines.contains(&aligned("\t", "ReadOnly", "false").as_str()));
    assert!(lines.contains(&aligned("\t", "DefaultValue", "Auto").as_str()));
    assert!(lines.contains(&"\tChoices:"));
    assert!(lines.contains(&format!("\t\t{:<60}", "Enabled (Enabled)").as_str()));
});

// Unknown attributes fail with a message on stderr
add_test!(describe_unknown_attribute, async {
    let mut fixture = Fixture::new();

    let output = fixture.run(&["attributes", "Nope"]).await;
    assert!(!output.status.success());
    assert!(output.stderr.contains("gru: Nope: unknown attribute"));
});

// Listing everything in JSON includes registered extras
add_test!(list_attributes_json, async {
    let mut fixture = Fixture::with_files(
        &["Milan0039.json", "Rome0039.json"],
        &[MILAN_DESCRIPTOR, SHADOWING_DESCRIPTOR],
    );
    let dir = fixture.root_dir_path().display().to_string();

    let output = fixture
        .run(&["attributes", "--json", "--attributes-dir", &dir])
        .await;
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(parsed["Milan0039"]["DisplayName"], "SVM Mode");
    assert_eq!(parsed["Rome0039"]["DisplayName"], "SVM Mode");
    assert_eq!(parsed["Temp1ThresholdCritical"]["DefaultValue"], 95);
    assert_eq!(parsed["Rome0001"]["Choices"][2], "Auto (Auto)");
});

// Skipped duplicates are logged at the default level
add_test!(duplicate_attribute_warns, async {
    let mut fixture = Fixture::with_file("Rome0039.json", SHADOWING_DESCRIPTOR);
    let dir = fixture.root_dir_path().display().to_string();

    let output = fixture
        .run(&["attributes", "--attributes-dir", &dir, "Rome0039"])
        .await;
    assert!(output.status.success());
    assert!(output.stdout.starts_with("Rome0039 (SVM Mode):"));
    assert!(output.stderr.contains("already exists"));
});

// A malformed extra descriptor aborts the run
add_test!(malformed_attribute_document, async {
    let mut fixture = Fixture::with_file("broken.json", "{\"AttributeName\": ");
    let dir = fixture.root_dir_path().display().to_string();

    let output = fixture.run(&["attributes", "--attributes-dir", &dir]).await;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.starts_with("gru: "));
    assert!(output.stderr.contains("broken.json"));
});
