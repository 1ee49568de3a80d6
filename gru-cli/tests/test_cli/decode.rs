use crate::add_test;
use crate::common::{Fixture, MILAN_DESCRIPTOR};

// Known keys gain their display name, unknown keys pass through
add_test!(decode_text, async {
    let mut fixture = Fixture::new();

    let output = fixture
        .run(&["decode", "Temp1ThresholdCritical", "Unknown123"])
        .await;
    assert!(output.status.success());
    assert_eq!(
        output.stdout,
        "Temp1ThresholdCritical (CPU1 Critical Temperature)\nUnknown123\n"
    );
});

// JSON mode keeps canonical names
add_test!(decode_json, async {
    let mut fixture = Fixture::new();

    let output = fixture.run(&["--json", "decode", "Rome0039", "Nope"]).await;
    assert!(output.status.success());

    let decoded: Vec<String> = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(decoded, ["Rome0039", "Nope"]);
});

// Attributes from an extra directory are decoded too
add_test!(decode_with_attributes_dir, async {
    let mut fixture = Fixture::with_file("Milan0039.json", MILAN_DESCRIPTOR);
    let dir = fixture.root_dir_path().display().to_string();

    let output = fixture
        .run(&["decode", "--attributes-dir", &dir, "Milan0039"])
        .await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "Milan0039 (SVM Mode)\n");
});

// Decode requires at least one key
add_test!(decode_without_keys, async {
    let mut fixture = Fixture::new();

    let output = fixture.run(&["decode"]).await;
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
});
