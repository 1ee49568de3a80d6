use crate::add_test;
use crate::common::Fixture;

// Piped hosts are split on every supported delimiter
add_test!(piped_hosts_are_tokenized, async {
    let mut fixture = Fixture::new();
    let stdin = "x3000c0s1b0, x3000c0s2b0;x3000c0s3b0|x3000c0s4b0\n\u{3000}x3000c0s5b0\u{00A0}\n";

    let output = fixture.run_with_stdin(&["hosts"], stdin.as_bytes()).await;
    assert!(output.status.success());
    assert_eq!(
        output.stdout,
        "x3000c0s1b0\nx3000c0s2b0\nx3000c0s3b0\nx3000c0s4b0\nx3000c0s5b0\n"
    );
});

// Piped hosts take precedence over arguments
add_test!(piped_hosts_override_arguments, async {
    let mut fixture = Fixture::new();

    let output = fixture
        .run_with_stdin(&["hosts", "ignored"], b"ncn-m001 ncn-m002")
        .await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "ncn-m001\nncn-m002\n");
});

// An empty pipe yields no hosts rather than an error
add_test!(empty_pipe_yields_nothing, async {
    let mut fixture = Fixture::new();

    let output = fixture.run_with_stdin(&["hosts"], b" ,;| \n").await;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
});

// JSON output is an array of hosts
add_test!(hosts_as_json, async {
    let mut fixture = Fixture::new();

    let output = fixture
        .run_with_stdin(&["hosts", "--json"], b"b-host\na-host\n")
        .await;
    assert!(output.status.success());

    let hosts: Vec<String> = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(hosts, ["b-host", "a-host"]);
});

// Large piped lists are read completely
add_test!(large_piped_list, async {
    let mut fixture = Fixture::new();
    let hosts: Vec<String> = (0..20_000).map(|i| format!("node{i:05}")).collect();
    let stdin = hosts.join("\n");

    let output = fixture.run_with_stdin(&["hosts"], stdin.as_bytes()).await;
    assert!(output.status.success());
    assert_eq!(output.stdout.lines().collect::<Vec<_>>(), hosts);
});
