use std::process::Command;

#[test]
fn test_version_flag() {
    let binary_path = env!("CARGO_BIN_EXE_marquee");

    let output = Command::new(binary_path)
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(
        output.status.success(),
        "Version flag should exit with code 0"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        format!("marquee {}", env!("CARGO_PKG_VERSION")),
        "Version output should be '<name> <version>'"
    );
}

#[test]
fn test_unknown_flag_fails_before_terminal_setup() {
    let output = Command::new(env!("CARGO_BIN_EXE_marquee"))
        .arg("--definitely-not-a-flag")
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--definitely-not-a-flag"));
}
