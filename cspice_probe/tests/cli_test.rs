use std::io::Write;
use std::process::Command;

fn probe() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cspice_probe"));
    cmd.env_remove("CSPICE_LIB");
    cmd
}

#[test]
fn missing_library() {
    let out = probe().args(["--lib", "/nonexistent/libcspice.so"]).output().unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("/nonexistent/libcspice.so"), "{stderr}");
}

#[test]
fn not_a_library() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"definitely not an ELF file").unwrap();

    let out = probe().arg("--lib").arg(file.path()).output().unwrap();
    assert!(!out.status.success());
}

#[test]
fn help() {
    let out = probe().arg("--help").output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("--kernel"));
    assert!(stdout.contains("--missing"));
}
