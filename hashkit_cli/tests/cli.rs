use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{NamedTempFile, TempDir};

/// Command isolated from the user's configuration and environment
fn hashkit(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hashkit").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("HASHKIT_HASHING__DEFAULT_ALGORITHM")
        .env_remove("HASHKIT_HASHING__DEFAULT_ENCODING")
        .env_remove("HASHKIT_OUTPUT__DEFAULT_FORMAT");
    cmd
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    hashkit(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_hash_sha256_abc() {
    let home = TempDir::new().unwrap();
    hashkit(&home)
        .args(["hash", "abc", "--algorithm", "sha256"])
        .assert()
        .success()
        .stdout("SHA-256: BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD\n");
}

#[test]
fn test_hash_md5_empty_string() {
    let home = TempDir::new().unwrap();
    hashkit(&home)
        .args(["hash", "", "-a", "md5"])
        .assert()
        .success()
        .stdout("MD5: D41D8CD98F00B204E9800998ECF8427E\n");
}

#[test]
fn test_hash_crc32_variable_width() {
    let home = TempDir::new().unwrap();
    hashkit(&home)
        .args(["hash", "", "-a", "crc32"])
        .assert()
        .success()
        .stdout("CRC-32: 0\n");

    hashkit(&home)
        .args(["hash", "hello world", "-a", "crc32"])
        .assert()
        .success()
        .stdout("CRC-32: D4A1185\n");
}

#[test]
fn test_hash_all_lists_every_algorithm() {
    let home = TempDir::new().unwrap();
    hashkit(&home)
        .args(["hash", "abc", "--algorithm", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SHA-256:"))
        .stdout(predicate::str::contains("SHA-512:"))
        .stdout(predicate::str::contains("CRC-32: 352441C2"))
        .stdout(predicate::str::contains("MD5: 900150983CD24FB0D6963F7D28E17F72"));
}

#[test]
fn test_hash_file() {
    let home = TempDir::new().unwrap();
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(temp_file.path(), b"abc").unwrap();

    hashkit(&home)
        .arg("hash")
        .arg("--file")
        .arg(temp_file.path())
        .args(["-a", "md5"])
        .assert()
        .success()
        .stdout("MD5: 900150983CD24FB0D6963F7D28E17F72\n");
}

#[test]
fn test_hash_missing_file_exit_code() {
    let home = TempDir::new().unwrap();
    hashkit(&home)
        .args(["hash", "--file", "/definitely/not/here.bin"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_hash_stdin() {
    let home = TempDir::new().unwrap();
    hashkit(&home)
        .args(["hash", "-a", "crc32"])
        .write_stdin("123456789")
        .assert()
        .success()
        .stdout("CRC-32: CBF43926\n");
}

#[test]
fn test_hash_with_encoding() {
    let home = TempDir::new().unwrap();
    hashkit(&home)
        .args(["hash", "é", "-a", "md5", "-E", "iso-8859-1"])
        .assert()
        .success()
        .stdout("MD5: 3406877694691DDD1DFB0ACA54681407\n");
}

#[test]
fn test_unencodable_text_is_usage_error() {
    let home = TempDir::new().unwrap();
    hashkit(&home)
        .args(["hash", "é", "-E", "us-ascii"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("US-ASCII"));
}

#[test]
fn test_unknown_encoding_is_usage_error() {
    let home = TempDir::new().unwrap();
    hashkit(&home)
        .args(["hash", "abc", "-E", "klingon"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("klingon"));
}

#[test]
fn test_json_output() {
    let home = TempDir::new().unwrap();
    let output = hashkit(&home)
        .args(["hash", "abc", "-a", "crc32", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["input"], "abc");
    assert_eq!(value[0]["algorithm"], "CRC-32");
    assert_eq!(value[0]["hash"], "352441C2");
}

#[test]
fn test_default_algorithm_from_config_file() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("hashkit");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[hashing]\ndefault_algorithm = \"md5\"\n",
    )
    .unwrap();

    hashkit(&home)
        .args(["hash", ""])
        .assert()
        .success()
        .stdout("MD5: D41D8CD98F00B204E9800998ECF8427E\n");
}

#[test]
fn test_default_algorithm_from_env() {
    let home = TempDir::new().unwrap();
    hashkit(&home)
        .env("HASHKIT_HASHING__DEFAULT_ALGORITHM", "crc32")
        .args(["hash", "123456789"])
        .assert()
        .success()
        .stdout("CRC-32: CBF43926\n");
}

#[test]
fn test_algorithms_command() {
    let home = TempDir::new().unwrap();
    hashkit(&home)
        .arg("algorithms")
        .assert()
        .success()
        .stdout(predicate::str::contains("SHA-256"))
        .stdout(predicate::str::contains("64 bytes"))
        .stdout(predicate::str::contains("variable"))
        .stdout(predicate::str::contains("MD5"));
}

#[test]
fn test_config_path_and_get() {
    let home = TempDir::new().unwrap();
    hashkit(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hashkit"))
        .stdout(predicate::str::contains("config.toml"));

    hashkit(&home)
        .args(["config", "get", "hashing.default_encoding"])
        .assert()
        .success()
        .stdout("utf-8\n");
}
