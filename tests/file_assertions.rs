//! Integration tests for file- and directory-flagged terminals.

use std::fs;

use expect_chain::expect;
use tempfile::TempDir;

fn fixture_dir() -> TempDir {
    TempDir::new().expect("temp dir should be creatable")
}

#[test]
fn file_exists() {
    let dir = fixture_dir();
    let path = dir.path().join("present.txt");
    fs::write(&path, "hello").unwrap();

    expect(path.to_str().unwrap()).file().exists();
}

#[test]
fn file_does_not_exist() {
    let dir = fixture_dir();
    let path = dir.path().join("absent.txt");

    expect(path.to_str().unwrap()).not().file().exists();
}

#[test]
fn directory_exists() {
    let dir = fixture_dir();

    expect(dir.path().to_str().unwrap()).directory().exists();
}

#[test]
#[should_panic(expected = "assertion failed")]
fn missing_file_fails_exists() {
    let dir = fixture_dir();
    let path = dir.path().join("absent.txt");

    expect(path.to_str().unwrap()).file().exists();
}

#[test]
fn file_contents_contain() {
    let dir = fixture_dir();
    let path = dir.path().join("log.txt");
    fs::write(&path, "deploy ok\nworker started\n").unwrap();

    expect(path.to_str().unwrap()).file().contain("worker started");
    expect(path.to_str().unwrap())
        .not()
        .file()
        .contain("worker crashed");
}

#[test]
fn unreadable_file_is_a_failing_containment_not_a_panic() {
    let dir = fixture_dir();
    let path = dir.path().join("absent.log");

    // The read fails, so there is nothing to search; with negation the
    // terminal passes instead of erroring out.
    expect(path.to_str().unwrap()).not().file().contain("anything");
}

#[test]
fn file_equal_compares_contents() {
    let dir = fixture_dir();
    let left = dir.path().join("left.bin");
    let right = dir.path().join("right.bin");
    let other = dir.path().join("other.bin");
    fs::write(&left, [1u8, 2, 3]).unwrap();
    fs::write(&right, [1u8, 2, 3]).unwrap();
    fs::write(&other, [9u8]).unwrap();

    expect(left.to_str().unwrap())
        .file()
        .equal(right.to_str().unwrap());
    expect(left.to_str().unwrap())
        .not()
        .file()
        .equal(other.to_str().unwrap());
}

#[test]
fn file_flag_bypasses_length_derivation() {
    let dir = fixture_dir();
    let left = dir.path().join("a.txt");
    let right = dir.path().join("b.txt");
    fs::write(&left, "same").unwrap();
    fs::write(&right, "same").unwrap();

    // Even with the length flag set, file mode compares contents.
    expect(left.to_str().unwrap())
        .file()
        .length()
        .equal(right.to_str().unwrap());
}

#[test]
fn readable_and_writable() {
    let dir = fixture_dir();
    let path = dir.path().join("data.txt");
    fs::write(&path, "contents").unwrap();

    expect(path.to_str().unwrap()).file().readable();
    expect(path.to_str().unwrap()).file().writable();
    expect(dir.path().to_str().unwrap()).directory().readable();
}

#[test]
#[cfg(unix)]
fn readonly_file_is_not_writable() {
    let dir = fixture_dir();
    let path = dir.path().join("frozen.txt");
    fs::write(&path, "contents").unwrap();

    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_readonly(true);
    fs::set_permissions(&path, perms).unwrap();

    expect(path.to_str().unwrap()).not().file().writable();
}

#[test]
fn missing_path_is_neither_readable_nor_writable() {
    let dir = fixture_dir();
    let path = dir.path().join("gone.txt");

    expect(path.to_str().unwrap()).not().file().readable();
    expect(path.to_str().unwrap()).not().file().writable();
}
