//! CLI integration tests for jeb-helper
//!
//! Every test points the tool at a temporary settings file and catalogue so
//! nothing from the user's real configuration leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary workspace for one test
struct TestFiles {
    _temp_dir: TempDir,
    dir: PathBuf,
}

impl TestFiles {
    fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_path_buf();
        Self { _temp_dir: temp_dir, dir }
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Command isolated from user settings; uses the bundled catalogue
    /// unless `jeb-api.txt` was written into the workspace
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("jeb-helper").unwrap();
        cmd.env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.path("settings.toml"))
            .arg("--catalogue")
            .arg(self.path("jeb-api.txt"));
        cmd
    }
}

#[test]
fn test_cli_version() {
    Command::cargo_bin("jeb-helper")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_resolve_from_bundled_catalogue() {
    let files = TestFiles::new();
    files
        .cmd()
        .args(["resolve", "IScript"])
        .assert()
        .success()
        .stdout("com.pnfsoftware.jeb.client.api.IScript\n");
}

#[test]
fn test_resolve_unknown_type_fails() {
    let files = TestFiles::new();
    files
        .cmd()
        .args(["resolve", "NoSuchType"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a type in the API catalogue"));
}

#[test]
fn test_user_catalogue_overrides_bundled() {
    let files = TestFiles::new();
    files.write("jeb-api.txt", "class;1;IScript;org.custom;org.custom.IScript;;;;;\n");
    files
        .cmd()
        .args(["resolve", "IScript"])
        .assert()
        .success()
        .stdout("org.custom.IScript\n");
}

#[test]
fn test_corrupt_user_catalogue_is_reported() {
    let files = TestFiles::new();
    files.write("jeb-api.txt", "class;1;Foo;p;p.Foo;;;;missingParen;\n");
    files
        .cmd()
        .args(["resolve", "Foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt catalogue entry at line 1"));
}

#[test]
fn test_import_prints_statement() {
    let files = TestFiles::new();
    files
        .cmd()
        .args(["import", "IDexUnit"])
        .assert()
        .success()
        .stdout("from com.pnfsoftware.jeb.core.units.code.android import IDexUnit\n");
}

#[test]
fn test_import_writes_into_script() {
    let files = TestFiles::new();
    let script = files.write(
        "Dump.py",
        "# -*- coding: utf-8 -*-\nfrom com.pnfsoftware.jeb.client.api import IScript\n\nclass Dump(IScript):\n\tpass\n",
    );

    files
        .cmd()
        .args(["import", "IUnit", "--write", "--file"])
        .arg(&script)
        .assert()
        .success();

    let updated = fs::read_to_string(&script).unwrap();
    assert_eq!(
        updated,
        "# -*- coding: utf-8 -*-\nfrom com.pnfsoftware.jeb.client.api import IScript\nfrom com.pnfsoftware.jeb.core.units import IUnit\n\nclass Dump(IScript):\n\tpass\n"
    );

    // second run is a no-op
    files
        .cmd()
        .args(["import", "IUnit", "--write", "--file"])
        .arg(&script)
        .assert()
        .success()
        .stderr(predicate::str::contains("Already imported"));
    assert_eq!(fs::read_to_string(&script).unwrap(), updated);
}

#[test]
fn test_doc_url() {
    let files = TestFiles::new();
    files
        .cmd()
        .args(["doc", "IScript"])
        .assert()
        .success()
        .stdout("https://www.pnfsoftware.com/jeb/apidoc/reference/com/pnfsoftware/jeb/client/api/IScript.html\n");
}

#[test]
fn test_doc_base_from_settings() {
    let files = TestFiles::new();
    files.write("settings.toml", "doc_base_url = \"http://localhost:9000/apidoc\"\n");
    files
        .cmd()
        .args(["doc", "com.pnfsoftware.jeb.util.collect.MultiMap.Entry"])
        .assert()
        .success()
        .stdout("http://localhost:9000/apidoc/reference/com/pnfsoftware/jeb/util/collect/MultiMap.Entry.html\n");
}

#[test]
fn test_complete_members_and_types() {
    let files = TestFiles::new();
    files
        .cmd()
        .args(["complete", "ctx.get"])
        .assert()
        .success()
        .stdout(predicate::str::contains("getMainProject()\tIClientContext"));

    files
        .cmd()
        .args(["complete", "class A(IS"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IScript\tclient.api.IScript"))
        .stdout(predicate::str::contains("getMainProject()").not());
}

#[test]
fn test_info_json() {
    let files = TestFiles::new();
    let output = files.cmd().args(["info", "IScript"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["record"]["kind"], "interface");
    assert_eq!(value["record"]["methods"][0], "run(ctx:IClientContext)");
    assert_eq!(
        value["import"],
        "from com.pnfsoftware.jeb.client.api import IScript"
    );
}

#[test]
fn test_new_script() {
    let files = TestFiles::new();
    files
        .cmd()
        .args(["new-script", "DumpStrings", "--dir"])
        .arg(&files.dir)
        .assert()
        .success();

    let script = fs::read_to_string(files.path("DumpStrings.py")).unwrap();
    assert!(script.contains("class DumpStrings(IScript):"));

    // refuses to clobber without --force
    files
        .cmd()
        .args(["new-script", "DumpStrings", "--dir"])
        .arg(&files.dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_new_script_rejects_bad_name() {
    let files = TestFiles::new();
    files
        .cmd()
        .args(["new-script", "9lives", "--dir"])
        .arg(&files.dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("illegal script name"));
    assert!(!files.path("9lives.py").exists());
}

#[test]
fn test_failed_update_leaves_catalogue_untouched() {
    let files = TestFiles::new();
    let existing = "class;1;Keep;p;p.Keep;;;;;\n";
    let catalogue = files.write("jeb-api.txt", existing);

    files
        .cmd()
        .args(["update", "--url", "http://127.0.0.1:1/jeb-api.txt", "--output"])
        .arg(&catalogue)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to download"));

    assert_eq!(fs::read_to_string(&catalogue).unwrap(), existing);
    files
        .cmd()
        .args(["resolve", "Keep"])
        .assert()
        .success()
        .stdout("p.Keep\n");
}
