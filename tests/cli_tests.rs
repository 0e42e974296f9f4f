use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn texrename() -> Command {
    let mut cmd = Command::cargo_bin("texrename").unwrap();
    // Keep the user-level config.json out of reach
    let no_home = std::env::temp_dir().join("texrename-tests-no-home");
    cmd.env_remove("TEXRENAME_CONFIG")
        .env("NO_COLOR", "1")
        .env("HOME", &no_home)
        .env("XDG_CONFIG_HOME", no_home.join(".config"))
        .env("APPDATA", &no_home);
    cmd
}

fn create_texture_library(dir: &std::path::Path) {
    std::fs::write(dir.join("cgaxis_pbr_14_beige_fabric_1_diffuse.jpg"), "").unwrap();
    std::fs::write(dir.join("beige_tiles_2.jpg"), "").unwrap();
    std::fs::create_dir(dir.join("bad folder name")).unwrap();
    std::fs::write(dir.join("bad folder name").join("rock_normal.png"), "").unwrap();
}

#[test]
fn test_help_flag() {
    texrename()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Normalize texture file and folder names"));
}

#[test]
fn test_version_flag() {
    texrename()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_renames_library() {
    let dir = tempdir().unwrap();
    create_texture_library(dir.path());

    texrename()
        .args(["--no-pause", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 files renamed"))
        .stdout(predicate::str::contains("1 folders renamed"));

    assert!(dir.path().join("T_BeigeFabric1_D.jpg").is_file());
    assert!(dir.path().join("T_BeigeTiles2.jpg").is_file());
    assert!(dir.path().join("BadFolderName").join("T_Rock_N.png").is_file());
    assert!(!dir.path().join("bad folder name").exists());
}

#[test]
fn test_progress_on_stderr() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("beige_tiles_2.jpg"), "").unwrap();

    texrename()
        .args(["--no-pause", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("beige_tiles_2.jpg -> T_BeigeTiles2.jpg"));
}

#[test]
fn test_no_folders_flag() {
    let dir = tempdir().unwrap();
    create_texture_library(dir.path());

    texrename()
        .args(["--no-pause", "--no-folders", dir.path().to_str().unwrap()])
        .assert()
        .success();

    assert!(dir
        .path()
        .join("bad folder name")
        .join("T_Rock_N.png")
        .is_file());
}

#[test]
fn test_prefix_and_ext_flags() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("moss_height.tga"), "").unwrap();
    std::fs::write(dir.path().join("moss_diffuse.jpg"), "").unwrap();

    texrename()
        .args([
            "--no-pause",
            "--prefix",
            "TX",
            "--ext",
            "tga",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 files skipped"));

    assert!(dir.path().join("TX_Moss_H.tga").is_file());
    assert!(dir.path().join("moss_diffuse.jpg").is_file());
}

#[test]
fn test_config_file() {
    let dir = tempdir().unwrap();
    let library = dir.path().join("library");
    std::fs::create_dir(&library).unwrap();
    std::fs::write(library.join("poly_haven-brick-wall-albedo.png"), "").unwrap();

    let config = dir.path().join("rules.json");
    std::fs::write(
        &config,
        r#"{
            "delete_prefixes": ["poly_haven"],
            "separators": ["-"],
            "suffix_map": { "albedo": "A" }
        }"#,
    )
    .unwrap();

    texrename()
        .args([
            "--no-pause",
            "--config",
            config.to_str().unwrap(),
            library.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(library.join("T_BrickWall_A.png").is_file());
}

#[test]
fn test_config_from_env() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("rules.json");
    std::fs::write(&config, r#"{ "file_prefix": "ENV" }"#).unwrap();

    texrename()
        .env("TEXRENAME_CONFIG", config.to_str().unwrap())
        .arg("--show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""file_prefix": "ENV""#));
}

#[test]
fn test_show_config_defaults() {
    texrename()
        .arg("--show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""diffuse": "D""#))
        .stdout(predicate::str::contains("cgaxis_pbr_14"));
}

#[test]
fn test_missing_separators() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("rules.json");
    std::fs::write(&config, r#"{ "separators": [] }"#).unwrap();

    texrename()
        .args([
            "--no-pause",
            "--config",
            config.to_str().unwrap(),
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .code(4) // ExitCode::ConfigError
        .stderr(predicate::str::contains("No separators configured"));
}

#[test]
fn test_malformed_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("rules.json");
    std::fs::write(&config, "{ nope").unwrap();

    texrename()
        .args(["--no-pause", "--config", config.to_str().unwrap()])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn test_invalid_file_name_aborts() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("noext"), "").unwrap();

    texrename()
        .args(["--no-pause", dir.path().to_str().unwrap()])
        .assert()
        .code(5) // ExitCode::InvalidName
        .stderr(predicate::str::contains("Invalid file name: 'noext'"));
}

#[test]
fn test_nonexistent_directory() {
    texrename()
        .args(["--no-pause", "/nonexistent/path"])
        .assert()
        .code(3) // ExitCode::DirectoryNotFound
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_file_instead_of_directory() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("file.txt");
    std::fs::write(&file_path, "content").unwrap();

    texrename()
        .args(["--no-pause", file_path.to_str().unwrap()])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_prompts_for_path_and_waits() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("beige_tiles_2.jpg"), "").unwrap();

    texrename()
        .write_stdin(format!("{}\n\n", dir.path().display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Path to rename files"))
        .stdout(predicate::str::contains("Finish! Press enter to exit."));

    assert!(dir.path().join("T_BeigeTiles2.jpg").is_file());
}

#[test]
fn test_closed_stdin_renames_nothing() {
    texrename()
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read path"))
        .stderr(predicate::str::contains("Renaming in").not());
}

#[test]
fn test_waits_after_failure() {
    texrename()
        .arg("/nonexistent/path")
        .write_stdin("\n")
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Press enter to exit"));
}

#[test]
fn test_verbose_flag() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("beige_tiles_2.jpg"), "").unwrap();

    texrename()
        .args(["--no-pause", "-v", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Renamed file"));
}
