use maint_core::api::{run_cleanup, CleanupConfig, Console};
use pretty_assertions::assert_eq;

#[test]
fn removes_known_directories_caches_and_scratch_files_only() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    std::fs::create_dir_all(root.join("cache/pages")).unwrap();
    std::fs::create_dir_all(root.join("build/lib")).unwrap();
    std::fs::create_dir_all(root.join("src/weread/__pycache__")).unwrap();
    std::fs::create_dir_all(root.join("src/weread")).unwrap();
    std::fs::write(root.join("main.py"), "print('scratch')").unwrap();
    std::fs::write(root.join("README.md"), "# keep").unwrap();
    std::fs::write(root.join("src/weread/app.py"), "pass").unwrap();

    let console = Console::buffer();
    let report = run_cleanup(&console, &CleanupConfig::default(), root);

    assert_eq!(report.exit_code(), 0);
    assert!(!root.join("cache").exists());
    assert!(!root.join("build").exists());
    assert!(!root.join("main.py").exists());
    assert!(!root.join("src/weread/__pycache__").exists());
    assert!(root.join("README.md").exists());
    assert!(root.join("src/weread/app.py").exists());
    assert_eq!(report.results.len(), 4);
}

#[test]
fn removal_failure_is_reported_but_other_targets_still_go() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    // A directory where a file is expected cannot be removed as a file.
    std::fs::create_dir_all(root.join("webpage.html")).unwrap();
    std::fs::write(root.join("screenshot.jpg"), [0xff, 0xd8]).unwrap();
    std::fs::create_dir_all(root.join("dist")).unwrap();

    let console = Console::buffer();
    let report = run_cleanup(&console, &CleanupConfig::default(), root);

    assert_eq!(report.exit_code(), 1);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].starts_with("webpage.html"));
    assert!(!root.join("screenshot.jpg").exists());
    assert!(!root.join("dist").exists());
    assert!(console.captured().contains("Cleanup finished with 1 error(s)"));
}

#[test]
fn custom_config_targets_only_listed_names() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    std::fs::create_dir_all(root.join("cache")).unwrap();
    std::fs::create_dir_all(root.join(".tox")).unwrap();
    std::fs::create_dir_all(root.join("pkg/.mypy_cache")).unwrap();

    let cfg = CleanupConfig {
        directories: vec![".tox".into()],
        cache_dir_name: ".mypy_cache".into(),
        files: vec![],
    };
    let report = run_cleanup(&Console::buffer(), &cfg, root);

    assert!(report.overall_success);
    assert!(root.join("cache").exists());
    assert!(!root.join(".tox").exists());
    assert!(!root.join("pkg/.mypy_cache").exists());
}

#[cfg(unix)]
#[test]
fn caches_behind_symlinked_directories_are_left_alone() {
    let tmp = tempfile::tempdir().unwrap();
    let outside = tmp.path().join("outside");
    let root = tmp.path().join("proj");
    std::fs::create_dir_all(outside.join("__pycache__")).unwrap();
    std::fs::write(outside.join("__pycache__/mod.cpython-311.pyc"), b"\x00").unwrap();
    std::fs::create_dir_all(root.join("src/__pycache__")).unwrap();
    std::os::unix::fs::symlink(&outside, root.join("venv")).unwrap();
    std::os::unix::fs::symlink(outside.join("__pycache__"), root.join("src/linked")).unwrap();

    let console = Console::buffer();
    let report = run_cleanup(&console, &CleanupConfig::default(), &root);

    assert_eq!(report.exit_code(), 0);
    assert!(!root.join("src/__pycache__").exists());
    assert!(outside.join("__pycache__/mod.cpython-311.pyc").exists());
    assert!(root.join("venv").exists());
    assert!(!console.captured().contains("venv"));
}

#[test]
fn empty_cache_name_removes_nothing_and_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    std::fs::create_dir_all(root.join("src/weread")).unwrap();
    std::fs::create_dir_all(root.join("dist")).unwrap();

    let cfg = CleanupConfig {
        cache_dir_name: String::new(),
        ..CleanupConfig::default()
    };
    let console = Console::buffer();
    let report = run_cleanup(&console, &cfg, root);

    assert_eq!(report.exit_code(), 1);
    assert!(report.results.is_empty());
    assert!(root.join("src/weread").exists());
    assert!(root.join("dist").exists());
    assert!(console.captured().contains("invalid cleanup config"));
}

#[test]
fn entries_escaping_the_root_are_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("proj");
    let sibling = tmp.path().join("sibling");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::create_dir_all(&sibling).unwrap();
    std::fs::write(tmp.path().join("notes.txt"), "keep").unwrap();

    for cfg in [
        CleanupConfig {
            directories: vec!["../sibling".into()],
            ..CleanupConfig::default()
        },
        CleanupConfig {
            directories: vec![sibling.to_string_lossy().into_owned()],
            ..CleanupConfig::default()
        },
        CleanupConfig {
            files: vec!["../notes.txt".into()],
            ..CleanupConfig::default()
        },
    ] {
        let report = run_cleanup(&Console::buffer(), &cfg, &root);
        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.errors.len(), 1);
    }

    assert!(sibling.exists());
    assert!(tmp.path().join("notes.txt").exists());
}
