//! Edge case and error handling tests for dirmap


use harness::{TestDir, run_dirmap, tree_lines};
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlink_to_file_listed_as_file() {
    let dir = TestDir::new();
    dir.add_file("target.txt", "target");
    symlink(dir.path().join("target.txt"), dir.path().join("link.txt"))
        .expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_dirmap(dir.path(), &[]);
    assert!(success);
    assert_eq!(tree_lines(&stdout), vec!["├── link.txt", "└── target.txt"]);
}

#[test]
fn test_symlink_to_directory_is_traversed() {
    let dir = TestDir::new();
    dir.add_file("realdir/file.rs", "");
    symlink(dir.path().join("realdir"), dir.path().join("linkdir"))
        .expect("Failed to create dir symlink");

    let (stdout, _stderr, success) = run_dirmap(dir.path(), &[]);
    assert!(success);
    assert_eq!(
        tree_lines(&stdout),
        vec![
            "├── linkdir/",
            "│   └── file.rs",
            "└── realdir/",
            "    └── file.rs",
        ]
    );
}

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let dir = TestDir::new();
    dir.add_file("subdir/file.rs", "");
    symlink("..", dir.path().join("subdir").join("parent"))
        .expect("Failed to create parent symlink");

    let (stdout, _stderr, success) = run_dirmap(dir.path(), &[]);
    assert!(success, "dirmap should not hang on parent symlink");
    assert!(
        stdout.contains("[Symlink loop: parent]"),
        "should mark the loop: {}",
        stdout
    );
    assert!(stdout.contains("file.rs"), "should show file in subdir");
}

#[test]
fn test_broken_symlink() {
    let dir = TestDir::new();
    dir.add_file("real.rs", "");
    symlink("nonexistent.rs", dir.path().join("broken_link.rs"))
        .expect("Failed to create broken symlink");

    let (stdout, _stderr, success) = run_dirmap(dir.path(), &[]);
    assert!(success, "dirmap should handle broken symlinks");
    assert_eq!(tree_lines(&stdout), vec!["├── broken_link.rs", "└── real.rs"]);
}

#[test]
fn test_self_referential_symlink() {
    let dir = TestDir::new();
    dir.add_file("file.rs", "");
    symlink("selfref", dir.path().join("selfref"))
        .expect("Failed to create self-referential symlink");

    let (stdout, _stderr, success) = run_dirmap(dir.path(), &[]);
    assert!(success, "dirmap should handle self-referential symlinks");
    assert!(stdout.contains("file.rs"), "should show regular file");
    assert!(stdout.contains("selfref"), "should list the link as a file");
}

// ============================================================================
// Permission Error Handling
// ============================================================================

/// Root ignores mode bits, so permission tests only assert the marker when
/// the chmod actually took effect.
fn locked_out(path: &std::path::Path) -> bool {
    fs::read_dir(path).is_err()
}

#[test]
fn test_unreadable_directory() {
    let dir = TestDir::new();
    dir.add_file("readable/file.rs", "");
    dir.add_file("unreadable/hidden.rs", "");
    dir.add_file("zzz.txt", "");

    let unreadable = dir.path().join("unreadable");
    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&unreadable, perms).expect("Failed to set permissions");
    let enforced = locked_out(&unreadable);

    let (stdout, _stderr, success) = run_dirmap(dir.path(), &[]);

    // Restore permissions for cleanup
    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&unreadable, perms).expect("Failed to restore permissions");

    assert!(success, "dirmap should handle unreadable directories");
    assert!(stdout.contains("readable/"), "should show readable directory");
    assert!(stdout.contains("file.rs"), "should show readable file");
    assert!(stdout.contains("zzz.txt"), "siblings after it still listed");
    if enforced {
        assert_eq!(
            tree_lines(&stdout),
            vec![
                "├── readable/",
                "│   └── file.rs",
                "├── unreadable/",
                "│   [Permission denied: unreadable]",
                "└── zzz.txt",
            ]
        );
    }
}

// ============================================================================
// Special Filenames
// ============================================================================

#[test]
fn test_filename_with_spaces() {
    let dir = TestDir::new();
    dir.add_file("file with spaces.rs", "");
    dir.add_file("dir with spaces/nested.rs", "");

    let (stdout, _stderr, success) = run_dirmap(dir.path(), &[]);
    assert!(success);
    assert_eq!(
        tree_lines(&stdout),
        vec![
            "├── dir with spaces/",
            "│   └── nested.rs",
            "└── file with spaces.rs",
        ]
    );
}

#[test]
fn test_filename_with_unicode() {
    let dir = TestDir::new();
    dir.add_file("日本語.rs", "");
    dir.add_file("émoji_🎉.rs", "");
    dir.add_file("中文目录/文件.rs", "");

    let (stdout, _stderr, success) = run_dirmap(dir.path(), &[]);
    assert!(success, "dirmap should handle unicode filenames");
    assert!(stdout.contains("日本語.rs"));
    assert!(stdout.contains("émoji_🎉.rs"));
    assert!(stdout.contains("中文目录/"));
    assert!(stdout.contains("    └── 文件.rs"));
}

#[test]
fn test_case_sensitive_ordering() {
    let dir = TestDir::new();
    dir.add_file("b.txt", "");
    dir.add_file("B.txt", "");
    dir.add_file("a.txt", "");
    dir.add_file("A.txt", "");

    let (stdout, _stderr, success) = run_dirmap(dir.path(), &[]);
    assert!(success);
    assert_eq!(
        tree_lines(&stdout),
        vec!["├── A.txt", "├── B.txt", "├── a.txt", "└── b.txt"]
    );
}

#[test]
fn test_hidden_files_are_listed() {
    let dir = TestDir::new();
    dir.add_file(".hidden", "");
    dir.add_file(".config/settings.toml", "");

    let (stdout, _stderr, success) = run_dirmap(dir.path(), &[]);
    assert!(success);
    assert_eq!(
        tree_lines(&stdout),
        vec!["├── .config/", "│   └── settings.toml", "└── .hidden"]
    );
}

// ============================================================================
// Depth Limits
// ============================================================================

#[test]
fn test_depth_zero_with_deep_nesting() {
    let dir = TestDir::new();
    dir.add_file("a/b/c/d/e/f.txt", "");

    let (stdout, _stderr, success) = run_dirmap(dir.path(), &["-L", "0"]);
    assert!(success);
    assert_eq!(tree_lines(&stdout), vec!["└── a/"]);
}

#[test]
fn test_depth_larger_than_tree() {
    let dir = TestDir::new();
    dir.add_file("a/b.txt", "");

    let (limited, _stderr, success) = run_dirmap(dir.path(), &["-L", "100"]);
    assert!(success);
    let (unlimited, _stderr, _) = run_dirmap(dir.path(), &[]);
    assert_eq!(limited, unlimited);
}

#[test]
fn test_invalid_depth_rejected() {
    let dir = TestDir::new();
    let (_stdout, stderr, success) = run_dirmap(dir.path(), &["-L", "-1"]);
    assert!(!success);
    assert!(!stderr.is_empty());
}

#[test]
fn test_many_siblings_single_terminal_connector() {
    let dir = TestDir::new();
    for i in 0..50 {
        dir.add_file(&format!("file_{:02}.txt", i), "");
    }

    let (stdout, _stderr, success) = run_dirmap(dir.path(), &[]);
    assert!(success);
    let lines = tree_lines(&stdout);
    assert_eq!(lines.len(), 50);
    assert_eq!(lines.iter().filter(|l| l.starts_with("└── ")).count(), 1);
    assert_eq!(lines.last(), Some(&"└── file_49.txt"));
}
