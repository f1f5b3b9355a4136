use blockquill::config::{Config, ImageCommitPolicy};
use blockquill::editor::state::{EditorState, MAX_TEXT_BLOCK_ROWS};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_all_default_values() {
    let config = Config::default();

    // Display settings
    assert_eq!(config.theme, "default-dark");
    assert!(config.show_block_numbers);
    assert_eq!(config.text_block_rows, 8);

    // Image settings
    assert_eq!(config.max_image_bytes, 10 * 1024 * 1024);
    assert_eq!(config.image_commit, ImageCommitPolicy::Append);
    assert!(config.image_extensions.contains(&"png".to_string()));

    // Input settings
    assert!(config.enable_mouse);

    assert_eq!(config.log_level, "info");
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = Config {
        theme: "nord".to_string(),
        image_commit: ImageCommitPolicy::Replace,
        text_block_rows: 3,
        ..Config::default()
    };
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path), config);
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "theme = \"dracula\"\nimage_commit = \"replace\"\n").unwrap();

    let config = Config::load_from(&path);
    assert_eq!(config.theme, "dracula");
    assert_eq!(config.image_commit, ImageCommitPolicy::Replace);
    assert!(config.enable_mouse);
    assert_eq!(config.text_block_rows, 8);
}

#[test]
fn test_malformed_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "theme = [not toml").unwrap();

    assert_eq!(Config::load_from(&path), Config::default());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    assert_eq!(
        Config::load_from(&dir.path().join("absent.toml")),
        Config::default()
    );
}

#[test]
fn test_editor_state_from_config() {
    let config = Config {
        theme: "gruvbox-dark".to_string(),
        enable_mouse: false,
        text_block_rows: 0,
        image_commit: ImageCommitPolicy::Replace,
        ..Config::default()
    };
    let state = EditorState::from_config(&config);

    assert_eq!(state.current_theme(), "gruvbox-dark");
    assert!(!state.enable_mouse());
    assert_eq!(state.image_commit(), ImageCommitPolicy::Replace);
    // At least one text row is always shown
    assert_eq!(state.text_block_rows(), 1);
}

#[test]
fn test_huge_text_block_rows_is_clamped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "text_block_rows = 65535\n").unwrap();

    let config = Config::load_from(&path);
    assert_eq!(config.text_block_rows, u16::MAX);

    let mut state = EditorState::from_config(&config);
    assert_eq!(state.text_block_rows(), MAX_TEXT_BLOCK_ROWS);

    state.open_create_session();
    state.set_draft_text("x").unwrap();
    state.commit_session().unwrap();
    let block = &state.blocks()[0];
    assert_eq!(state.block_height(block), MAX_TEXT_BLOCK_ROWS + 2);
}
