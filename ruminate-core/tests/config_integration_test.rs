//! Integration tests for the configuration loader.

use pretty_assertions::assert_eq;
use ruminate_core::config::load_config;
use serde::Deserialize;
use tempfile::TempDir;
use tokio::fs;

#[derive(Debug, Deserialize, PartialEq)]
struct LoopSettings {
    max_rounds: usize,
    label: String,
}

#[tokio::test]
async fn test_load_toml_file_with_env_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("react.toml");

    fs::write(
        &path,
        "max_rounds = 4\nlabel = \"${RUMINATE_IT_LABEL_UNSET:hotpot}\"\n",
    )
    .await
    .unwrap();

    let settings: LoopSettings = load_config(&path).await.unwrap();
    assert_eq!(
        settings,
        LoopSettings {
            max_rounds: 4,
            label: "hotpot".to_string(),
        }
    );
}

#[tokio::test]
async fn test_load_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("react.json");

    let body = serde_json::json!({ "max_rounds": 7, "label": "fever" });
    fs::write(&path, serde_json::to_string_pretty(&body).unwrap())
        .await
        .unwrap();

    let settings: LoopSettings = load_config(&path).await.unwrap();
    assert_eq!(settings.max_rounds, 7);
    assert_eq!(settings.label, "fever");
}

#[tokio::test]
async fn test_missing_file_is_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_config::<LoopSettings, _>(temp_dir.path().join("absent.toml"))
        .await
        .unwrap_err();
    assert_eq!(err.category(), "configuration");
}
