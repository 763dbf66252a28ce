// SPDX-License-Identifier: MPL-2.0
use iced_quiz::config::{self, Config, DEFAULT_TRIGGER_WINDOW_SECS};
use iced_quiz::i18n::fluent::I18n;
use iced_quiz::quiz::AnswerPolicy;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_config(config: &Config, path: &Path) {
    let content = toml::to_string_pretty(config).expect("Failed to serialize config");
    fs::write(path, content).expect("Failed to write config");
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    write_config(&english, &path);

    let loaded = config::load_from_path(&path).expect("Failed to load english config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("results-title"), "Results");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    write_config(&french, &path);

    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn cli_language_overrides_config() {
    let mut french = Config::default();
    french.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &french);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn quiz_section_is_read_from_override_dir() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut config = Config::default();
    config.quiz.answer_policy = Some(AnswerPolicy::AllowRetry);
    config.quiz.show_results = Some(false);
    write_config(&config, &dir.path().join("settings.toml"));

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.quiz.answer_policy, Some(AnswerPolicy::AllowRetry));
    assert_eq!(loaded.quiz.show_results, Some(false));
    assert_eq!(
        loaded.quiz.trigger_window_secs,
        Some(DEFAULT_TRIGGER_WINDOW_SECS)
    );
}

#[test]
fn corrupted_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[quiz\nbroken").expect("write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}
