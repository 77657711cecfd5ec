use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_nowpill_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("NOWPILL_CONFIG_PATH", "/tmp/nowpill-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/nowpill-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("nowpill")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("nowpill")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file_and_parse_content_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[pill]
content = "time-left"
scroll_enabled = false
show_artist = false
show_album = true
show_provider = false
show_timestamp = true

[scroll]
step_duration_ms = 150
start_pause_steps = 3
end_pause_steps = 2
visible_clusters = 10
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("NOWPILL_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("NOWPILL__SCROLL__STEP_DURATION_MS");

    let s = Settings::load().unwrap();
    assert!(matches!(s.pill.content, PillContentSetting::Remaining));
    assert!(!s.pill.scroll_enabled);
    assert!(!s.pill.show_artist);
    assert!(s.pill.show_album);
    assert!(!s.pill.show_provider);
    assert!(s.pill.show_timestamp);
    assert_eq!(s.scroll.step_duration_ms, 150);
    assert_eq!(s.scroll.start_pause_steps, 3);
    assert_eq!(s.scroll.end_pause_steps, 2);
    assert_eq!(s.scroll.visible_clusters, 10);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[scroll]
step_duration_ms = 200
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("NOWPILL_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("NOWPILL__SCROLL__STEP_DURATION_MS", "50");

    let s = Settings::load().unwrap();
    assert_eq!(s.scroll.step_duration_ms, 50);
}

#[test]
fn partial_toml_fills_in_struct_defaults() {
    let s: Settings = toml::from_str(
        r#"
[pill]
content = "elapsed"
"#,
    )
    .unwrap();

    assert!(matches!(s.pill.content, PillContentSetting::Elapsed));
    // Everything unspecified keeps its default.
    assert!(s.pill.scroll_enabled);
    assert_eq!(s.scroll.step_duration_ms, 200);
    assert_eq!(s.scroll.start_pause_steps, 5);
    assert_eq!(s.scroll.end_pause_steps, 5);
    assert_eq!(s.scroll.visible_clusters, 7);
}

#[test]
fn validate_rejects_zero_step_duration_and_window() {
    let mut s = Settings::default();
    assert!(s.validate().is_ok());

    s.scroll.step_duration_ms = 0;
    assert!(s.validate().is_err());

    s.scroll.step_duration_ms = 200;
    s.scroll.visible_clusters = 0;
    assert!(s.validate().is_err());
}
