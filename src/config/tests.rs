#[cfg(test)]
mod tests {
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    use crate::config::Config;
    use crate::config::environment::{env_flag, env_string, env_u64};

    fn env_lock<'a>() -> std::sync::MutexGuard<'a, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
    }

    struct EnvGuard {
        saved: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new(vars: &[(&str, Option<&str>)]) -> Self {
            let saved = vars
                .iter()
                .map(|(key, _)| (key.to_string(), std::env::var(key).ok()))
                .collect::<Vec<_>>();
            for (key, value) in vars {
                match value {
                    Some(val) => unsafe { std::env::set_var(key, val) },
                    None => unsafe { std::env::remove_var(key) },
                }
            }
            Self { saved }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.saved {
                match value {
                    Some(val) => unsafe { std::env::set_var(key, val) },
                    None => unsafe { std::env::remove_var(key) },
                }
            }
        }
    }

    #[test]
    fn load_uses_defaults_without_file_or_env() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        let home = temp_home.path().to_str().unwrap().to_string();

        let _env = EnvGuard::new(&[
            ("HOME", Some(home.as_str())),
            ("OPSDRILL_TICK_MS", None),
            ("OPSDRILL_FINALIZE_DELAY_MS", None),
            ("OPSDRILL_HEALTH_SEED", None),
            ("OPSDRILL_NO_COLOR", None),
        ]);

        let config = Config::load().unwrap();
        assert_eq!(config.simulation.tick_ms, 1500);
        assert_eq!(config.simulation.finalize_delay_ms, 1000);
        assert_eq!(config.health.seed, None);
        assert!(config.output.color);
    }

    #[test]
    fn load_from_env_only() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        let home = temp_home.path().to_str().unwrap().to_string();

        let _env = EnvGuard::new(&[
            ("HOME", Some(home.as_str())),
            ("OPSDRILL_TICK_MS", Some("200")),
            ("OPSDRILL_FINALIZE_DELAY_MS", Some("50")),
            ("OPSDRILL_HEALTH_SEED", Some("42")),
            ("OPSDRILL_NO_COLOR", Some("1")),
        ]);

        let config = Config::load().unwrap();
        assert_eq!(config.simulation.tick_ms, 200);
        assert_eq!(config.simulation.finalize_delay_ms, 50);
        assert_eq!(config.health.seed, Some(42));
        assert!(!config.output.color);
    }

    #[test]
    fn load_prefers_env_over_file() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        let home = temp_home.path().to_str().unwrap().to_string();
        let config_dir = temp_home.path().join(".opsdrill");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("config"),
            r#"{
                "simulation": { "tick_ms": 900, "finalize_delay_ms": 700 },
                "health": { "seed": 7, "sweep_delay_ms": 100 }
            }"#,
        )
        .unwrap();

        let _env = EnvGuard::new(&[
            ("HOME", Some(home.as_str())),
            ("OPSDRILL_TICK_MS", Some("300")),
            ("OPSDRILL_FINALIZE_DELAY_MS", None),
            ("OPSDRILL_HEALTH_SEED", None),
            ("OPSDRILL_NO_COLOR", None),
        ]);

        let config = Config::load().unwrap();
        assert_eq!(config.simulation.tick_ms, 300);
        assert_eq!(config.simulation.finalize_delay_ms, 700);
        assert_eq!(config.health.seed, Some(7));
        assert_eq!(config.health.sweep_delay_ms, 100);
    }

    #[test]
    fn load_rejects_zero_tick() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        let home = temp_home.path().to_str().unwrap().to_string();

        let _env = EnvGuard::new(&[
            ("HOME", Some(home.as_str())),
            ("OPSDRILL_TICK_MS", Some("0")),
            ("OPSDRILL_FINALIZE_DELAY_MS", None),
            ("OPSDRILL_HEALTH_SEED", None),
            ("OPSDRILL_NO_COLOR", None),
        ]);

        let err = Config::load().unwrap_err();
        assert!(err.to_string().contains("tick must be greater than zero"));
    }

    #[test]
    fn validation_rejects_out_of_range_thresholds() {
        let mut config = Config::builder().build().unwrap();
        config.health.down_threshold = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::builder().build().unwrap();
        config.health.down_threshold = 0.5;
        config.health.sweep_degraded_threshold = 0.2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn save_persists_nested_structure() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        let home = temp_home.path().to_str().unwrap().to_string();

        let _env = EnvGuard::new(&[("HOME", Some(home.as_str()))]);

        let mut config = Config::builder().build().unwrap();
        config.simulation.tick_ms = 500;
        config.health.seed = Some(9);
        config.output.color = false;
        config.save().unwrap();

        let persisted = std::fs::read_to_string(Config::config_path().unwrap()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&persisted).unwrap();
        assert_eq!(json["simulation"]["tick_ms"], 500);
        assert_eq!(json["health"]["seed"], 9);
        assert_eq!(json["output"]["color"], false);
    }

    #[test]
    fn test_env_string() {
        let _lock = env_lock();
        let _env = EnvGuard::new(&[("TEST_VAR", Some("test_value"))]);

        assert_eq!(env_string("TEST_VAR").unwrap(), Some("test_value".to_string()));
        assert_eq!(env_string("NONEXISTENT_VAR").unwrap(), None);
    }

    #[test]
    fn test_env_u64() {
        let _lock = env_lock();
        let _env = EnvGuard::new(&[("TEST_U64", Some("123"))]);

        assert_eq!(env_u64("TEST_U64").unwrap(), Some(123));
        assert_eq!(env_u64("NONEXISTENT_VAR").unwrap(), None);
    }

    #[test]
    fn test_env_flag() {
        let _lock = env_lock();
        let _env = EnvGuard::new(&[("TEST_FLAG", Some("true")), ("TEST_BAD_FLAG", Some("maybe"))]);

        assert_eq!(env_flag("TEST_FLAG").unwrap(), Some(true));
        assert_eq!(env_flag("NONEXISTENT_VAR").unwrap(), None);
        assert!(env_flag("TEST_BAD_FLAG").is_err());
    }
}
