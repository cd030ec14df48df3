use figment::Jail;
use tale_config::TaleConfig;
use tale_core::enums::TaskKind;

#[test]
fn env_vars_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("TALE_GENERAL__DEFAULT_TASK", "safety");
        jail.set_env("TALE_SUBMISSION__VERIFY_PAYLOAD_SCHEMA", "false");

        let config = TaleConfig::load().expect("config loads");
        assert_eq!(config.general.default_task, TaskKind::Safety);
        assert!(!config.submission.verify_payload_schema);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".tale")?;
        jail.create_file(
            ".tale/config.toml",
            r#"
[submission]
outbox_dir = "from-toml"
"#,
        )?;
        jail.set_env("TALE_SUBMISSION__OUTBOX_DIR", "from-env");

        let config = TaleConfig::load().expect("config loads");
        assert_eq!(config.submission.outbox_dir, "from-env");
        Ok(())
    });
}

#[test]
fn dotenv_file_is_loaded() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "TALE_SUBMISSION__OUTBOX_DIR=from-dotenv\n")?;

        let config = TaleConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.submission.outbox_dir, "from-dotenv");
        Ok(())
    });
}
