use std::path::Path;

use figment::Jail;
use propgen_config::{PackageManager, PropgenConfig};

#[test]
fn env_vars_override_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("PROPGEN_INSTALLER__TIMEOUT_SECS", "30");
        jail.set_env("PROPGEN_PACKAGES__MANAGER", "yarn");
        jail.set_env("PROPGEN_OUTPUT__SUFFIX", ".d.ts");

        let config = PropgenConfig::load(Path::new(".")).expect("config loads");
        assert_eq!(config.installer.timeout_secs, 30);
        assert_eq!(config.packages.manager, PackageManager::Yarn);
        assert_eq!(config.output.suffix, ".d.ts");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "propgen.toml",
            r#"
[formatter]
timeout_secs = 5
"#,
        )?;
        jail.set_env("PROPGEN_FORMATTER__TIMEOUT_SECS", "9");

        let config = PropgenConfig::load(Path::new(".")).expect("config loads");
        assert_eq!(config.formatter.timeout_secs, 9);
        Ok(())
    });
}

#[test]
fn dotenv_file_is_read() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "PROPGEN_LOCATOR__MAX_DEPTH=7\n")?;

        let config = PropgenConfig::load_with_dotenv(Path::new(".")).expect("config loads");
        assert_eq!(config.locator.max_depth, 7);
        // dotenvy writes the process env; Jail restores it on exit.
        Ok(())
    });
}
