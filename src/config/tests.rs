#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::config::structs::configuration::Configuration;
        use crate::database::enums::database_drivers::DatabaseDrivers;

        #[test]
        fn test_configuration_defaults() {
            let config = Configuration::init();
            assert_eq!(config.log_level, "info");
            assert_eq!(config.database.engine, DatabaseDrivers::sqlite3);
            assert_eq!(config.database_structure.events.table_name, "mod_downloads");
            assert_eq!(config.database_structure.stats.table_name, "mod_stats");
            assert_eq!(config.tracker_config.default_top_limit, 10);
            assert!(!config.mirror.enabled);
            assert_eq!(config.api_server.len(), 1);
            assert!(config.api_server[0].enabled);
        }

        #[test]
        fn test_configuration_toml_round_trip() {
            let config = Configuration::init();
            let serialized = toml::to_string(&config).unwrap();
            let parsed = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(parsed.database.path, config.database.path);
            assert_eq!(parsed.database_structure.stats.column_total_downloads, config.database_structure.stats.column_total_downloads);
            assert_eq!(parsed.mirror.path_template, config.mirror.path_template);
        }

        #[test]
        fn test_configuration_load_rejects_garbage() {
            assert!(Configuration::load(b"not [valid toml").is_err());
        }

        #[test]
        fn test_configuration_save_and_load_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let path_str = path.to_str().unwrap();

            let config = Configuration::init();
            Configuration::save_file(path_str, toml::to_string(&config).unwrap()).unwrap();
            let loaded = Configuration::load_file(path_str).unwrap();
            assert_eq!(loaded.database.engine, DatabaseDrivers::sqlite3);
        }

        #[test]
        fn test_configuration_load_file_missing() {
            assert!(Configuration::load_file("/nonexistent/config.toml").is_err());
        }

        #[test]
        fn test_validate_accepts_defaults() {
            Configuration::validate(Configuration::init());
        }

        #[test]
        #[should_panic]
        fn test_validate_rejects_bad_table_name() {
            let mut config = Configuration::init();
            config.database_structure.stats.table_name = String::from("bad table; DROP");
            Configuration::validate(config);
        }

        #[test]
        #[should_panic]
        fn test_validate_rejects_template_without_placeholder() {
            let mut config = Configuration::init();
            config.mirror.path_template = String::from("mods/modinfo.json");
            Configuration::validate(config);
        }
    }

    mod database_drivers_tests {
        use crate::database::enums::database_drivers::DatabaseDrivers;

        #[test]
        fn test_database_drivers_serialization() {
            let serialized = serde_json::to_string(&DatabaseDrivers::sqlite3).unwrap();
            assert_eq!(serialized, "\"sqlite3\"");
            let serialized = serde_json::to_string(&DatabaseDrivers::json).unwrap();
            assert_eq!(serialized, "\"json\"");
        }

        #[test]
        fn test_database_drivers_deserialization() {
            let driver: DatabaseDrivers = serde_json::from_str("\"json\"").unwrap();
            assert_eq!(driver, DatabaseDrivers::json);
        }

        #[test]
        fn test_database_drivers_equality() {
            assert_eq!(DatabaseDrivers::sqlite3, DatabaseDrivers::sqlite3);
            assert_ne!(DatabaseDrivers::sqlite3, DatabaseDrivers::json);
        }
    }
}
