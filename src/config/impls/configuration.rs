use std::fs::File;
use std::io::Write;
use std::thread::available_parallelism;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::database_structure_config::DatabaseStructureConfig;
use crate::config::structs::database_structure_config_events::DatabaseStructureConfigEvents;
use crate::config::structs::database_structure_config_stats::DatabaseStructureConfigStats;
use crate::config::structs::mirror_config::MirrorConfig;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            tracker_config: TrackerConfig {
                service_name: String::from("NEOVIA Mod Download Tracker"),
                default_top_limit: 10
            },
            database: DatabaseConfig {
                engine: DatabaseDrivers::sqlite3,
                path: String::from("sqlite://mod_downloads.db"),
                persistent: true
            },
            database_structure: DatabaseStructureConfig {
                events: DatabaseStructureConfigEvents {
                    table_name: String::from("mod_downloads"),
                    column_game_id: String::from("game_id"),
                    column_game_name: String::from("game_name"),
                    column_mod_name: String::from("mod_name"),
                    column_timestamp: String::from("download_date"),
                    column_origin: String::from("user_ip"),
                    column_user_agent: String::from("user_agent")
                },
                stats: DatabaseStructureConfigStats {
                    table_name: String::from("mod_stats"),
                    column_game_id: String::from("game_id"),
                    column_game_name: String::from("game_name"),
                    column_total_downloads: String::from("total_downloads"),
                    column_first_download: String::from("first_download"),
                    column_last_download: String::from("last_download")
                }
            },
            mirror: MirrorConfig {
                enabled: false,
                path_template: String::from("mods/UltraGraphicsPack_{game_id}/modinfo.json")
            },
            api_server: vec!(
                ApiServerConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:8080"),
                    keep_alive: 60,
                    request_timeout: 30,
                    disconnect_timeout: 30,
                    threads: available_parallelism().unwrap().get() as u64
                }
            )
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(create: bool) -> Result<Configuration, CustomError> {
        let mut config = Configuration::init();
        match Configuration::load_file("config.toml") {
            Ok(c) => { config = c; }
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own config.toml file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create automatically config.toml file"));
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&config).unwrap();
                let save_file = Configuration::save_file("config.toml", config_toml);
                return match save_file {
                    Ok(_) => {
                        eprintln!("Please edit the config.TOML in the root folder, exiting now...");
                        Err(CustomError::new("create config.toml file"))
                    }
                    Err(e) => {
                        eprintln!("config.toml file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config.toml file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        Self::validate(config.clone());
        Ok(config)
    }

    pub fn validate(config: Configuration) {
        // Check Map
        let check_map = vec![
            ("[DB: events]", config.database_structure.events.table_name.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: events] Column: game_id", config.database_structure.events.column_game_id.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: events] Column: game_name", config.database_structure.events.column_game_name.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: events] Column: mod_name", config.database_structure.events.column_mod_name.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: events] Column: timestamp", config.database_structure.events.column_timestamp.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: events] Column: origin", config.database_structure.events.column_origin.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: events] Column: user_agent", config.database_structure.events.column_user_agent.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: stats]", config.database_structure.stats.table_name.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: stats] Column: game_id", config.database_structure.stats.column_game_id.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: stats] Column: game_name", config.database_structure.stats.column_game_name.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: stats] Column: total_downloads", config.database_structure.stats.column_total_downloads.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: stats] Column: first_download", config.database_structure.stats.column_first_download.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[DB: stats] Column: last_download", config.database_structure.stats.column_last_download.clone(), r"^[a-z_][a-z0-9_]{0,30}$".to_string()),
            ("[MIRROR] Path template", config.mirror.path_template.clone(), r"^[^\x00]*\{game_id\}[^\x00]*$".to_string()),
        ];

        // Validation
        for (name, value, regex) in check_map {
            Self::validate_value(name, value, regex);
        }
    }

    pub fn validate_value(name: &str, value: String, regex: String)
    {
        let regex_check = Regex::new(regex.as_str()).unwrap();
        if !regex_check.is_match(value.as_str()){
            panic!("[VALIDATE CONFIG] Error checking {} [:] Name: \"{}\" [:] Regex: \"{}\"", name, value, regex_check);
        }
    }
}
