#[cfg(test)]
mod tests {
    use crate::config::{Config, StorageType};

    fn base_config() -> Config {
        Config {
            front_url: "http://localhost:3000".to_string(),
            server_port: 9000,
            storage_type: StorageType::Json,
            items_json_path: "items.json".to_string(),
            database_url: None,
            db_schema_path: None,
            image_dir: "images".to_string(),
        }
    }

    #[test]
    fn test_storage_type_parse() {
        assert_eq!("json".parse::<StorageType>().unwrap(), StorageType::Json);
        assert_eq!("SQLite".parse::<StorageType>().unwrap(), StorageType::Sqlite);
        assert!("postgres".parse::<StorageType>().is_err());
    }

    #[test]
    fn test_validate_json_config() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validate_sqlite_requires_database_url() {
        let mut config = base_config();
        config.storage_type = StorageType::Sqlite;
        assert!(config.validate().is_err());

        config.database_url = Some("sqlite:mercari.sqlite3".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_front_url() {
        let mut config = base_config();
        config.front_url = "http://localhost:3000\n".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cors_origin() {
        let origin = base_config().cors_origin().unwrap();
        assert_eq!(origin, "http://localhost:3000");
    }
}
