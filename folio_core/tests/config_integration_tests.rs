//! Integration tests for the configuration module

use folio_core::utils::config::{Config, NotificationConfig, OwnerIdentity, RelayConfig};
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

fn create_test_config() -> Config {
    Config {
        relay: RelayConfig {
            api_url: "https://relay.test".to_string(),
            public_key: "pk-123".to_string(),
            service_id: "service_abc".to_string(),
            template_id: "template_contact".to_string(),
            auto_reply_template_id: "template_thanks".to_string(),
            timeout_seconds: Some(12),
        },
        owner: OwnerIdentity {
            name: "Test Owner".to_string(),
            email: "owner@example.com".to_string(),
            title: "Engineer".to_string(),
        },
        notifications: NotificationConfig {
            auto_dismiss_ms: 5000,
            transition_ms: 200,
            enter_delay_ms: 50,
        },
    }
}

#[test]
fn test_config_full_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("nested").join("config.json");

    let original_config = create_test_config();
    original_config.save_to_file(&config_path)?;

    let file_content = fs::read_to_string(&config_path)?;
    assert!(file_content.contains("service_abc"));
    assert!(file_content.contains("owner@example.com"));

    let loaded_config = Config::load_from_file(&config_path)?;
    assert_eq!(loaded_config, original_config);

    Ok(())
}

#[test]
fn test_invalid_json_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("config.json");
    fs::write(&config_path, "{ not json")?;

    assert!(Config::load_from_file(&config_path).is_err());
    Ok(())
}

#[test]
#[serial]
fn test_config_load_or_default_flow() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let original_home = env::var("HOME").ok();
    env::set_var("HOME", temp_dir.path());

    let config = Config::load_or_default()?;
    assert_eq!(config.relay, RelayConfig::default());

    let folio_dir = temp_dir.path().join(".folio");
    fs::create_dir_all(&folio_dir)?;
    create_test_config().save_to_file(folio_dir.join("config.json"))?;

    let config = Config::load_or_default()?;
    assert_eq!(config.relay.service_id, "service_abc");
    assert_eq!(config.owner.name, "Test Owner");

    // Unreadable file falls back to defaults
    fs::write(folio_dir.join("config.json"), "garbage")?;
    let config = Config::load_or_default()?;
    assert_eq!(config.owner, OwnerIdentity::default());

    match original_home {
        Some(home) => env::set_var("HOME", home),
        None => env::remove_var("HOME"),
    }
    Ok(())
}

#[test]
#[serial]
fn test_environment_overrides_relay_ids() {
    env::set_var("FOLIO_EMAILJS_SERVICE_ID", "service_env");
    env::set_var("FOLIO_EMAILJS_PUBLIC_KEY", "   ");

    let mut config = create_test_config();
    config.apply_env_overrides();

    assert_eq!(config.relay.service_id, "service_env");
    // Blank values are ignored
    assert_eq!(config.relay.public_key, "pk-123");
    assert_eq!(config.relay.template_id, "template_contact");

    env::remove_var("FOLIO_EMAILJS_SERVICE_ID");
    env::remove_var("FOLIO_EMAILJS_PUBLIC_KEY");
}
