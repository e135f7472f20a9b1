use aisgpsd::AisMessage;
use crate::config::Config;

/// Filters decoded AIS messages based on application configuration
/// Use this filter before translation so rejected messages cost nothing.
/// # Arguments
/// * `config` - Application configuration containing filter rules
/// * `message` - The decoded AIS message to filter
///
/// # Returns
/// true if the message should be translated, false if it should be skipped.
/// Messages without an integer `id` are let through so the translator reports them.
pub fn should_translate(config: &Config, message: &AisMessage) -> bool {
    match message.get("id").and_then(|id| id.as_i64()) {
        Some(message_type) => config.message_filter.should_accept(message_type),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(value: serde_json::Value) -> AisMessage {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_default_config_accepts_everything() {
        let config = Config::default();
        assert!(should_translate(&config, &message(json!({"id": 1}))));
        assert!(should_translate(&config, &message(json!({"id": 24}))));
    }

    #[test]
    fn test_filter_by_type() {
        let mut config = Config::default();
        config.message_filter.accepted_types.insert(21);
        assert!(should_translate(&config, &message(json!({"id": 21}))));
        assert!(!should_translate(&config, &message(json!({"id": 1}))));
    }

    #[test]
    fn test_messages_without_type_reach_the_translator() {
        let mut config = Config::default();
        config.message_filter.accepted_types.insert(21);
        assert!(should_translate(&config, &message(json!({"mmsi": 1}))));
        assert!(should_translate(&config, &message(json!({"id": "21"}))));
    }
}
