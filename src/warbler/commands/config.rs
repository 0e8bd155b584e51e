use crate::commands::{CmdMessage, CmdResult};
use crate::config::WarblerConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = WarblerConfig::load(dir)?;
            let mut result = CmdResult::default();
            for (key, value) in config.list_all() {
                result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
            }
            Ok(result.with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = WarblerConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = WarblerConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    #[test]
    fn set_then_show_key() {
        let temp = TempDir::new().unwrap();
        let set = run(
            temp.path(),
            ConfigAction::Set("handle".into(), "robin".into()),
        )
        .unwrap();
        assert_eq!(set.messages[0].content, "handle set to @robin");

        let shown = run(temp.path(), ConfigAction::ShowKey("handle".into())).unwrap();
        assert_eq!(shown.messages[0].content, "@robin");
    }

    #[test]
    fn unknown_key_is_an_error_message() {
        let temp = TempDir::new().unwrap();
        let result = run(
            temp.path(),
            ConfigAction::Set("colour".into(), "red".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!temp.path().join("config.json").exists());
    }

    #[test]
    fn show_all_lists_defaults() {
        let temp = TempDir::new().unwrap();
        let result = run(temp.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(WarblerConfig::default()));
        assert_eq!(result.messages.len(), 3);
        assert_eq!(result.messages[0].content, "handle = @Scrimba");
    }
}
