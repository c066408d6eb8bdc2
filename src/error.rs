//! Error type for the DOM layer.
//!
//! None of these reach callers of the exported functions: the exports log
//! the failure and carry on, so a broken page never breaks the editor.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("no global `window` object")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no <body>")]
    NoBody,
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error("invalid UI configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("logger already installed")]
    Logger(#[from] log::SetLoggerError),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        let text = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        UiError::Dom(text)
    }
}

impl From<UiError> for JsValue {
    fn from(error: UiError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

pub type Result<T, E = UiError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_keep_the_parser_message() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = UiError::from(parse);
        assert!(error.to_string().starts_with("invalid UI configuration:"));
    }

    struct Silent;

    impl log::Log for Silent {
        fn enabled(&self, _: &log::Metadata) -> bool {
            false
        }

        fn log(&self, _: &log::Record) {}

        fn flush(&self) {}
    }

    static SILENT: Silent = Silent;

    #[test]
    fn second_logger_keeps_the_log_error_as_source() {
        let _ = log::set_logger(&SILENT);
        let error = UiError::from(log::set_logger(&SILENT).unwrap_err());
        assert_eq!(error.to_string(), "logger already installed");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn missing_globals_have_readable_messages() {
        assert_eq!(UiError::NoBody.to_string(), "document has no <body>");
        assert_eq!(UiError::NoWindow.to_string(), "no global `window` object");
    }
}
