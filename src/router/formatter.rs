use crate::domain::LogMessage;
use std::sync::Arc;

/// Renders a message to the line handed to an output.
pub type FormatterFn = Arc<dyn Fn(&LogMessage) -> String + Send + Sync>;

/// Default rendering: the raw message text, untouched.
pub fn default_format(msg: &LogMessage) -> String {
    msg.text.clone()
}
