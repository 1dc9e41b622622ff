pub mod composed_message;
pub mod message_formatter;
pub mod template_content;
