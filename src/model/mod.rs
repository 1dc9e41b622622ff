pub mod bilingual;
pub mod cli_args;
pub mod compose_request;
pub mod configs;
pub mod field_schema;
pub mod message_formatter_dto;
