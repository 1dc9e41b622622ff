use clap::{Parser, Subcommand, ValueEnum};

use crate::common::*;

use crate::enums::{language::*, link_target::*, template_type::*};

#[derive(Debug, Parser)]
#[command(
    name = "school_message_composer",
    version,
    about = "Compose WhatsApp-ready school messages from templates"
)]
pub struct Cli {
    /// flexi_logger level spec, e.g. `info` or `school_message_composer=debug`.
    /// Falls back to the LOG_LEVEL environment variable.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[doc = "Value of `render --link`"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LinkArg {
    Desktop,
    Mobile,
    /// the `link_target` from the system config
    Config,
    /// no share link
    #[value(name = "none")]
    NoLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Render a request file (.toml or .json) into a message
    Render {
        request: PathBuf,

        /// Wrap the message in rules and dividers
        #[arg(long, overrides_with = "no_borders")]
        borders: bool,

        /// Render without rules and dividers
        #[arg(long, overrides_with = "borders")]
        no_borders: bool,

        /// Prefix lines with emojis
        #[arg(long, overrides_with = "no_emojis")]
        emojis: bool,

        /// Render without emojis
        #[arg(long, overrides_with = "emojis")]
        no_emojis: bool,

        /// Override the request's language
        #[arg(long)]
        lang: Option<Language>,

        /// Also print a share link; a bare `--link` uses the configured target
        #[arg(long, value_enum, num_args = 0..=1, default_missing_value = "config")]
        link: Option<LinkArg>,

        /// Pick the share link target from a browser user agent
        #[arg(long, conflicts_with = "link")]
        user_agent: Option<String>,

        /// Print only the share link
        #[arg(long)]
        link_only: bool,
    },

    /// List the available templates
    Templates {
        #[arg(long)]
        lang: Option<Language>,
    },

    /// Show the form fields of one template
    Fields {
        template: TemplateType,

        #[arg(long)]
        lang: Option<Language>,
    },

    /// Show the emoji picker categories
    Emojis {
        #[arg(long)]
        lang: Option<Language>,
    },

    /// Insert an emoji into a field value at a char cursor
    InsertEmoji {
        value: String,

        glyph: String,

        /// Char position; defaults to the end of the value
        #[arg(long)]
        at: Option<usize>,
    },
}

#[doc = "Collapses an `--x` / `--no-x` pair into an override; neither flag means no override"]
pub fn flag_override(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[doc = "Share link target asked for on the command line, if any"]
/// # Arguments
/// * `link` - value of `--link`
/// * `user_agent` - value of `--user-agent`
/// * `configured` - `link_target` from the system config
pub fn requested_link_target(
    link: Option<LinkArg>,
    user_agent: Option<&str>,
    configured: LinkTarget,
) -> Option<LinkTarget> {
    match (link, user_agent) {
        (Some(LinkArg::Desktop), _) => Some(LinkTarget::Desktop),
        (Some(LinkArg::Mobile), _) => Some(LinkTarget::Mobile),
        (Some(LinkArg::Config), _) => Some(configured),
        (Some(LinkArg::NoLink), _) => None,
        (None, Some(agent)) => Some(LinkTarget::from_user_agent(agent)),
        (None, None) => None,
    }
}
