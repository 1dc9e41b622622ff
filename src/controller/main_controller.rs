use crate::common::*;

use crate::traits::service::compose_service_trait::*;

use crate::catalog::{emoji_taxonomy::*, template_catalog::*};

use crate::enums::{emoji_category::*, language::*, link_target::*, template_type::*};

use crate::model::{cli_args::*, compose_request::*, configs::style_config::*};

use crate::utils_modules::io_utils::*;

/// Style settings given on the command line; `None` leaves the request's value.
#[derive(Debug, Clone, Copy)]
struct StyleOverrides {
    use_borders: Option<bool>,
    use_emojis: Option<bool>,
    language: Option<Language>,
}

#[derive(Debug, new)]
pub struct MainController<S: ComposeService> {
    compose_service: Arc<S>,
    style_config: Arc<StyleConfig>,
}

impl<S> MainController<S>
where
    S: ComposeService,
{
    #[doc = "Runs one CLI command and returns the text to print"]
    pub fn run(&self, command: &Command) -> anyhow::Result<String> {
        match command {
            Command::Render {
                request,
                borders,
                no_borders,
                emojis,
                no_emojis,
                lang,
                link,
                user_agent,
                link_only,
            } => {
                let overrides: StyleOverrides = StyleOverrides {
                    use_borders: flag_override(*borders, *no_borders),
                    use_emojis: flag_override(*emojis, *no_emojis),
                    language: *lang,
                };
                let target: Option<LinkTarget> = requested_link_target(
                    *link,
                    user_agent.as_deref(),
                    self.style_config.link_target,
                );
                self.render(request, overrides, target, *link_only)
            }
            Command::Templates { lang } => Ok(self.list_templates(self.language_or_default(*lang))),
            Command::Fields { template, lang } => {
                Ok(self.describe_fields(*template, self.language_or_default(*lang)))
            }
            Command::Emojis { lang } => Ok(self.list_emojis(self.language_or_default(*lang))),
            Command::InsertEmoji { value, glyph, at } => Ok(self.insert_emoji(value, glyph, *at)),
        }
    }

    fn language_or_default(&self, lang: Option<Language>) -> Language {
        lang.unwrap_or(self.style_config.language)
    }

    fn render(
        &self,
        request_path: &Path,
        overrides: StyleOverrides,
        link_target: Option<LinkTarget>,
        link_only: bool,
    ) -> anyhow::Result<String> {
        if link_only && link_target.is_none() {
            return Err(anyhow!(
                "[MainController->render] --link-only needs --link desktop|mobile|config or --user-agent"
            ));
        }

        let mut request: ComposeRequest = read_compose_request(request_path)?;
        info!(
            "[MainController->render] loaded '{}' request from {:?}",
            request.template, request_path
        );

        /* command line flags win over the request file */
        if overrides.use_borders.is_some() {
            request.use_borders = overrides.use_borders;
        }
        if overrides.use_emojis.is_some() {
            request.use_emojis = overrides.use_emojis;
        }
        if overrides.language.is_some() {
            request.language = overrides.language;
        }

        if !request.has_content() {
            warn!(
                "[MainController->render] request {:?} has no field values or tags",
                request_path
            );
        }

        let message: String = self.compose_service.compose(&request);

        let output: String = match link_target {
            Some(target) if link_only => self.compose_service.share_link(&message, Some(target)),
            Some(target) => format!(
                "{}\n\n{}",
                message,
                self.compose_service.share_link(&message, Some(target))
            ),
            None => message,
        };

        Ok(output)
    }

    fn insert_emoji(&self, value: &str, glyph: &str, at: Option<usize>) -> String {
        let cursor: usize = at.unwrap_or_else(|| value.chars().count());
        let (inserted, next_cursor) = insert_at(value, cursor, glyph);
        info!(
            "[MainController->insert_emoji] inserted {} at {}, cursor now {}",
            glyph, cursor, next_cursor
        );
        inserted
    }

    fn list_templates(&self, language: Language) -> String {
        TemplateType::ALL
            .iter()
            .map(|template| {
                format!(
                    "{} {:<14} {} - {}",
                    lead_emoji_for(*template),
                    template.get_name(),
                    display_name_for(*template, language),
                    title_for(*template, language)
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    fn describe_fields(&self, template: TemplateType, language: Language) -> String {
        let mut lines: Vec<String> = vec![format!(
            "{} ({}, {})",
            title_for(template, language),
            template.get_name(),
            language.direction().as_str()
        )];

        for field in fields_for(template) {
            let placeholder: &str = field.placeholder(language);

            if placeholder.is_empty() {
                lines.push(format!(
                    "  {:<13} {:<9} {}",
                    field.key(),
                    field.kind().get_name(),
                    field.label(language)
                ));
            } else {
                lines.push(format!(
                    "  {:<13} {:<9} {} ({})",
                    field.key(),
                    field.kind().get_name(),
                    field.label(language),
                    placeholder
                ));
            }
        }

        lines.join("\n")
    }

    fn list_emojis(&self, language: Language) -> String {
        EmojiCategory::ALL
            .iter()
            .map(|category| format!("{}: {}", category.label(language), category.glyphs().join(" ")))
            .collect::<Vec<String>>()
            .join("\n")
    }
}
