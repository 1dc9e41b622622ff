//! Property-based invariant tests for the message formatter.
//!
//! 1. Rendering is deterministic
//! 2. Turning borders off removes only rule and divider lines
//! 3. Clearing one field removes exactly its own lines
//! 4. Tags render as one chip line in input order
//! 5. Switching language keeps the block structure
//! 6. Photo numbering follows list positions

use proptest::prelude::*;

use school_message_composer::catalog::glyphs::{DIVIDER, HORIZONTAL_RULE};
use school_message_composer::{fields_for, format, FieldValues, Language, TemplateType};

// ── Helpers ──────────────────────────────────────────────────────────

fn template_strategy() -> impl Strategy<Value = TemplateType> {
    prop::sample::select(TemplateType::ALL.to_vec())
}

fn language_strategy() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

/// Values never contain rule glyphs, so rule lines stay distinguishable.
fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z0-9 ]{1,12}",
        "[a-zA-Z0-9 ]{1,8}\n[a-zA-Z0-9 ]{0,8}\n[a-zA-Z0-9 ]{1,8}",
    ]
}

fn fields_strategy(template: TemplateType) -> impl Strategy<Value = FieldValues> {
    let keys: Vec<&'static str> = fields_for(template).iter().map(|f| f.key()).collect();
    prop::collection::vec(value_strategy(), keys.len()).prop_map(move |values| {
        keys.iter()
            .zip(values)
            .map(|(key, value)| (key.to_string(), value))
            .collect::<FieldValues>()
    })
}

fn tags_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z+]{1,8}", 0..4)
}

fn photos_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            "https://x\\.test/[a-z]{1,6}\\.png",
            "http://x\\.test/[a-z]{1,6}\\.jpg",
            "[a-z0-9_]{0,8}",
        ],
        0..5,
    )
}

#[derive(Debug, Clone)]
struct Input {
    template: TemplateType,
    fields: FieldValues,
    language: Language,
    use_borders: bool,
    use_emojis: bool,
    tags: Vec<String>,
    photos: Vec<String>,
}

fn input_strategy() -> impl Strategy<Value = Input> {
    template_strategy().prop_flat_map(|template| {
        (
            fields_strategy(template),
            language_strategy(),
            any::<bool>(),
            any::<bool>(),
            tags_strategy(),
            photos_strategy(),
        )
            .prop_map(move |(fields, language, use_borders, use_emojis, tags, photos)| Input {
                template,
                fields,
                language,
                use_borders,
                use_emojis,
                tags,
                photos,
            })
    })
}

fn render(input: &Input) -> String {
    format(
        input.template,
        &input.fields,
        input.language,
        input.use_borders,
        input.use_emojis,
        &input.tags,
        &input.photos,
    )
}

fn line_count(message: &str) -> usize {
    message.split('\n').count()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rendering_is_deterministic(input in input_strategy()) {
        prop_assert_eq!(render(&input), render(&input));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Style independence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn borders_only_add_rule_lines(input in input_strategy()) {
        let with_borders = render(&Input { use_borders: true, ..input.clone() });
        let without_borders = render(&Input { use_borders: false, ..input });

        let stripped: Vec<&str> = with_borders
            .split('\n')
            .filter(|line| *line != HORIZONTAL_RULE && *line != DIVIDER)
            .collect();
        let plain: Vec<&str> = without_borders.split('\n').collect();

        prop_assert_eq!(stripped, plain);
        prop_assert_eq!(line_count(&with_borders), line_count(&without_borders) + 4);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Clearing a field removes only that field's lines
// ═════════════════════════════════════════════════════════════════════════

fn is_subsequence(shorter: &[&str], longer: &[&str]) -> bool {
    let mut remaining = longer.iter();
    shorter.iter().all(|line| remaining.any(|candidate| candidate == line))
}

/// Non-blank lines of `message`, sorted, so line sets compare as multisets.
fn content_lines(message: &str) -> Vec<String> {
    let mut lines: Vec<String> = message
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    lines.sort();
    lines
}

/// `from` minus `taken`, both sorted.
fn multiset_difference(from: &[String], taken: &[String]) -> Vec<String> {
    let mut rest: Vec<String> = Vec::new();
    let mut taken = taken.iter().peekable();

    for line in from {
        while taken.peek().is_some_and(|t| *t < line) {
            taken.next();
        }
        if taken.peek() == Some(&line) {
            taken.next();
        } else {
            rest.push(line.clone());
        }
    }
    rest
}

proptest! {
    #[test]
    fn clearing_a_field_removes_only_its_own_lines(
        input in input_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let keys: Vec<String> = input.fields.keys().cloned().collect();
        prop_assume!(!keys.is_empty());
        let key: &String = pick.get(&keys);

        let mut cleared: Input = input.clone();
        cleared.fields.remove(key);

        let original_message = render(&input);
        let cleared_message = render(&cleared);
        let original_lines: Vec<&str> = original_message.split('\n').collect();
        let cleared_lines: Vec<&str> = cleared_message.split('\n').collect();

        prop_assert!(
            is_subsequence(&cleared_lines, &original_lines),
            "clearing {:?} reordered or added lines",
            key
        );

        // the field's own lines: what it adds to an otherwise empty form
        let mut alone: Input = Input { fields: FieldValues::new(), ..input.clone() };
        let empty_message = render(&alone);
        alone.fields.insert(key.clone(), input.fields[key].clone());
        let own_lines: Vec<String> =
            multiset_difference(&content_lines(&render(&alone)), &content_lines(&empty_message));

        let removed: Vec<String> =
            multiset_difference(&content_lines(&original_message), &content_lines(&cleared_message));

        prop_assert_eq!(removed, own_lines, "clearing {:?}", key);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Tag chips
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn tags_render_in_input_order(input in input_strategy()) {
        prop_assume!(!input.tags.is_empty());
        let message = render(&input);

        let expected: String = input
            .tags
            .iter()
            .map(|tag| format!("[{}]", tag))
            .collect::<Vec<String>>()
            .join(" ");

        let lines: Vec<&str> = message.split('\n').collect();
        let label = match input.language {
            Language::En => "*Assessment:*",
            Language::Ar => "*التقييم:*",
        };
        let label_idx = lines.iter().position(|line| line.ends_with(label));
        prop_assert!(label_idx.is_some());
        prop_assert_eq!(lines[label_idx.unwrap() + 1], expected.as_str());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Bilingual block structure
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn language_does_not_change_structure(input in input_strategy()) {
        let english = render(&Input { language: Language::En, ..input.clone() });
        let arabic = render(&Input { language: Language::Ar, ..input });

        let shape = |message: &str| -> Vec<bool> {
            message.split('\n').map(|line| line.is_empty()).collect()
        };

        prop_assert_eq!(line_count(&english), line_count(&arabic));
        prop_assert_eq!(shape(&english), shape(&arabic));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Photo numbering
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn photo_numbers_match_list_positions(input in input_strategy()) {
        let message = render(&input);

        for (index, photo) in input.photos.iter().enumerate() {
            if photo.starts_with("http") {
                let numbered = format!("{}. {}", index + 1, photo);
                prop_assert!(message.split('\n').any(|line| line == numbered));
            }
        }

        let attached = input.photos.iter().filter(|p| !p.starts_with("http")).count();
        let note_present = message.contains("photo(s) attached") || message.contains("صورة مرفقة");
        prop_assert_eq!(attached > 0, note_present);
    }
}
