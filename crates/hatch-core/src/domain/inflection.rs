//! English pluralization for service names.
//!
//! Only the trailing word of a compound identifier is inflected, so
//! `userAccount` becomes `userAccounts` and `audit_entry` becomes
//! `audit_entries`. The first letter of the inflected word keeps its case.
//!
//! Rules are applied in this order, first match wins:
//!
//! 1. uncountable nouns (`sheep`, `data`, `news`, ...) are returned as-is
//! 2. irregular nouns (`person` → `people`, `child` → `children`, ...)
//! 3. words that are already plural (`messages`, `people`) are returned as-is
//! 4. suffix rules (`quiz` → `quizzes`, `box` → `boxes`, `city` → `cities`, ...)
//! 5. otherwise append `s`

const UNCOUNTABLE: &[&str] = &[
    "data",
    "deer",
    "equipment",
    "feedback",
    "fish",
    "information",
    "metadata",
    "money",
    "news",
    "police",
    "rice",
    "series",
    "sheep",
    "species",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("man", "men"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("tooth", "teeth"),
    ("woman", "women"),
];

/// Words ending in `f`/`fe` whose plural ends in `ves`.
const F_TO_VES: &[&str] = &[
    "calf", "elf", "half", "knife", "leaf", "life", "loaf", "self", "sheaf", "shelf", "thief",
    "wife", "wolf",
];

/// Words ending in a consonant + `o` that take `es`.
const O_TO_OES: &[&str] = &["echo", "embargo", "hero", "potato", "tomato", "torpedo", "veto"];

/// Singulars ending in a plain `s` that would otherwise read as plurals.
const SINGULAR_S: &[&str] = &["alias", "atlas", "canvas", "gas", "lens"];

/// Latin and Greek singulars with classical plurals.
const CLASSICAL: &[(&str, &str)] = &[
    ("alumnus", "alumni"),
    ("analysis", "analyses"),
    ("axis", "axes"),
    ("basis", "bases"),
    ("cactus", "cacti"),
    ("criterion", "criteria"),
    ("crisis", "crises"),
    ("datum", "data"),
    ("diagnosis", "diagnoses"),
    ("focus", "foci"),
    ("fungus", "fungi"),
    ("index", "indices"),
    ("matrix", "matrices"),
    ("medium", "media"),
    ("nucleus", "nuclei"),
    ("octopus", "octopi"),
    ("phenomenon", "phenomena"),
    ("radius", "radii"),
    ("stimulus", "stimuli"),
    ("syllabus", "syllabi"),
    ("thesis", "theses"),
    ("vertex", "vertices"),
];

/// Pluralize `word` using standard English rules.
///
/// Pure and deterministic; an empty input yields an empty output.
pub fn pluralize(word: &str) -> String {
    let split = trailing_word_start(word);
    let (prefix, last) = word.split_at(split);
    if last.is_empty() {
        return word.to_string();
    }

    format!("{prefix}{}", pluralize_word(last))
}

/// Byte offset where the last word of a compound identifier begins.
///
/// Boundaries are `_`, `-`, or a lowercase→uppercase transition.
fn trailing_word_start(word: &str) -> usize {
    let mut start = 0;
    let mut prev: Option<char> = None;

    for (idx, ch) in word.char_indices() {
        if ch == '_' || ch == '-' {
            start = idx + ch.len_utf8();
        } else if ch.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit())
        {
            start = idx;
        }
        prev = Some(ch);
    }

    start
}

fn pluralize_word(word: &str) -> String {
    let lower = word.to_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }

    if let Some(plural) = lookup(IRREGULAR, &lower).or_else(|| lookup(CLASSICAL, &lower)) {
        return match_case(word, plural);
    }

    if is_plural(&lower) {
        return word.to_string();
    }

    if lower.ends_with("quiz") {
        return format!("{word}zes");
    }

    if F_TO_VES.contains(&lower.as_str()) {
        let stem = word
            .strip_suffix("fe")
            .or_else(|| word.strip_suffix('f'))
            .unwrap_or(word);
        return format!("{stem}ves");
    }

    if O_TO_OES.contains(&lower.as_str()) {
        return format!("{word}es");
    }

    if ["s", "x", "z", "ch", "sh"].iter().any(|s| lower.ends_with(s)) {
        return format!("{word}es");
    }

    if let Some(stem) = lower.strip_suffix('y') {
        if stem.chars().last().is_some_and(|c| !is_vowel(c)) {
            return format!("{}ies", &word[..word.len() - 1]);
        }
    }

    format!("{word}s")
}

/// `-s` not preceded by `s`, `u` or `i` is a regular plural (`users`, `boxes`),
/// while `class`, `status` and `axis` stay singular.
fn is_plural(lower: &str) -> bool {
    let known = IRREGULAR
        .iter()
        .chain(CLASSICAL)
        .any(|(_, plural)| *plural == lower);
    if known {
        return true;
    }

    if SINGULAR_S.contains(&lower) {
        return false;
    }

    lower
        .strip_suffix('s')
        .and_then(|stem| stem.chars().last())
        .is_some_and(|c| !matches!(c, 's' | 'u' | 'i'))
}

fn lookup(table: &[(&str, &'static str)], lower: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(singular, _)| *singular == lower)
        .map(|(_, plural)| *plural)
}

/// Carry the capitalization of `original`'s first letter onto `plural`.
fn match_case(original: &str, plural: &str) -> String {
    if original.chars().next().is_some_and(char::is_uppercase) {
        let mut chars = plural.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    } else {
        plural.to_string()
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_nouns_take_s() {
        assert_eq!(pluralize("service"), "services");
        assert_eq!(pluralize("message"), "messages");
        assert_eq!(pluralize("day"), "days");
    }

    #[test]
    fn sibilants_take_es() {
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("bus"), "buses");
        assert_eq!(pluralize("church"), "churches");
        assert_eq!(pluralize("wish"), "wishes");
        assert_eq!(pluralize("buzz"), "buzzes");
        assert_eq!(pluralize("quiz"), "quizzes");
    }

    #[test]
    fn consonant_y_becomes_ies() {
        assert_eq!(pluralize("city"), "cities");
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("key"), "keys");
    }

    #[test]
    fn irregular_and_classical_nouns() {
        assert_eq!(pluralize("person"), "people");
        assert_eq!(pluralize("child"), "children");
        assert_eq!(pluralize("mouse"), "mice");
        assert_eq!(pluralize("analysis"), "analyses");
        assert_eq!(pluralize("medium"), "media");
        assert_eq!(pluralize("index"), "indices");
    }

    #[test]
    fn f_and_o_endings() {
        assert_eq!(pluralize("knife"), "knives");
        assert_eq!(pluralize("shelf"), "shelves");
        assert_eq!(pluralize("roof"), "roofs");
        assert_eq!(pluralize("hero"), "heroes");
        assert_eq!(pluralize("photo"), "photos");
    }

    #[test]
    fn plural_names_are_unchanged() {
        assert_eq!(pluralize("messages"), "messages");
        assert_eq!(pluralize("users"), "users");
        assert_eq!(pluralize("services"), "services");
        assert_eq!(pluralize("boxes"), "boxes");
        assert_eq!(pluralize("people"), "people");
        assert_eq!(pluralize("userAccounts"), "userAccounts");
    }

    #[test]
    fn singulars_ending_in_s_are_still_inflected() {
        assert_eq!(pluralize("status"), "statuses");
        assert_eq!(pluralize("bus"), "buses");
        assert_eq!(pluralize("class"), "classes");
        assert_eq!(pluralize("gas"), "gases");
        assert_eq!(pluralize("alias"), "aliases");
    }

    #[test]
    fn uncountables_are_unchanged() {
        assert_eq!(pluralize("sheep"), "sheep");
        assert_eq!(pluralize("news"), "news");
        assert_eq!(pluralize("metadata"), "metadata");
    }

    #[test]
    fn only_trailing_word_is_inflected() {
        assert_eq!(pluralize("userAccount"), "userAccounts");
        assert_eq!(pluralize("salesPerson"), "salesPeople");
        assert_eq!(pluralize("audit_entry"), "audit_entries");
        assert_eq!(pluralize("mail-box"), "mail-boxes");
    }

    #[test]
    fn capitalization_is_preserved() {
        assert_eq!(pluralize("Person"), "People");
        assert_eq!(pluralize("Box"), "Boxes");
    }

    #[test]
    fn empty_and_trailing_separator() {
        assert_eq!(pluralize(""), "");
        assert_eq!(pluralize("user_"), "user_");
    }

    #[test]
    fn pluralize_is_deterministic() {
        for word in ["box", "person", "service", "category"] {
            assert_eq!(pluralize(word), pluralize(word));
        }
    }
}
