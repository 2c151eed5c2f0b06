//! Naming convention that expands a model name into every identifier the
//! document uses for it.
//!
//! - `Library` → plural `Libraries`
//! - `Library` → path segment `libraries`
//! - `Library` → id parameter `libraryId`, token `{libraryId}`
//! - (`schemas`, `Library`) → `#/components/schemas/Library`

use std::fmt;
use std::sync::LazyLock;

use heck::ToLowerCamelCase;
use regex::{Captures, Regex};

/// Sections of `components` a `$ref` can point into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentSection {
    Parameters,
    PathItems,
    RequestBodies,
    Responses,
    Schemas,
}

impl ComponentSection {
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentSection::Parameters => "parameters",
            ComponentSection::PathItems => "pathItems",
            ComponentSection::RequestBodies => "requestBodies",
            ComponentSection::Responses => "responses",
            ComponentSection::Schemas => "schemas",
        }
    }

    pub fn parse(section: &str) -> Option<Self> {
        match section {
            "parameters" => Some(ComponentSection::Parameters),
            "pathItems" => Some(ComponentSection::PathItems),
            "requestBodies" => Some(ComponentSection::RequestBodies),
            "responses" => Some(ComponentSection::Responses),
            "schemas" => Some(ComponentSection::Schemas),
            _ => None,
        }
    }
}

impl fmt::Display for ComponentSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `#/components/{section}/{name}`
pub fn reference_path(section: ComponentSection, name: &str) -> String {
    format!("#/components/{}/{}", section.as_str(), name)
}

/// `{param}`, as used inside a path template.
pub fn path_parameter_token(param: &str) -> String {
    format!("{{{param}}}")
}

/// Name of the id path parameter of `model`: `Library` → `libraryId`.
pub fn collection_id_param(model: &str) -> String {
    format!("{}Id", model.to_lower_camel_case())
}

/// Path segment addressing the collection of `model`: `Library` → `libraries`.
pub fn collection_segment(model: &str) -> String {
    plural_form(model).to_lowercase()
}

/// Component key of the list schema and list response of `model`.
///
/// Usually the plural; uncountable names (`Series`) get a `List` suffix so
/// they don't overwrite the singular component.
pub fn collection_name(model: &str) -> String {
    let plural = plural_form(model);
    if plural == model {
        format!("{model}List")
    } else {
        plural
    }
}

/// Words whose plural is the word itself.
const UNCOUNTABLE: &[&str] = &[
    "advice", "aircraft", "analytics", "athletics", "audio", "bison", "chassis", "clothing",
    "corps", "debris", "equipment", "firmware", "gallows", "hardware", "headquarters",
    "information", "jeans", "media", "moose", "news", "personnel", "police", "premises",
    "research", "salmon", "scissors", "series", "software", "species", "staff", "swine",
    "traffic", "trout", "welfare", "wildlife",
];

/// Suffixes that mark a word as uncountable (`sheep`, `Chinese`, `reindeer`).
const UNCOUNTABLE_SUFFIXES: &[&str] = &[r"[^aeiou]ese$", "deer$", "fish$", "measles$", "pox$", "sheep$"];

/// Singular to plural for words no suffix rule covers.
const IRREGULAR: &[(&str, &str)] = &[
    ("axe", "axes"),
    ("carve", "carves"),
    ("die", "dice"),
    ("dingo", "dingoes"),
    ("echo", "echoes"),
    ("eave", "eaves"),
    ("foot", "feet"),
    ("genus", "genera"),
    ("goose", "geese"),
    ("groove", "grooves"),
    ("human", "humans"),
    ("ox", "oxen"),
    ("passerby", "passersby"),
    ("pickaxe", "pickaxes"),
    ("proof", "proofs"),
    ("quiz", "quizzes"),
    ("schema", "schemata"),
    ("thief", "thieves"),
    ("tooth", "teeth"),
    ("tornado", "tornadoes"),
    ("torpedo", "torpedoes"),
    ("valve", "valves"),
    ("volcano", "volcanoes"),
];

/// Suffix rules, most general first. The last matching rule wins.
const PLURAL_RULES: &[(&str, &str)] = &[
    ("s?$", "s"),
    ("([^aeiou]ese)$", "${1}"),
    ("(ax|test)is$", "${1}es"),
    ("(alias|[^aou]us|t[lm]as|gas|ris)$", "${1}es"),
    ("(e[mn]u)s?$", "${1}s"),
    ("([^l]ias|[aeiou]las|[ejzr]as|[iu]am)$", "${1}"),
    (
        "(alumn|syllab|vir|radi|nucle|fung|cact|stimul|termin|bacill|foc|uter|loc|strat)(?:us|i)$",
        "${1}i",
    ),
    ("(alumn|alg|vertebr)(?:a|ae)$", "${1}ae"),
    ("(seraph|cherub)(?:im)?$", "${1}im"),
    ("(her|at|gr)o$", "${1}oes"),
    (
        "(agend|addend|millenni|dat|extrem|bacteri|desiderat|strat|candelabr|errat|ov|symposi|curricul|automat|quor)(?:a|um)$",
        "${1}a",
    ),
    (
        "(apheli|hyperbat|periheli|asyndet|noumen|phenomen|criteri|organ|prolegomen|hedr|automat)(?:a|on)$",
        "${1}a",
    ),
    ("sis$", "ses"),
    ("(?:(kni|wi|li)fe|(ar|l|ea|eo|oa|hoo)f)$", "${1}${2}ves"),
    ("([^aeiouy]|qu)y$", "${1}ies"),
    ("([^ch][ieo][ln])ey$", "${1}ies"),
    ("(x|ch|ss|sh|zz)$", "${1}es"),
    ("(matr|cod|mur|sil|vert|ind|append)(?:ix|ex)$", "${1}ices"),
    (r"\b((?:tit)?m|l)(?:ice|ouse)$", "${1}ice"),
    ("(pe)(?:rson|ople)$", "${1}ople"),
    ("(child)(?:ren)?$", "${1}ren"),
    ("eaux$", "${0}"),
    ("m[ae]n$", "men"),
];

static COMPILED_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    PLURAL_RULES
        .iter()
        .map(|(pattern, replacement)| {
            let re = Regex::new(&format!("(?i){pattern}")).expect("Invalid plural rule regex");
            (re, *replacement)
        })
        .collect()
});

static UNCOUNTABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i)(?:{})", UNCOUNTABLE_SUFFIXES.join("|")))
        .expect("Invalid uncountable regex")
});

/// English plural of `word`. The replaced part takes on the case of the
/// text it replaces, so `Library` → `Libraries` and `LIBRARY` → `LIBRARIES`.
pub fn plural_form(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.is_empty() {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(one, _)| *one == lower) {
        return restore_case(word, plural);
    }
    if IRREGULAR.iter().any(|(_, many)| *many == lower) {
        return restore_case(word, &lower);
    }
    if UNCOUNTABLE.contains(&lower.as_str()) || UNCOUNTABLE_RE.is_match(word) {
        return word.to_string();
    }

    let Some((re, replacement)) = COMPILED_RULES.iter().rev().find(|(re, _)| re.is_match(word))
    else {
        return word.to_string();
    };
    re.replace(word, |caps: &Captures<'_>| {
        let mut expanded = String::new();
        caps.expand(replacement, &mut expanded);
        let matched = &caps[0];
        if matched.is_empty() {
            // Appended suffix follows the case of the last character.
            let start = caps.get(0).map_or(word.len(), |m| m.start());
            let previous: String = word[..start].chars().last().into_iter().collect();
            restore_case(&previous, &expanded)
        } else {
            restore_case(matched, &expanded)
        }
    })
    .into_owned()
}

/// Give `token` the case pattern of `sample`: identical, all lowercase,
/// all uppercase or capitalized.
fn restore_case(sample: &str, token: &str) -> String {
    if sample == token {
        return token.to_string();
    }
    if sample == sample.to_lowercase() {
        return token.to_lowercase();
    }
    if sample == sample.to_uppercase() {
        return token.to_uppercase();
    }
    if sample.chars().next().is_some_and(char::is_uppercase) {
        let mut chars = token.chars();
        return match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        };
    }
    token.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_regular() {
        assert_eq!(plural_form("Author"), "Authors");
        assert_eq!(plural_form("User"), "Users");
        assert_eq!(plural_form("Volume"), "Volumes");
    }

    #[test]
    fn test_plural_consonant_y() {
        assert_eq!(plural_form("Library"), "Libraries");
        assert_eq!(plural_form("Story"), "Stories");
        assert_eq!(plural_form("Key"), "Keys");
    }

    #[test]
    fn test_plural_sibilant() {
        assert_eq!(plural_form("Box"), "Boxes");
        assert_eq!(plural_form("Match"), "Matches");
        assert_eq!(plural_form("Status"), "Statuses");
    }

    #[test]
    fn test_plural_uncountable_and_irregular() {
        assert_eq!(plural_form("Series"), "Series");
        assert_eq!(plural_form("Person"), "People");
        assert_eq!(plural_form("child"), "children");
        assert_eq!(plural_form("Shelf"), "Shelves");
        assert_eq!(plural_form("Quiz"), "Quizzes");
        assert_eq!(plural_form("Sheep"), "Sheep");
    }

    #[test]
    fn test_plural_common_suffixes() {
        assert_eq!(plural_form("Hero"), "Heroes");
        assert_eq!(plural_form("Potato"), "Potatoes");
        assert_eq!(plural_form("Analysis"), "Analyses");
        assert_eq!(plural_form("Criterion"), "Criteria");
        assert_eq!(plural_form("Matrix"), "Matrices");
        assert_eq!(plural_form("Knife"), "Knives");
    }

    #[test]
    fn test_plural_all_caps() {
        assert_eq!(plural_form("LIBRARY"), "LIBRARIES");
        assert_eq!(plural_form("AUTHOR"), "AUTHORS");
        assert_eq!(plural_form("PERSON"), "PEOPLE");
    }

    #[test]
    fn test_plural_keeps_inner_case() {
        assert_eq!(plural_form("Library"), "Libraries");
        assert_eq!(plural_form("library"), "libraries");
    }

    #[test]
    fn test_reference_path() {
        assert_eq!(
            reference_path(ComponentSection::Schemas, "Library"),
            "#/components/schemas/Library"
        );
        assert_eq!(
            reference_path(ComponentSection::RequestBodies, "Author"),
            "#/components/requestBodies/Author"
        );
        assert_eq!(
            reference_path(ComponentSection::PathItems, "Library"),
            "#/components/pathItems/Library"
        );
    }

    #[test]
    fn test_section_round_trip() {
        for section in [
            ComponentSection::Parameters,
            ComponentSection::PathItems,
            ComponentSection::RequestBodies,
            ComponentSection::Responses,
            ComponentSection::Schemas,
        ] {
            assert_eq!(ComponentSection::parse(section.as_str()), Some(section));
        }
        assert_eq!(ComponentSection::parse("securitySchemes"), None);
    }

    #[test]
    fn test_path_tokens() {
        assert_eq!(path_parameter_token("libraryId"), "{libraryId}");
        assert_eq!(collection_id_param("Library"), "libraryId");
        assert_eq!(collection_id_param("Series"), "seriesId");
        assert_eq!(collection_segment("Library"), "libraries");
        assert_eq!(collection_segment("Series"), "series");
    }

    #[test]
    fn test_collection_name() {
        assert_eq!(collection_name("Author"), "Authors");
        assert_eq!(collection_name("Series"), "SeriesList");
    }
}
