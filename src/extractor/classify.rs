/// Tag every post carries, listed after any topical tag.
pub const ANNOUNCEMENT: &str = "announcement";

struct Rule {
    matches: fn(&str) -> bool,
    categories: &'static [&'static str],
}

// Evaluated top to bottom against the lower-cased title; first match wins.
const RULES: &[Rule] = &[
    Rule {
        matches: is_release,
        categories: &["release", ANNOUNCEMENT],
    },
    Rule {
        matches: is_bugfix,
        categories: &["bugfix", ANNOUNCEMENT],
    },
    Rule {
        matches: is_education,
        categories: &["education", ANNOUNCEMENT],
    },
];

const DEFAULT_CATEGORIES: &[&str] = &[ANNOUNCEMENT];

fn is_release(title: &str) -> bool {
    title.contains("version") && title.contains("released")
}

fn is_bugfix(title: &str) -> bool {
    title.contains("bug")
}

fn is_education(title: &str) -> bool {
    title.contains("course") || title.contains("tutorial")
}

/// Category tags for a post, guessed from its title.
pub fn categorize(title: &str) -> &'static [&'static str] {
    let title = title.to_lowercase();
    RULES
        .iter()
        .find(|rule| (rule.matches)(&title))
        .map_or(DEFAULT_CATEGORIES, |rule| rule.categories)
}
