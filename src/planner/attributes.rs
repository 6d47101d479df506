use std::sync::LazyLock;

use regex::Regex;

/// Matches cleanser annotations such as `-5 fullness`.
static CLEANSER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)-(\d+) (fullness|drunkenness|spleen)").expect("valid cleanser pattern")
});

/// Tags and cleanser amounts derived from a consumable's notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Attributes {
    pub salad: bool,
    pub saucy: bool,
    pub beer: bool,
    pub wine: bool,
    pub pizza: bool,
    pub martini: bool,
    pub vampyre: bool,
    pub cleanses_stomach: Option<i64>,
    pub cleanses_liver: Option<i64>,
    pub cleanses_spleen: Option<i64>,
}

impl Attributes {
    pub fn stomach_cleansed(&self) -> i64 {
        self.cleanses_stomach.unwrap_or(0)
    }

    pub fn liver_cleansed(&self) -> i64 {
        self.cleanses_liver.unwrap_or(0)
    }

    pub fn spleen_cleansed(&self) -> i64 {
        self.cleanses_spleen.unwrap_or(0)
    }
}

/// Split notes on commas outside double quotes and parentheses.
///
/// Tokens are trimmed; empty tokens are dropped.
pub fn tokenize_notes(notes: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut depth = 0usize;

    for ch in notes.chars() {
        match ch {
            '"' if depth == 0 => in_quotes = !in_quotes,
            '(' if !in_quotes => depth += 1,
            ')' if !in_quotes && depth > 0 => depth -= 1,
            ',' if !in_quotes && depth == 0 => {
                push_token(&mut tokens, &current);
                current.clear();
                continue;
            }
            _ => {}
        }
        current.push(ch);
    }
    push_token(&mut tokens, &current);

    tokens
}

fn push_token(tokens: &mut Vec<String>, raw: &str) {
    let token = raw.trim();
    if !token.is_empty() {
        tokens.push(token.to_string());
    }
}

/// Parse notes into attributes.
///
/// Tag literals are case-sensitive. When several cleanser clauses name the
/// same organ, the last one wins. Unrecognized tokens are ignored.
pub fn parse_notes(notes: &str) -> Attributes {
    let mut attrs = Attributes::default();

    for token in tokenize_notes(notes) {
        match token.as_str() {
            "SALAD" => attrs.salad = true,
            "SAUCY" => attrs.saucy = true,
            "BEER" => attrs.beer = true,
            "WINE" => attrs.wine = true,
            "PIZZA" => attrs.pizza = true,
            "MARTINI" => attrs.martini = true,
            "Vampyre" => attrs.vampyre = true,
            other => apply_cleanser(&mut attrs, other),
        }
    }

    attrs
}

fn apply_cleanser(attrs: &mut Attributes, token: &str) {
    let Some(caps) = CLEANSER.captures(token) else {
        return;
    };
    let Ok(amount) = caps[1].parse::<i64>() else {
        return;
    };

    match caps[2].to_lowercase().as_str() {
        "fullness" => attrs.cleanses_stomach = Some(amount),
        "drunkenness" => attrs.cleanses_liver = Some(amount),
        "spleen" => attrs.cleanses_spleen = Some(amount),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple() {
        assert_eq!(tokenize_notes("SALAD, SAUCY"), vec!["SALAD", "SAUCY"]);
    }

    #[test]
    fn test_tokenize_respects_quotes_and_parens() {
        let tokens = tokenize_notes(r#"BEER, "a, b", (x, y), WINE"#);
        assert_eq!(tokens, vec!["BEER", r#""a, b""#, "(x, y)", "WINE"]);
    }

    #[test]
    fn test_tokenize_nested_parens() {
        let tokens = tokenize_notes("(a, (b, c), d), PIZZA");
        assert_eq!(tokens, vec!["(a, (b, c), d)", "PIZZA"]);
    }

    #[test]
    fn test_tokenize_empty_and_stray_commas() {
        assert!(tokenize_notes("").is_empty());
        assert_eq!(tokenize_notes(",SALAD,,"), vec!["SALAD"]);
    }

    #[test]
    fn test_tokenize_unbalanced_never_panics() {
        assert_eq!(tokenize_notes("(a, b"), vec!["(a, b"]);
        assert_eq!(tokenize_notes("a), b"), vec!["a)", "b"]);
        assert_eq!(tokenize_notes("\"open, SALAD"), vec!["\"open, SALAD"]);
    }

    #[test]
    fn test_parse_tags_case_sensitive() {
        let attrs = parse_notes("SALAD, MARTINI, Vampyre");
        assert!(attrs.salad);
        assert!(attrs.martini);
        assert!(attrs.vampyre);
        assert!(!attrs.beer);

        let lower = parse_notes("salad, vampyre");
        assert!(!lower.salad);
        assert!(!lower.vampyre);
    }

    #[test]
    fn test_parse_cleansers() {
        let attrs = parse_notes("-5 fullness");
        assert_eq!(attrs.cleanses_stomach, Some(5));
        assert_eq!(attrs.stomach_cleansed(), 5);

        let attrs = parse_notes("BEER, -1 Drunkenness");
        assert!(attrs.beer);
        assert_eq!(attrs.cleanses_liver, Some(1));

        let attrs = parse_notes("Reusable, -3 SPLEEN, (cleans you up)");
        assert_eq!(attrs.cleanses_spleen, Some(3));
        assert_eq!(attrs.cleanses_stomach, None);
    }

    #[test]
    fn test_cleanser_last_wins() {
        let attrs = parse_notes("-2 fullness, -4 fullness, -1 spleen");
        assert_eq!(attrs.cleanses_stomach, Some(4));
        assert_eq!(attrs.cleanses_spleen, Some(1));
    }

    #[test]
    fn test_cleanser_inside_parens_still_matches_token() {
        let attrs = parse_notes("(-2 fullness, sometimes)");
        assert_eq!(attrs.cleanses_stomach, Some(2));
    }

    #[test]
    fn test_unknown_tokens_ignored() {
        assert_eq!(parse_notes("QUEST, 10 Adventures"), Attributes::default());
    }
}
