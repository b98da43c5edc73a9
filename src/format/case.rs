//! Case conversion shared by every formatter. Word splitting covers the
//! full camel/Pascal/snake/kebab/title matrix, including camelCase
//! boundary splitting in addition to the usual `_`/`-`/space delimiters.

/// Split `s` into words on `-`, `_`, `.`, space, and camelCase boundaries
/// (lower→upper, or upper-run→upper+lower like `XMLParser` → `XML`, `Parser`).
pub fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == '_' || c == '.' || c == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if i > 0 {
            let prev = chars[i - 1];
            let next = chars.get(i + 1);
            let lower_to_upper = prev.is_lowercase() && c.is_uppercase();
            let acronym_to_word = prev.is_uppercase()
                && c.is_uppercase()
                && next.map(|n| n.is_lowercase()).unwrap_or(false);
            if (lower_to_upper || acronym_to_word) && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

pub fn to_camel_case(s: &str) -> String {
    let words = split_words(s);
    let mut out = String::new();
    for (i, w) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(&w.to_lowercase());
        } else {
            out.push_str(&capitalize(w));
        }
    }
    out
}

pub fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

pub fn to_snake_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

pub fn to_kebab_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

pub fn to_title_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(w: &str) -> String {
    let mut chars = w.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_delimiters_and_camel_boundaries() {
        assert_eq!(split_words("color-primary"), vec!["color", "primary"]);
        assert_eq!(split_words("color_primary"), vec!["color", "primary"]);
        assert_eq!(split_words("color.primary"), vec!["color", "primary"]);
        assert_eq!(split_words("colorPrimary"), vec!["color", "Primary"]);
    }

    #[test]
    fn converts_every_case() {
        assert_eq!(to_camel_case("color-primary"), "colorPrimary");
        assert_eq!(to_pascal_case("color-primary"), "ColorPrimary");
        assert_eq!(to_snake_case("color-primary"), "color_primary");
        assert_eq!(to_kebab_case("color_primary"), "color-primary");
        assert_eq!(to_title_case("color-primary"), "Color Primary");
    }

    #[test]
    fn kebab_case_is_idempotent_on_token_names() {
        assert_eq!(to_kebab_case("color-primary"), "color-primary");
    }
}
