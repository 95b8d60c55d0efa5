//! Fixer naming.
//!
//! Every fixer is published under the vendor prefix, followed by the
//! snake-cased type name without its `Fixer` suffix:
//! `SpaceInsideParenthesisFixer` is `Oyova/space_inside_parenthesis`.

/// Vendor prefix of every fixer name.
pub const VENDOR: &str = "Oyova";

/// Public name of the fixer type at `type_path`.
///
/// Accepts a bare type name or a full path as produced by
/// [`std::any::type_name`]; only the last segment is used.
pub fn fixer_name(type_path: &str) -> String {
    let short = type_path.rsplit("::").next().unwrap_or(type_path);
    let short = short.strip_suffix("Fixer").unwrap_or(short);
    format!("{VENDOR}/{}", camel_to_snake(short))
}

/// `SpaceInsideParenthesis` -> `space_inside_parenthesis`.
///
/// Acronym runs stay together: `PhpUnitHTMLTag` -> `php_unit_html_tag`.
fn camel_to_snake(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut snake = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
            if prev.is_ascii_lowercase() || prev.is_ascii_digit() || (prev.is_ascii_uppercase() && next_is_lower) {
                snake.push('_');
            }
        }
        snake.push(c.to_ascii_lowercase());
    }
    snake
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_path_and_suffix() {
        assert_eq!(
            fixer_name("oyova_fixers::space_inside_parenthesis::SpaceInsideParenthesisFixer"),
            "Oyova/space_inside_parenthesis"
        );
        assert_eq!(fixer_name("BracesFixer"), "Oyova/braces");
    }

    #[test]
    fn keeps_name_without_suffix() {
        assert_eq!(fixer_name("Braces"), "Oyova/braces");
    }

    #[test]
    fn acronyms_stay_together() {
        assert_eq!(camel_to_snake("PhpUnitHTMLTag"), "php_unit_html_tag");
        assert_eq!(camel_to_snake("Psr4"), "psr4");
        assert_eq!(camel_to_snake("Utf8Encoder"), "utf8_encoder");
    }
}
