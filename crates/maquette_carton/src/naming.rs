//! Naming utilities for labels, ids and identifiers.
//!
//! Property names arrive in every convention a TypeScript codebase can
//! produce (`camelCase`, `snake_case`, `kebab-case`, `SCREAMING_CASE`).
//! These helpers split them into words so callers can build human labels.

/// Split an identifier into words.
///
/// Boundaries are `_`, `-`, `.`, whitespace, a lowercase/digit to uppercase
/// transition, and the end of an acronym (`XMLParser` → `XML`, `Parser`).
///
/// # Examples
/// ```
/// use maquette_carton::naming::split_words;
///
/// assert_eq!(split_words("firstName"), vec!["first", "Name"]);
/// assert_eq!(split_words("user_id"), vec!["user", "id"]);
/// assert_eq!(split_words("XMLParser"), vec!["XML", "Parser"]);
/// ```
pub fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c == '.' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            // fooBar, foo1Bar, or the last capital of an acronym followed by lowercase
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
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

/// Capitalize the first character and lowercase the rest.
#[inline]
fn title_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Convert an identifier into space separated title-cased words.
///
/// # Examples
/// ```
/// use maquette_carton::naming::to_title_words;
///
/// assert_eq!(to_title_words("birthDate"), "Birth Date");
/// assert_eq!(to_title_words("zip-code"), "Zip Code");
/// assert_eq!(to_title_words("cpf"), "Cpf");
/// ```
pub fn to_title_words(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| title_word(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert kebab-case, snake_case or camelCase to PascalCase.
///
/// # Examples
/// ```
/// use maquette_carton::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("user-profile"), "UserProfile");
/// assert_eq!(to_pascal_case("userProfile"), "UserProfile");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '-' || c == '_' || c.is_whitespace() {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("firstName"), vec!["first", "Name"]);
        assert_eq!(split_words("first_name"), vec!["first", "name"]);
        assert_eq!(split_words("first-name"), vec!["first", "name"]);
        assert_eq!(split_words("FIRST_NAME"), vec!["FIRST", "NAME"]);
        assert_eq!(split_words("userID"), vec!["user", "ID"]);
        assert_eq!(split_words("address2Line"), vec!["address2", "Line"]);
        assert!(split_words("").is_empty());
        assert!(split_words("__").is_empty());
    }

    #[test]
    fn test_title_words() {
        assert_eq!(to_title_words("firstName"), "First Name");
        assert_eq!(to_title_words("FIRST_NAME"), "First Name");
        assert_eq!(to_title_words("userID"), "User Id");
        assert_eq!(to_title_words("address.street"), "Address Street");
        assert_eq!(to_title_words(""), "");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_pascal_case("my-component"), "MyComponent");
        assert_eq!(to_pascal_case("my_component"), "MyComponent");
        assert_eq!(to_pascal_case("MyComponent"), "MyComponent");
        assert_eq!(to_pascal_case(""), "");
    }
}
