//! Identifier casing.

/// Separators between namespace segments of a qualified type name.
const NAMESPACE_SEPARATORS: [&str; 2] = ["\\", "::"];

/// Turns a qualified type name into a snake_case key.
///
/// Namespace segments are dropped, so `App\Model\UserAccount` and
/// `app::model::UserAccount` both become `user_account`.
pub fn namespace_as_array_key(qualified_type_name: &str) -> String {
    let class_name = NAMESPACE_SEPARATORS
        .iter()
        .fold(qualified_type_name, |name, separator| {
            name.rsplit(*separator).next().unwrap_or(name)
        });
    camel_case_to_underscore(class_name)
}

/// Converts camelCase or PascalCase to snake_case.
pub fn camel_case_to_underscore(identifier: &str) -> String {
    camel_case_to_underscore_with(identifier, "_")
}

/// Converts camelCase or PascalCase to lowercase words joined by `splitter`.
///
/// A word boundary sits before every run of uppercase letters that does not
/// start the identifier. Inside a run that is followed by lowercase letters,
/// the last uppercase letter starts the next word: `UserID` becomes `user_id`,
/// `XMLParser` becomes `xml_parser`.
pub fn camel_case_to_underscore_with(identifier: &str, splitter: &str) -> String {
    let chars: Vec<char> = identifier.chars().collect();
    let mut output = String::with_capacity(identifier.len() + splitter.len() * 2);

    for (index, ch) in chars.iter().enumerate() {
        if index > 0 && ch.is_uppercase() {
            let starts_run = !chars[index - 1].is_uppercase();
            let starts_word = chars
                .get(index + 1)
                .is_some_and(|next| next.is_lowercase());
            if starts_run || starts_word {
                output.push_str(splitter);
            }
        }
        output.extend(ch.to_lowercase());
    }

    output
}

#[cfg(test)]
mod tests {
    use super::{camel_case_to_underscore, camel_case_to_underscore_with, namespace_as_array_key};

    #[test]
    fn pascal_and_camel_case() {
        assert_eq!(camel_case_to_underscore("UserId"), "user_id");
        assert_eq!(camel_case_to_underscore("userAccountId"), "user_account_id");
        assert_eq!(camel_case_to_underscore("user"), "user");
        assert_eq!(camel_case_to_underscore(""), "");
    }

    #[test]
    fn acronyms() {
        assert_eq!(camel_case_to_underscore("XMLParser"), "xml_parser");
        assert_eq!(camel_case_to_underscore("UserID"), "user_id");
        assert_eq!(camel_case_to_underscore("parseHTTPResponse"), "parse_http_response");
        assert_eq!(camel_case_to_underscore("ID"), "id");
    }

    #[test]
    fn digits_do_not_join_words() {
        assert_eq!(camel_case_to_underscore("Base64Encoder"), "base64_encoder");
    }

    #[test]
    fn custom_splitter() {
        assert_eq!(camel_case_to_underscore_with("BlogPost", "-"), "blog-post");
        assert_eq!(camel_case_to_underscore_with("XMLParser", "."), "xml.parser");
    }

    #[test]
    fn namespaces_are_stripped() {
        assert_eq!(namespace_as_array_key("App\\Model\\UserAccount"), "user_account");
        assert_eq!(namespace_as_array_key("app::model::UserAccount"), "user_account");
        assert_eq!(namespace_as_array_key("Order"), "order");
    }
}
