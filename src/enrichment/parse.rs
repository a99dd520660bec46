//! Extraction of the JSON object embedded in a model's text answer

/// First balanced `{...}` region of `text`
///
/// Braces inside JSON string literals are ignored, so descriptions like
/// `"use {code}"` do not end the object early.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_object() {
        assert_eq!(extract_json_object(r#"{"a": 1}"#), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn test_fenced_answer() {
        let text = "Claro! Aqui está:\n```json\n{\"description\": \"x\", \"category\": \"y\", \"suggestedPrice\": 10}\n```\nBoa venda!";
        assert_eq!(
            extract_json_object(text),
            Some("{\"description\": \"x\", \"category\": \"y\", \"suggestedPrice\": 10}")
        );
    }

    #[test]
    fn test_nested_and_quoted_braces() {
        let text = r#"prefix {"a": {"b": "}{"}, "c": "say \"{hi}\""} trailing {"second": 2}"#;
        assert_eq!(
            extract_json_object(text),
            Some(r#"{"a": {"b": "}{"}, "c": "say \"{hi}\""}"#)
        );
    }

    #[test]
    fn test_no_object() {
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object(r#"{"unterminated": 1"#), None);
    }
}
