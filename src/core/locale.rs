//! Language model building.
//!
//! Flattens parsed locale documents into dotted key paths and merges the
//! files of each language.

use serde_json::Value;

use crate::core::data::{AllLanguages, LanguageEntry, LanguageMessages, LocaleDocument};

/// Flatten one document into the key paths it declares.
///
/// Leaves are normalized to strings: empty strings are kept, `null` becomes
/// an empty value, numbers and booleans keep their JSON text. String arrays
/// are stored as one joined entry; other arrays expand with numeric indices.
pub fn build_language(
    language: impl Into<String>,
    file_path: &str,
    document: &Value,
) -> LanguageMessages {
    let mut messages = LanguageMessages::new(language);
    messages.files.push(file_path.to_string());
    flatten_json(document, String::new(), file_path, &mut messages);
    messages
}

/// Build every language, merging files that share a language identifier.
///
/// Documents are merged in ascending file path order, so a key redefined by
/// several files of the same language keeps the value of the last one.
pub fn build_languages(documents: &[LocaleDocument]) -> AllLanguages {
    let mut ordered: Vec<&LocaleDocument> = documents.iter().collect();
    ordered.sort_by(|a, b| a.file_path.cmp(&b.file_path));

    let mut languages = AllLanguages::new();
    for doc in ordered {
        let messages = build_language(&doc.language, &doc.file_path, &doc.document);
        languages
            .entry(doc.language.clone())
            .or_insert_with(|| LanguageMessages::new(&doc.language))
            .merge(messages);
    }
    languages
}

fn join_key(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", prefix, segment)
    }
}

fn insert_leaf(result: &mut LanguageMessages, key: String, value: String, file_path: &str) {
    // A scalar document has no key to attach to.
    if key.is_empty() {
        return;
    }
    result
        .entries
        .insert(key, LanguageEntry::new(value, file_path));
}

fn flatten_json(value: &Value, prefix: String, file_path: &str, result: &mut LanguageMessages) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                flatten_json(val, join_key(&prefix, key), file_path, result);
            }
        }
        Value::String(s) => insert_leaf(result, prefix, s.clone(), file_path),
        Value::Null => insert_leaf(result, prefix, String::new(), file_path),
        Value::Bool(b) => insert_leaf(result, prefix, b.to_string(), file_path),
        Value::Number(n) => insert_leaf(result, prefix, n.to_string(), file_path),
        Value::Array(arr) => {
            if arr.is_empty() {
                return;
            }

            // String arrays are read as a whole (`t('list', { returnObjects: true })`).
            let is_string_array = arr.iter().all(|v| matches!(v, Value::String(_)));

            if is_string_array && !prefix.is_empty() {
                let values: Vec<&str> = arr.iter().filter_map(|v| v.as_str()).collect();
                insert_leaf(result, prefix, values.join(", "), file_path);
            } else {
                for (index, val) in arr.iter().enumerate() {
                    flatten_json(val, join_key(&prefix, &index.to_string()), file_path, result);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn values(messages: &LanguageMessages) -> Vec<(&str, &str)> {
        messages
            .entries
            .iter()
            .map(|(k, e)| (k.as_str(), e.value.as_str()))
            .collect()
    }

    #[test]
    fn test_flatten_nested() {
        let doc = json!({"Auth": {"Login": {"title": "Login", "button": "Submit"}}});
        let messages = build_language("en", "en.json", &doc);

        assert_eq!(
            values(&messages),
            vec![("Auth.Login.button", "Submit"), ("Auth.Login.title", "Login")]
        );
        assert_eq!(messages.language, "en");
        assert_eq!(messages.files, vec!["en.json"]);
    }

    #[test]
    fn test_flatten_root_level() {
        let doc = json!({"title": "Hello", "description": "World"});
        let messages = build_language("en", "en.json", &doc);

        assert_eq!(
            values(&messages),
            vec![("description", "World"), ("title", "Hello")]
        );
    }

    #[test]
    fn test_empty_string_is_preserved() {
        let doc = json!({"home": {"title": "", "subtitle": "Hi"}});
        let messages = build_language("en", "en.json", &doc);

        let entry = messages.get("home.title").unwrap();
        assert!(entry.is_empty());
        assert_eq!(entry.file_path, "en.json");
    }

    #[test]
    fn test_scalars_are_normalized() {
        let doc = json!({"count": 3, "enabled": true, "missing": null});
        let messages = build_language("en", "en.json", &doc);

        assert_eq!(
            values(&messages),
            vec![("count", "3"), ("enabled", "true"), ("missing", "")]
        );
    }

    #[test]
    fn test_arrays() {
        let doc = json!({
            "benefits": ["Fast", "Safe"],
            "faq": [{"q": "Why?"}, {"q": "How?"}],
            "none": [],
            "nested": {}
        });
        let messages = build_language("en", "en.json", &doc);

        assert_eq!(
            values(&messages),
            vec![
                ("benefits", "Fast, Safe"),
                ("faq.0.q", "Why?"),
                ("faq.1.q", "How?"),
            ]
        );
    }

    #[test]
    fn test_scalar_document_declares_nothing() {
        let messages = build_language("en", "en.json", &json!("just a string"));
        assert!(messages.is_empty());
    }

    #[test]
    fn test_build_languages_groups_by_language() {
        let docs = vec![
            LocaleDocument {
                language: "EN-us".to_string(),
                file_path: "/l/EN-us.json".to_string(),
                document: json!({"a": "A"}),
            },
            LocaleDocument {
                language: "EN-eu".to_string(),
                file_path: "/l/EN-eu.json".to_string(),
                document: json!({"a": "A", "b": ""}),
            },
        ];
        let languages = build_languages(&docs);

        assert_eq!(languages.len(), 2);
        assert_eq!(languages["EN-eu"].len(), 2);
        assert_eq!(languages["EN-us"].len(), 1);
    }

    #[test]
    fn test_build_languages_merges_split_files_deterministically() {
        let docs = vec![
            LocaleDocument {
                language: "en".to_string(),
                file_path: "/l/b/en.json".to_string(),
                document: json!({"title": "From b", "b": "B"}),
            },
            LocaleDocument {
                language: "en".to_string(),
                file_path: "/l/a/en.json".to_string(),
                document: json!({"title": "From a", "a": "A"}),
            },
        ];
        let languages = build_languages(&docs);
        let en = &languages["en"];

        assert_eq!(en.len(), 3);
        assert_eq!(en.get("title").unwrap().value, "From b");
        assert_eq!(en.files, vec!["/l/a/en.json", "/l/b/en.json"]);
    }
}
