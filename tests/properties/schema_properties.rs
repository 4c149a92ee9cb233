use proptest::prelude::*;
use serde_json::json;

use skillmap::model::{Module, Objective, Skillmap};
use skillmap::schema::validate;

fn objective() -> impl Strategy<Value = Objective> {
    (".*", prop::collection::vec(".*", 0..4)).prop_map(|(goal, skills)| Objective { goal, skills })
}

fn module() -> impl Strategy<Value = Module> {
    (".*", prop::collection::vec(objective(), 0..4))
        .prop_map(|(title, objectives)| Module { title, objectives })
}

fn skillmap() -> impl Strategy<Value = Skillmap> {
    (".*", ".*", prop::collection::vec(module(), 0..5)).prop_map(|(title, description, modules)| {
        Skillmap {
            title,
            description,
            modules,
        }
    })
}

proptest! {
    #[test]
    fn test_validate_accepts_serialized_documents(doc in skillmap()) {
        let value = serde_json::to_value(&doc).unwrap();
        prop_assert_eq!(validate(&value).unwrap(), doc);
    }

    #[test]
    fn test_non_string_title_is_rejected(title in prop_oneof![
        any::<i64>().prop_map(|n| json!(n)),
        any::<bool>().prop_map(|b| json!(b)),
        Just(json!(null)),
        Just(json!([])),
        Just(json!({})),
    ]) {
        let raw = json!({"title": title, "description": "", "modules": []});
        let err = validate(&raw).unwrap_err();
        prop_assert_eq!(err.path.as_str(), "title");
    }

    #[test]
    fn test_validate_ignores_unknown_fields(doc in skillmap(), extra in ".*") {
        let mut value = serde_json::to_value(&doc).unwrap();
        value["extra"] = json!(extra);
        prop_assert_eq!(validate(&value).unwrap(), doc);
    }
}
