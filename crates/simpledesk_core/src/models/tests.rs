use super::*;
use serde_json::json;

#[test]
fn note_serializes_as_text_object() {
    let value = serde_json::to_value(Note::new("hello")).expect("serialize");
    assert_eq!(value, json!({ "text": "hello" }));
}

#[test]
fn note_missing_text_defaults_to_empty() {
    let note: Note = serde_json::from_str("{}").expect("parse");
    assert_eq!(note, Note::default());
}

#[test]
fn todo_item_tolerates_missing_fields() {
    let items: Vec<TodoItem> =
        serde_json::from_str(r#"[{"text":"a"},{"done":true}]"#).expect("parse");
    assert_eq!(
        items,
        vec![
            TodoItem::new("a"),
            TodoItem {
                text: String::new(),
                done: true,
            },
        ]
    );
}

#[test]
fn todo_item_labels_reflect_done_state() {
    let mut item = TodoItem::new("write report");
    assert_eq!(item.export_line(), "[ ] write report");
    assert_eq!(item.display_label(), "• write report");

    item.done = true;
    assert_eq!(item.export_line(), "[x] write report");
    assert_eq!(item.display_label(), "✔ write report");
}
