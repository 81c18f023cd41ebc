//! Integration tests for the normalize -> classify -> format path.

use holotable_core::{
    classify, display_label, format_plain_value, FieldValue, LinkTable, Node, RenderMode,
    ResourceRecord, ResourceTable, TableRow,
};
use serde_json::json;

fn luke() -> serde_json::Value {
    json!({
        "name": "luke skywalker",
        "height": "172",
        "mass": "77",
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "homeworld": "https://swapi.dev/api/planets/1/",
        "films": [
            "https://swapi.dev/api/films/1/",
            "https://swapi.dev/api/films/2/",
            "https://swapi.dev/api/films/3/"
        ],
        "species": [],
        "url": "https://swapi.dev/api/people/1/",
        "created": "2014-12-09T13:50:51.644000Z",
        "edited": "2014-12-20T21:17:56.891000Z"
    })
}

#[test]
fn normalizes_a_full_person_record() {
    let links = LinkTable::default();
    let record = ResourceRecord::from_json(luke(), &links).unwrap();

    // Bookkeeping never survives normalization.
    assert!(record.get("url").is_none());
    assert!(record.get("created").is_none());
    assert!(record.get("edited").is_none());

    assert_eq!(classify("name", record.get("name").unwrap(), &links), RenderMode::TitleText);
    assert_eq!(
        classify("homeworld", record.get("homeworld").unwrap(), &links),
        RenderMode::Link
    );
    assert_eq!(
        classify("films", record.get("films").unwrap(), &links),
        RenderMode::LinkList
    );
    assert_eq!(
        classify("species", record.get("species").unwrap(), &links),
        RenderMode::LinkList
    );
}

#[test]
fn builds_table_rows_for_plain_fields() {
    let links = LinkTable::default();
    let record = ResourceRecord::from_json(luke(), &links).unwrap();

    let rows: Vec<TableRow> = record
        .iter()
        .filter(|(field, value)| classify(field, value, &links) == RenderMode::TitleText)
        .map(|(field, value)| {
            TableRow::new(display_label(field), format_plain_value(field, value, &links))
        })
        .collect();

    let mut table = ResourceTable::new();
    table.render(rows);

    assert_eq!(table.header(), &["Category", "Value"]);
    let name_row = table.rows().iter().find(|r| r.category == "Name").unwrap();
    assert_eq!(name_row.value, Node::Text("Luke Skywalker".to_string()));
    let hair_row = table
        .rows()
        .iter()
        .find(|r| r.category == "Hair Color")
        .unwrap();
    assert_eq!(hair_row.value, Node::Text("Blond".to_string()));
}

#[test]
fn classification_is_stable_across_identical_records() {
    let links = LinkTable::default();
    let first = ResourceRecord::from_json(luke(), &links).unwrap();
    let second = ResourceRecord::from_json(luke(), &links).unwrap();

    for ((field_a, value_a), (field_b, value_b)) in first.iter().zip(second.iter()) {
        assert_eq!(field_a, field_b);
        assert_eq!(
            classify(field_a, value_a, &links),
            classify(field_b, value_b, &links)
        );
    }
}

#[test]
fn hand_built_records_strip_like_fetched_ones() {
    let mut record = ResourceRecord::new();
    record.push("name", FieldValue::Text("Hoth".to_string()));
    record.push("url", FieldValue::Text("https://swapi.dev/api/planets/4/".to_string()));

    record.strip_bookkeeping();
    assert_eq!(record.len(), 1);
    record.strip_bookkeeping();
    assert_eq!(record.len(), 1);
}
