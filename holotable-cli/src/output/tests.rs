//! CLI output formatting tests.
//!
//! These tests verify that rendered tables and character views come
//! out correctly in both text and HTML output modes.

#[cfg(test)]
mod text_formatter_tests {
    use super::super::text::TextFormatter;
    use holotable_core::{Node, ResourceTable, TableRow};
    use holotable_fetch::{CharacterRecord, CharacterView, ProbeResult};

    fn sample_table() -> ResourceTable {
        let mut table = ResourceTable::new();
        table.render(vec![
            TableRow::new("Name", Node::Text("Tatooine".to_string())),
            TableRow::new(
                "Residents",
                Node::List(vec![
                    Node::link("https://swapi.dev/api/people/1/", "Luke Skywalker"),
                    Node::link("https://swapi.dev/api/people/2/", "C-3PO"),
                ]),
            ),
        ]);
        table
    }

    #[test]
    fn test_table_contains_header_and_rows() {
        let output = TextFormatter::new(false).format_table(&sample_table());

        assert!(output.contains("Category"));
        assert!(output.contains("Value"));
        assert!(output.contains("Name"));
        assert!(output.contains("Tatooine"));
    }

    #[test]
    fn test_list_items_are_bulleted() {
        let output = TextFormatter::new(false).format_table(&sample_table());

        assert!(output.contains("• Luke Skywalker"));
        assert!(output.contains("• C-3PO"));
    }

    #[test]
    fn test_links_show_label_and_locator() {
        let output = TextFormatter::new(false).format_table(&sample_table());
        assert!(output.contains("Luke Skywalker (https://swapi.dev/api/people/1/)"));
    }

    #[test]
    fn test_colors_only_when_enabled() {
        let plain = TextFormatter::new(false).format_table(&sample_table());
        let colored = TextFormatter::new(true).format_table(&sample_table());

        assert!(!plain.contains("\x1b["));
        assert!(colored.contains("\x1b[1m"));
    }

    #[test]
    fn test_multiline_text_keeps_lines() {
        let mut table = ResourceTable::new();
        table.render(vec![TableRow::new(
            "Opening Crawl",
            Node::Text("It is a period of civil war.\nRebel spaceships".to_string()),
        )]);

        let output = TextFormatter::new(false).format_table(&table);
        assert!(output.contains("It is a period of civil war."));
        assert!(output.contains("Rebel spaceships"));
    }

    #[test]
    fn test_character_with_portrait() {
        let record = CharacterRecord {
            name: "Luke Skywalker".to_string(),
            image: "https://example.com/luke.jpg".to_string(),
        };
        let probe = ProbeResult {
            success: true,
            response_time_ms: 5,
            status_code: Some(200),
            error: None,
        };
        let view = CharacterView::from_probe(record, &probe);

        let output = TextFormatter::new(false).format_character(&view);
        assert!(output.contains("Luke Skywalker"));
        assert!(output.contains("https://example.com/luke.jpg"));
    }

    #[test]
    fn test_character_without_portrait() {
        let record = CharacterRecord {
            name: "Luke Skywalker".to_string(),
            image: "https://example.com/luke.jpg".to_string(),
        };
        let view = CharacterView::from_probe(record, &ProbeResult::failure("404"));

        let output = TextFormatter::new(false).format_character(&view);
        assert!(!output.contains("https://example.com/luke.jpg"));
        assert!(output.contains("Portrait failed to load"));
    }
}

#[cfg(test)]
mod html_formatter_tests {
    use super::super::html::HtmlFormatter;
    use holotable_core::{Node, ResourceTable, TableRow};
    use holotable_fetch::{CharacterRecord, CharacterView, ProbeResult};

    #[test]
    fn test_table_structure() {
        let mut table = ResourceTable::new();
        table.render(vec![TableRow::new("Name", Node::Text("Hoth".to_string()))]);

        let output = HtmlFormatter::new().format_table(&table);
        assert!(output.starts_with("<table>"));
        assert!(output.contains("<thead>"));
        assert!(output.contains("<th>Category</th><th>Value</th>"));
        assert!(output.contains("<tr><td>Name</td><td>Hoth</td></tr>"));
        assert!(output.ends_with("</table>"));
    }

    #[test]
    fn test_links_render_as_anchors() {
        let mut table = ResourceTable::new();
        table.render(vec![TableRow::new(
            "Homeworld",
            Node::link("https://swapi.dev/api/planets/1/", "Tatooine"),
        )]);

        let output = HtmlFormatter::new().format_table(&table);
        assert!(output.contains(
            r#"<a href="https://swapi.dev/api/planets/1/" target="_blank">Tatooine</a>"#
        ));
    }

    #[test]
    fn test_lists_render_as_ul() {
        let mut table = ResourceTable::new();
        table.render(vec![TableRow::new(
            "Climate",
            Node::List(vec![
                Node::Text("Arid".to_string()),
                Node::Text("Windy".to_string()),
            ]),
        )]);

        let output = HtmlFormatter::new().format_table(&table);
        assert!(output.contains("<ul><li>Arid</li><li>Windy</li></ul>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut table = ResourceTable::new();
        table.render(vec![TableRow::new(
            "Name",
            Node::Text("<script>alert('x')</script> & more".to_string()),
        )]);

        let output = HtmlFormatter::new().format_table(&table);
        assert!(!output.contains("<script>"));
        assert!(output.contains("&lt;script&gt;"));
        assert!(output.contains("&amp; more"));
    }

    #[test]
    fn test_character_with_portrait_sets_src() {
        let record = CharacterRecord {
            name: "Leia Organa".to_string(),
            image: "https://example.com/leia.jpg".to_string(),
        };
        let probe = ProbeResult {
            success: true,
            response_time_ms: 5,
            status_code: Some(200),
            error: None,
        };
        let view = CharacterView::from_probe(record, &probe);

        let output = HtmlFormatter::new().format_character(&view);
        assert!(output.contains("<h1>Leia Organa</h1>"));
        assert!(output.contains(r#"<img src="https://example.com/leia.jpg">"#));
    }

    #[test]
    fn test_character_probe_failure_has_no_src() {
        let record = CharacterRecord {
            name: "Leia Organa".to_string(),
            image: "https://example.com/leia.jpg".to_string(),
        };
        let view = CharacterView::from_probe(record, &ProbeResult::failure("404"));

        let output = HtmlFormatter::new().format_character(&view);
        assert!(!output.contains("src="));
        assert!(output.contains(r#"<img alt="Portrait failed to load">"#));
    }
}
