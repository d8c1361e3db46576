use mandown_engine::{PulldownParser, RenderSession, Surface};

fn render_fixture(name: &str, width: usize) -> String {
    let md = std::fs::read(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let view = RenderSession::new(PulldownParser::new())
        .run(&md, width)
        .unwrap();
    view.content.contents()
}

#[test]
fn fixture_readme() {
    let rendered = render_fixture("readme", 24);
    insta::assert_snapshot!("readme", rendered);
}

/// Rows consumed by the fixture only ever add to the block estimate.
#[test]
fn fixture_readme_grows_past_estimate() {
    let md = std::fs::read(format!(
        "{}/tests/fixtures/readme.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let view = RenderSession::new(PulldownParser::new())
        .run(&md, 24)
        .unwrap();

    assert_eq!(view.estimated_rows, 7);
    assert_eq!(view.content.height(), 18);
    assert_eq!(view.status.row_text(0).unwrap(), "7");
}

/// No row of a wrapped render ever uses the last column.
#[test]
fn fixture_readme_keeps_last_column_free() {
    let md = std::fs::read(format!(
        "{}/tests/fixtures/readme.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    for width in [12, 24, 80] {
        let view = RenderSession::new(PulldownParser::new())
            .run(&md, width)
            .unwrap();
        for row in 0..view.content.height() {
            let cells = view.content.row(row).unwrap();
            assert_eq!(cells[width - 1], ' ', "row {row} at width {width}");
        }
    }
}
