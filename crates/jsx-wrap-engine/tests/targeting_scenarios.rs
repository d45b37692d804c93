use jsx_wrap_engine::editing::Document;
use jsx_wrap_engine::parsing::{self, Candidate};
use jsx_wrap_engine::targeting::{Selection, containing, select};
use jsx_wrap_engine::{LanguageId, NodeKind, WrapError, WrapWithTag};
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;
use common::{caret, doc_at, offset_of};

fn candidates(text: &str) -> Vec<Candidate> {
    let tree = parsing::parse(text, None).unwrap();
    let found = parsing::collect(&tree, text);
    parsing::invariants(text, &found);
    found
}

#[test]
fn nested_span_wins_over_enclosing_div() {
    let text = "<div><span>Hi</span></div>";
    let found = candidates(text);

    let target = select(&found, Selection::Caret(offset_of(text, "Hi", 1))).unwrap();

    assert_eq!(target.source_slice, "<span>Hi</span>");
    assert_eq!(target.kind, NodeKind::Element);
}

#[test]
fn element_inside_fragment_is_chosen_over_fragment() {
    let text = "<>\n  <p>x</p>\n</>";
    let found = candidates(text);
    assert_eq!(found.len(), 2);

    let target = select(&found, Selection::Caret(offset_of(text, "x", 0))).unwrap();

    assert_eq!(target.source_slice, "<p>x</p>");
}

#[test]
fn plain_script_offers_nothing() {
    let text = "const a = 1;";
    assert!(candidates(text).is_empty());

    let doc = doc_at(text, LanguageId::typescript_react(), 5);
    assert!(WrapWithTag::default().provide_actions(&doc.action_context()).is_empty());
}

#[test]
fn unterminated_markup_is_absorbed() {
    let doc = doc_at("<div><span>", LanguageId::typescript_react(), 6);
    let wrap = WrapWithTag::default();

    assert!(wrap.provide_actions(&doc.action_context()).is_empty());
    assert!(matches!(
        wrap.resolve_target(&doc.action_context()),
        Err(WrapError::Parse(_))
    ));
}

#[test]
fn one_past_closing_bracket_excludes_node() {
    let text = "f(<b/>, 1);";
    let end = offset_of(text, "/>", 2);
    let wrap = WrapWithTag::default();

    let at_end = Document::new(text, LanguageId::javascript_react());
    let mut ctx = at_end.action_context();
    ctx.selection = Some(caret(0, end as u32));
    assert_eq!(wrap.provide_actions(&ctx).len(), 1);

    ctx.selection = Some(caret(0, end as u32 + 1));
    assert!(wrap.provide_actions(&ctx).is_empty());
}

#[rstest]
#[case::one_before_start(9, false)]
#[case::at_start(10, true)]
#[case::inside(14, true)]
#[case::at_end(18, true)]
#[case::one_after_end(19, false)]
fn containment_follows_inclusive_bounds(#[case] offset: usize, #[case] contained: bool) {
    let text = "const a = <p>x</p>;";
    let found = candidates(text);
    assert_eq!(found[0].span.range(), 10..18);

    assert_eq!(containing(&found, offset).count() == 1, contained);
    assert_eq!(select(&found, Selection::Caret(offset)).is_some(), contained);
}

#[test]
fn multi_line_span_contains_interior_lines() {
    let text = "const a = (\n  <ul>\n    <li>a</li>\n  </ul>\n);";
    let found = candidates(text);
    let wrap = WrapWithTag::default();
    let doc = Document::new(text, LanguageId::javascript_react());
    let mut ctx = doc.action_context();

    // interior line, left of where <ul> starts
    ctx.selection = Some(caret(2, 0));
    let actions = wrap.provide_actions(&ctx);
    assert_eq!(actions.len(), 1);
    assert!(actions[0].target.source_slice.starts_with("<ul>"));

    // start of the line after the closing tag
    ctx.selection = Some(caret(4, 0));
    assert!(wrap.provide_actions(&ctx).is_empty());
    assert_eq!(found.len(), 2);
}

#[rstest]
#[case("<a><b><c/></b></a>", "c", "<c/>")]
#[case("<a><b><c/></b></a>", "<b>", "<b><c/></b>")]
#[case("<><i/><i/></>", "<>", "<><i/><i/></>")]
fn innermost_node_wins(#[case] text: &str, #[case] near: &str, #[case] expected: &str) {
    let found = candidates(text);

    let target = select(&found, Selection::Caret(offset_of(text, near, 1))).unwrap();

    assert_eq!(target.source_slice, expected);
}

#[test]
fn repeated_selection_is_stable() {
    let text = "<section>\n  <>\n    <i/><i/>\n  </>\n</section>";
    let found = candidates(text);

    for offset in 0..=text.len() {
        let first = select(&found, Selection::Caret(offset));
        for _ in 0..3 {
            assert_eq!(select(&found, Selection::Caret(offset)), first);
        }
    }
}

#[test]
fn equal_width_siblings_break_ties_by_order() {
    let text = "<><i/><i/></>";
    let found = candidates(text);

    // the shared boundary between the two siblings is inside both
    let boundary = offset_of(text, "/><i", 2);
    let target = select(&found, Selection::Caret(boundary)).unwrap();

    assert_eq!(target.span.start, 2);
}

#[test]
fn range_selection_is_never_a_target() {
    let text = "<div><span>Hi</span></div>";
    let found = candidates(text);
    let start = offset_of(text, "Hi", 0);

    assert_eq!(select(&found, Selection::from_offsets(start, start + 2)), None);
}

#[test]
fn utf16_columns_map_past_astral_characters() {
    let text = "const s = '🦀'; const a = <b/>;";
    let doc = Document::new(text, LanguageId::typescript_react());
    let mut ctx = doc.action_context();
    // the crab is two UTF-16 units but four bytes
    let utf16_col = text[..offset_of(text, "<b/>", 1)].encode_utf16().count();
    ctx.selection = Some(caret(0, utf16_col as u32));

    let actions = WrapWithTag::default().provide_actions(&ctx);

    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].target.source_slice, "<b/>");
}

#[test]
fn caret_inside_multibyte_character_targets_its_node() {
    let text = "<a/>;\n<p>é</p>;";
    let mut doc = Document::new(text, LanguageId::typescript_react());
    // second byte of 'é'
    let inside = offset_of(text, "é", 1);
    doc.set_selection(inside..inside);

    let actions = WrapWithTag::default().provide_actions(&doc.action_context());

    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].target.source_slice, "<p>é</p>");
}
