mod common;

use common::{bold, flow_of, init_logging, italic, run_style};
use pretty_assertions::assert_eq;
use richflow_engine::{
    DeleteOperation, Flow, Operation, Paragraph, Run, Style, TextRange, snapshot,
};
use rstest::rstest;

fn delete(flow: &mut Flow, anchor: usize, active: usize) {
    DeleteOperation::new(TextRange::new(anchor, active), flow)
        .perform()
        .unwrap();
    assert_eq!(snapshot::invariants(flow), Ok(()));
}

#[test]
fn caret_does_not_delete() {
    init_logging();
    let mut flow = flow_of(&[&["This is text."]]);

    delete(&mut flow, 0, 0);

    assert_eq!(flow.text(), "This is text.");
}

#[rstest]
#[case(1, 2)]
#[case(2, 1)]
fn deletes_inside_single_run(#[case] anchor: usize, #[case] active: usize) {
    init_logging();
    let mut flow = flow_of(&[&["ABC"]]);

    delete(&mut flow, anchor, active);

    assert_eq!(flow.num_children(), 1);
    assert_eq!(flow.text(), "AC");
    assert_eq!(flow.child_at(0).unwrap().num_children(), 1);
}

#[test]
fn deletes_runs_between_start_and_end_run() {
    init_logging();
    let mut flow = flow_of(&[&["ABC", "DEF", "GHI"]]);

    delete(&mut flow, 1, 8);

    assert_eq!(flow.text(), "AI");
    assert_eq!(flow.num_children(), 1);
}

#[test]
fn deleting_across_terminator_merges_paragraphs() {
    init_logging();
    let mut flow = flow_of(&[&["ABC"], &["DEF"]]);

    delete(&mut flow, 2, 5);

    assert_eq!(flow.text(), "ABEF");
    assert_eq!(flow.num_children(), 1);
}

#[test]
fn deleting_only_the_terminator_concatenates_runs() {
    init_logging();
    let mut flow = flow_of(&[&["ABC"], &["DEF", "GHI"]]);

    delete(&mut flow, 3, 4);

    assert_eq!(flow.text(), "ABCDEFGHI");
    assert_eq!(flow.num_children(), 1);
    assert_eq!(
        flow.child_at(0).unwrap().children(),
        &[Run::plain("ABC"), Run::plain("DEF"), Run::plain("GHI")]
    );
    assert_eq!(flow.child_at(0).unwrap().len(), 9);
}

#[test]
fn removed_run_lets_equal_neighbours_merge() {
    init_logging();
    let mut flow = flow_of(&[&["ABC", "DEF", "GHI"]]);

    delete(&mut flow, 6, 9);

    let paragraph = flow.child_at(0).unwrap();
    assert_eq!(paragraph.text(), "ABCDEF");
    assert_eq!(paragraph.num_children(), 1);
}

#[test]
fn truncated_run_merges_with_unstyled_neighbours() {
    init_logging();
    let mut flow = flow_of(&[&["AB", "CD", "EF"]]);

    delete(&mut flow, 3, 4);

    let paragraph = flow.child_at(0).unwrap();
    assert_eq!(paragraph.text(), "ABCEF");
    assert_eq!(paragraph.num_children(), 1);
}

#[test]
fn truncation_never_merges_distinct_styles() {
    init_logging();
    let mut flow = Flow::from_paragraphs([Paragraph::from_runs([
        Run::styled("AB", bold()),
        Run::plain("CD"),
        Run::styled("EF", italic()),
    ])]);

    delete(&mut flow, 2, 4);

    assert_eq!(
        flow.child_at(0).unwrap().children(),
        &[Run::styled("AB", bold()), Run::styled("EF", italic())]
    );
}

#[test]
fn deleting_last_character_keeps_paragraphs_apart() {
    init_logging();
    let mut flow = flow_of(&[&["AB"], &["CD"]]);

    delete(&mut flow, 1, 2);

    assert_eq!(flow.text_between(0, None, "¶").unwrap(), "A¶CD¶");
    assert_eq!(flow.num_children(), 2);
}

#[test]
fn merge_preserves_styles_of_joined_runs() {
    init_logging();
    let mut flow = Flow::from_paragraphs([
        Paragraph::from_runs([Run::styled("AB", italic())]),
        Paragraph::from_runs([Run::styled("CD", bold())]),
    ]);

    delete(&mut flow, 2, 3);

    let paragraph = flow.child_at(0).unwrap();
    assert_eq!(paragraph.text(), "ABCD");
    assert_eq!(run_style(&flow, 0, 0), Some(&italic()));
    assert_eq!(run_style(&flow, 0, 1), Some(&bold()));
}

#[test]
fn merge_keeps_first_paragraph_style() {
    init_logging();
    let mut flow = Flow::from_paragraphs([
        Paragraph::plain("AB").with_style(Some(Style::single("textAlign", "left"))),
        Paragraph::plain("CD").with_style(Some(Style::single("textAlign", "right"))),
    ]);

    delete(&mut flow, 1, 4);

    assert_eq!(flow.num_children(), 1);
    assert_eq!(flow.text(), "AD");
    assert_eq!(
        flow.child_at(0).unwrap().compose_style(),
        Some(&Style::single("textAlign", "left"))
    );
}

#[test]
fn deletes_first_character_of_paragraph() {
    init_logging();
    let mut flow = flow_of(&[&["AB"], &["CD"]]);

    delete(&mut flow, 3, 4);

    assert_eq!(flow.text_between(0, None, "¶").unwrap(), "AB¶D¶");
}

#[test]
fn emptied_paragraph_is_left_without_runs() {
    init_logging();
    let mut flow = flow_of(&[&["AB"], &["CD"]]);

    delete(&mut flow, 0, 2);

    assert_eq!(flow.num_children(), 2);
    assert_eq!(flow.child_at(0).unwrap().num_children(), 0);
    assert_eq!(flow.text_between(0, None, "¶").unwrap(), "¶CD¶");
    assert_eq!(flow.len(), 4);
}

#[test]
fn deleting_everything_merges_into_one_empty_paragraph() {
    init_logging();
    let mut flow = flow_of(&[&["AB"], &["CD"], &["EF"]]);
    let len = flow.len();

    delete(&mut flow, 0, len);

    assert_eq!(flow.num_children(), 1);
    assert_eq!(flow.text(), "");
    assert_eq!(flow.len(), 1);
}

fn placeholder() -> Paragraph {
    Paragraph::from_runs([Run::plain("")])
}

#[test]
fn merging_placeholder_paragraph_leaves_no_empty_run() {
    init_logging();
    let mut flow = Flow::from_paragraphs([Paragraph::plain("AB"), placeholder()]);

    delete(&mut flow, 2, 3);

    assert_eq!(flow.num_children(), 1);
    assert_eq!(flow.child_at(0).unwrap().children(), &[Run::plain("AB")]);
}

#[test]
fn merging_into_placeholder_paragraph_leaves_no_empty_run() {
    init_logging();
    let mut flow = Flow::from_paragraphs([placeholder(), Paragraph::plain("AB")]);

    delete(&mut flow, 0, 2);

    assert_eq!(flow.num_children(), 1);
    assert_eq!(flow.child_at(0).unwrap().children(), &[Run::plain("B")]);
}
