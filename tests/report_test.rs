//! Integration tests for the fixed report structure.

use retrodoc::{build_report, to_json, to_text, JsonFormat, REPORT_TITLE};

#[test]
fn test_title_is_only_level_1_heading() {
    let doc = build_report();

    let h1: Vec<_> = doc.headings(1).collect();
    assert_eq!(h1.len(), 1);
    assert_eq!(h1[0].plain_text(), REPORT_TITLE);

    // The title is the first block
    assert_eq!(doc.blocks[0].heading_level(), Some(1));
}

#[test]
fn test_section_headings_in_order() {
    let doc = build_report();

    let h2: Vec<String> = doc.headings(2).map(|p| p.plain_text()).collect();
    assert_eq!(h2, vec!["Sprint Review", "Sprint Retrospective"]);

    // No deeper headings exist
    for level in 3..=6 {
        assert_eq!(doc.headings(level).count(), 0);
    }
}

#[test]
fn test_review_section_labels_in_order() {
    let doc = build_report();
    let text = to_text(&doc).unwrap();

    let labels = [
        "Sprint Goal.",
        "Objectives vs. Outcomes.",
        "Adherence to Pre-Sprint Agreement.",
        "Completed Deliverables & Value.",
        "Team Dynamics.",
        "What Worked Well.",
        "Areas for Improvement.",
        "Actionable Steps.",
        "Overall Sentiment.",
    ];

    let mut last = 0;
    for label in labels {
        let pos = text[last..]
            .find(label)
            .unwrap_or_else(|| panic!("label {:?} missing or out of order", label));
        last += pos + label.len();
    }
}

#[test]
fn test_four_bullets_follow_actionable_steps() {
    let doc = build_report();

    let steps_idx = doc
        .blocks
        .iter()
        .position(|b| b.plain_text().starts_with("Actionable Steps."))
        .expect("Actionable Steps block present");

    // The four bullets are contiguous right after the label block
    let bullets: Vec<_> = doc.blocks[steps_idx + 1..steps_idx + 5].to_vec();
    assert!(bullets.iter().all(|b| b.is_list_item()));
    assert!(bullets.iter().all(|b| !b.is_blank()));

    let starts = [
        "Front-load design/documentation tasks",
        "Extend the onboarding README",
        "Add setup scripts",
        "Reserve a mid-sprint hour",
    ];
    for (bullet, start) in bullets.iter().zip(starts) {
        assert!(
            bullet.plain_text().starts_with(start),
            "bullet {:?} does not start with {:?}",
            bullet.plain_text(),
            start
        );
    }

    // And they are the only bullets in the document
    assert_eq!(doc.bullets().count(), 4);
}

#[test]
fn test_labeled_paragraphs_have_bold_prefix() {
    let doc = build_report();

    let goal = doc
        .blocks
        .iter()
        .find(|b| b.plain_text().starts_with("Sprint Goal."))
        .unwrap();

    assert!(goal.runs[0].style.bold);
    assert_eq!(goal.runs[0].text, "Sprint Goal. ");
    assert!(!goal.runs[1].style.bold);
    assert_eq!(goal.style.space_after, Some(6.0));
}

#[test]
fn test_report_is_deterministic() {
    let a = to_json(&build_report(), JsonFormat::Compact).unwrap();
    let b = to_json(&build_report(), JsonFormat::Compact).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_text_render_mentions_every_section_once() {
    let doc = build_report();
    let text = to_text(&doc).unwrap();

    assert_eq!(text.matches("Sprint Review").count(), 1);
    assert_eq!(text.matches("Sprint Retrospective").count(), 1);
    assert_eq!(text.matches("Overall Sentiment.").count(), 1);
    assert_eq!(text.matches("- ").count(), 4);
}
