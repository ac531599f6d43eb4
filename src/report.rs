//! Assembly of the Sprint 3 review & retrospective report.
//!
//! The prose here is the report itself, carried as literals. The Markdown
//! source on disk is never parsed into this sequence (see [`crate::source`]);
//! regenerating the document always yields the same block order.

use crate::model::{Alignment, Document, ListInfo, Paragraph, ParagraphStyle, TextRun};

/// Title of the generated report.
pub const REPORT_TITLE: &str = "Sprint 3 Review & Retrospective";

/// Font size for the level-1 title heading, in points.
pub const TITLE_SIZE_PT: f32 = 16.0;

/// Font size for section headings, in points.
pub const HEADING_SIZE_PT: f32 = 14.0;

/// Font size for body text and bullets, in points.
pub const BODY_SIZE_PT: f32 = 12.0;

/// Space after a body paragraph, in points.
pub const PARAGRAPH_SPACE_AFTER_PT: f32 = 6.0;

/// Incremental builder for report documents.
///
/// Emitters mirror the three block shapes the report uses: headings,
/// labeled paragraphs, and bullets. Styles are applied here so the IR is
/// fully self-describing before any renderer sees it.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    doc: Document,
}

impl ReportBuilder {
    /// Create a new builder with an empty document.
    pub fn new() -> Self {
        Self {
            doc: Document::new(),
        }
    }

    /// Append a heading block.
    ///
    /// Level 1 renders at 16 pt centered; every other level at 14 pt,
    /// left-aligned.
    pub fn heading(mut self, text: impl Into<String>, level: u8) -> Self {
        let size = if level == 1 {
            TITLE_SIZE_PT
        } else {
            HEADING_SIZE_PT
        };
        let mut p = Paragraph {
            runs: vec![TextRun::new(text).sized(size)],
            style: ParagraphStyle {
                heading_level: Some(level.clamp(1, 6)),
                ..Default::default()
            },
        };
        if level == 1 {
            p.style.alignment = Alignment::Center;
        }
        self.doc.add_block(p);
        self
    }

    /// Append a body paragraph with an optional bold label prefix.
    ///
    /// The label, when present, becomes a bold 12 pt run followed by a
    /// space; the body follows as a non-bold 12 pt run. Space-after is
    /// 6 pt either way.
    pub fn paragraph(mut self, text: impl Into<String>, label: Option<&str>) -> Self {
        let mut p = Paragraph::new();
        if let Some(label) = label {
            p.add_run(TextRun::bold(format!("{} ", label)).sized(BODY_SIZE_PT));
        }
        p.add_run(TextRun::new(text).sized(BODY_SIZE_PT));
        p.style.space_after = Some(PARAGRAPH_SPACE_AFTER_PT);
        self.doc.add_block(p);
        self
    }

    /// Append a labeled paragraph.
    pub fn labeled(self, label: &str, text: impl Into<String>) -> Self {
        self.paragraph(text, Some(label))
    }

    /// Append a bulleted list item at 12 pt.
    pub fn bullet(mut self, text: impl Into<String>) -> Self {
        let p = Paragraph {
            runs: vec![TextRun::new(text).sized(BODY_SIZE_PT)],
            style: ParagraphStyle {
                list_info: Some(ListInfo::bullet()),
                ..Default::default()
            },
        };
        self.doc.add_block(p);
        self
    }

    /// Append an empty spacer paragraph.
    pub fn spacer(mut self) -> Self {
        self.doc.add_block(Paragraph::new());
        self
    }

    /// Finish and return the assembled document.
    pub fn finish(self) -> Document {
        self.doc
    }
}

/// Build the fixed Sprint 3 report document.
///
/// The block sequence is order-dependent and reproduced exactly on every
/// call.
pub fn sprint3_report() -> Document {
    let mut doc = ReportBuilder::new()
        .heading(REPORT_TITLE, 1)
        .spacer()
        .heading("Sprint Review", 2)
        .labeled(
            "Sprint Goal.",
            "Deliver a demo-ready SpendWise dashboard with actionable analytics, complete the \
             Savings Circles feature set, and support the implementation with updated design \
             documentation and unit tests.",
        )
        .labeled(
            "Objectives vs. Outcomes.",
            "We committed in the pre-sprint agreement to: (1) embed MPAndroidChart visualizations \
             showing category spend and budget usage, (2) finish the Savings Circles invitation \
             and progress workflow backed by Firestore, (3) refresh the design packet (DCD, SD, \
             SOLID, pattern evidence), and (4) add unit coverage for analytics aggregation and \
             group rollover logic. All four objectives shipped. The dashboard now renders both \
             pie and bar charts sourced from LiveData exposed by `DashboardAnalyticsViewModel`. \
             The Savings Circles flow supports sending, accepting, and declining invitations, \
             and the `SavingCircleViewModel` keeps member balances and cycle history \
             synchronized. Design artifacts were merged into the shared drive and linked in the \
             sprint deliverable. Two new unit test suites (`AnalyticsRepositoryTest`, \
             `MemberCycleTest`) run green locally, covering data aggregation and rollover math.",
        )
        .labeled(
            "Adherence to Pre-Sprint Agreement.",
            "Work stayed aligned with the ownership we established. Analytics tasks (chart \
             integration, seeded fallbacks, view model plumbing) were handled by the dashboard \
             sub-team; Savings Circles (invitation storage, lifecycle cleanup, UI polish) stayed \
             with the social features pair; testing and design documentation were split across \
             the remaining members. The only deviation was shifting UI polish for invitation \
             empty-states to mid-sprint after Firestore schema tweaks delayed backend work; we \
             agreed on the change during the Wednesday stand-up and absorbed the delay without \
             impacting the demo scope.",
        )
        .labeled(
            "Completed Deliverables & Value.",
            "The dashboard now provides real-time visibility into spending habits, enabling \
             users to adjust budgets proactively. Savings Circles unlock collaborative savings \
             challenges with clear progress tracking, differentiating SpendWise from standard \
             budgeting apps. Updated design artifacts keep the documentation synchronized with \
             the codebase, and the new unit tests give us automated regression checks around the \
             most logic-heavy features.",
        )
        .spacer()
        .heading("Sprint Retrospective", 2)
        .labeled(
            "Team Dynamics.",
            "Communication was generally strong\u{2014}Slack updates remained steady, and daily \
             stand-ups surfaced blockers quickly. Pair programming between the analytics and \
             repository owners shortened integration time. We did encounter some friction around \
             coordinating Firestore rules changes; clarifying ownership during mid-sprint \
             planning mitigated confusion.",
        )
        .labeled(
            "What Worked Well.",
            "Early alignment on data schemas let us stub repositories and unblock UI work. The \
             strategy/factory abstractions around chart configuration made it easy to experiment \
             with additional visualizations. Sharing test utilities increased coverage without \
             duplicating fixtures. Hosting mid-sprint demos fostered shared understanding of \
             progress.",
        )
        .labeled(
            "Areas for Improvement.",
            "We underestimated the time required to refactor existing ViewModels to reuse \
             analytics helpers, leading to a crunch late in the sprint. Design artifact updates \
             were started near the deadline, creating parallel work that could have been spread \
             earlier. Finally, onboarding new contributors to Firestore emulators needs a \
             clearer guide; local setup problems slowed testing for a day.",
        )
        .labeled("Actionable Steps.", "")
        .bullet(
            "Front-load design/documentation tasks by scheduling a dedicated working session in \
             the first half of Sprint 4.",
        )
        .bullet(
            "Extend the onboarding README with explicit Firestore emulator setup instructions \
             and sample data seeding scripts.",
        )
        .bullet(
            "Add setup scripts to automate provisioning of seeded analytics data so new test \
             cases can be written quickly.",
        )
        .bullet(
            "Reserve a mid-sprint hour for refactoring debt, ensuring shared utilities are \
             stabilized before UI integration picks them up.",
        )
        .labeled(
            "Overall Sentiment.",
            "The team delivered the agreed scope, tightened collaboration across feature \
             boundaries, and produced customer-visible improvements. With earlier documentation \
             updates and better tooling around environment setup, we expect to move faster in \
             Sprint 4.",
        )
        .finish();

    doc.metadata.title = Some(REPORT_TITLE.to_string());
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_heading_styles() {
        let doc = ReportBuilder::new()
            .heading("Title", 1)
            .heading("Section", 2)
            .finish();

        let title = &doc.blocks[0];
        assert_eq!(title.heading_level(), Some(1));
        assert_eq!(title.style.alignment, Alignment::Center);
        assert_eq!(title.runs[0].style.font_size, Some(TITLE_SIZE_PT));

        let section = &doc.blocks[1];
        assert_eq!(section.heading_level(), Some(2));
        assert_eq!(section.style.alignment, Alignment::Left);
        assert_eq!(section.runs[0].style.font_size, Some(HEADING_SIZE_PT));
    }

    #[test]
    fn test_builder_labeled_paragraph() {
        let doc = ReportBuilder::new()
            .labeled("Sprint Goal.", "Ship it.")
            .finish();

        let p = &doc.blocks[0];
        assert_eq!(p.runs.len(), 2);
        assert!(p.runs[0].style.bold);
        assert_eq!(p.runs[0].text, "Sprint Goal. ");
        assert!(!p.runs[1].style.bold);
        assert_eq!(p.runs[1].text, "Ship it.");
        assert_eq!(p.style.space_after, Some(PARAGRAPH_SPACE_AFTER_PT));
    }

    #[test]
    fn test_builder_unlabeled_paragraph() {
        let doc = ReportBuilder::new().paragraph("Just body.", None).finish();
        assert_eq!(doc.blocks[0].runs.len(), 1);
        assert!(!doc.blocks[0].runs[0].style.bold);
    }

    #[test]
    fn test_sprint3_report_structure() {
        let doc = sprint3_report();

        let h1: Vec<_> = doc.headings(1).collect();
        assert_eq!(h1.len(), 1);
        assert_eq!(h1[0].plain_text(), REPORT_TITLE);

        let h2: Vec<_> = doc.headings(2).map(|p| p.plain_text()).collect();
        assert_eq!(h2, vec!["Sprint Review", "Sprint Retrospective"]);

        assert_eq!(doc.bullets().count(), 4);
    }

    #[test]
    fn test_sprint3_report_deterministic() {
        assert_eq!(sprint3_report(), sprint3_report());
    }
}
