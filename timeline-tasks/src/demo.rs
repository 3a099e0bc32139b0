use chrono::NaiveDate;
use timeline_layout::{axis::add_days, SmartNotes, Task};

/// Sample goals spread around `today`, for trying the timeline without a store.
pub fn demo_tasks(today: NaiveDate) -> Vec<Task> {
    let samples = [
        (
            "Finish database lab",
            [
                "Prepare and hand in the database lab.",
                "Report accepted, grade 4 or better.",
                "Draft exists, two evenings left.",
                "Needed for the course credit.",
            ],
            1,
            8,
        ),
        (
            "Thesis, chapter 1",
            [
                "Write the literature review.",
                "8-12 pages, 10+ sources.",
                "Material collected in Zotero.",
                "Basis for the other chapters.",
            ],
            -5,
            10,
        ),
        (
            "Exam preparation",
            [
                "Work through 30 exam tickets.",
                "At least 2 tickets a day.",
                "Schedule is drawn up.",
                "Exam is in a month.",
            ],
            0,
            30,
        ),
        (
            "One-day task",
            [
                "Back up the project.",
                "Archive in the cloud, backup log is clean.",
                "Script is ready.",
                "Lower the risk before release.",
            ],
            3,
            3,
        ),
        (
            "Long task",
            [
                "Build the reporting module.",
                "3 reports and 5 charts.",
                "Team of two.",
                "For management and investors.",
            ],
            -20,
            60,
        ),
    ];

    samples
        .into_iter()
        .zip(1..)
        .map(|((title, [s, m, a, r], start, end), id)| {
            Task::new(id, title, add_days(today, start), add_days(today, end)).with_notes(
                SmartNotes {
                    specific: Some(s.to_string()),
                    measurable: Some(m.to_string()),
                    achievable: Some(a.to_string()),
                    relevant: Some(r.to_string()),
                },
            )
        })
        .collect()
}
