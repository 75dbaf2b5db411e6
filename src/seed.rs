//! Sample records loaded at startup when `seed_sample_data` is set
//!
//! Seeding goes through the collections, so every sample passes the same
//! validation as an API payload.

use crate::core::comment::CommentDraft;
use crate::core::entity::Record;
use crate::core::error::CampusResult;
use crate::entities::{Activity, ActivityDraft, EventDraft, NewsDraft, NoteDraft};
use crate::server::host::CampusHost;

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn news() -> Vec<NewsDraft> {
    [
        (
            "Library extends opening hours for finals",
            "The main library stays open until 2 AM from next week until the end of the exam period.",
            "Campus Life",
            "2025-04-12",
            "Library Services",
        ),
        (
            "Research grant awarded to the CS department",
            "A three-year grant will fund work on energy-efficient data centres.",
            "Research",
            "2025-04-08",
            "Research Office",
        ),
        (
            "Registration for summer courses is open",
            "Students can register for summer courses through the student portal until May 1.",
            "Announcements",
            "2025-04-14",
            "Registrar",
        ),
        (
            "University team wins regional football final",
            "The team beat last year's champions 2-1 in a close final.",
            "Sports",
            "2025-04-10",
            "Sports Desk",
        ),
    ]
    .into_iter()
    .map(|(title, description, category, date, author)| NewsDraft {
        title: text(title),
        description: text(description),
        category: text(category),
        date: text(date),
        author: text(author),
        image_url: None,
    })
    .collect()
}

/// Drafts with the registration count the sample starts at
fn activities() -> Vec<(ActivityDraft, u32)> {
    [
        (
            "Chess Club Tournament",
            "Join us for our weekly chess tournament! Players of all skill levels are welcome. Swiss-system format with 4 rounds.",
            &["Academic", "Competition"][..],
            "2025-04-15",
            "18:00:00",
            "Student Union Building, Room 302",
            "Chess Club",
            32,
            18,
            "chess@campus.edu",
        ),
        (
            "Debate Club Meeting",
            "Biweekly debate club meeting. This week's topic: Climate Change Solutions.",
            &["Academic", "Social"][..],
            "2025-04-18",
            "17:30:00",
            "Liberal Arts Building, Room 101",
            "Debate Club",
            40,
            22,
            "debate@campus.edu",
        ),
        (
            "Basketball Practice",
            "Regular practice session for the university basketball club. All skill levels welcome.",
            &["Sports", "Team"][..],
            "2025-04-14",
            "19:00:00",
            "Sports Center, Court 2",
            "Basketball Club",
            20,
            15,
            "basketball@campus.edu",
        ),
        (
            "Art Workshop: Watercolors",
            "Learn watercolor painting techniques. Suitable for beginners and intermediate painters.",
            &["Arts", "Workshop"][..],
            "2025-04-20",
            "14:00:00",
            "Arts Building, Studio 5",
            "Art Club",
            15,
            12,
            "art@campus.edu",
        ),
        (
            "Coding Hackathon",
            "24-hour hackathon to build innovative solutions for campus problems. Teams of 2-4 people.",
            &["Academic", "Technology"][..],
            "2025-04-22",
            "09:00:00",
            "Computer Science Building, Labs 101-105",
            "Coding Club",
            50,
            37,
            "coding@campus.edu",
        ),
        (
            "Community Clean-up",
            "Join us for a campus and surrounding area clean-up event. Supplies provided.",
            &["Service", "Community"][..],
            "2025-04-19",
            "10:00:00",
            "Student Union Building, Front Steps",
            "Volunteer Club",
            0,
            28,
            "volunteer@campus.edu",
        ),
    ]
    .into_iter()
    .map(
        |(title, description, categories, date, time, location, club, capacity, registered, contact)| {
            let draft = ActivityDraft {
                title: text(title),
                description: text(description),
                categories: categories.iter().map(|c| c.to_string()).collect(),
                date: text(date),
                time: text(time),
                location: text(location),
                club: text(club),
                capacity: Some(capacity),
                contact: text(contact),
            };
            (draft, registered)
        },
    )
    .collect()
}

fn notes() -> Vec<NoteDraft> {
    [
        (
            "Introduction to Computer Science",
            "Computer science is the study of computation, automation, and information.",
            "CS",
        ),
        (
            "Database Systems",
            "A database is an organized collection of data stored and accessed electronically.",
            "IS",
        ),
        (
            "Network Security",
            "Network security covers the policies and practices that prevent and monitor unauthorized access to a network.",
            "IT",
        ),
    ]
    .into_iter()
    .map(|(title, content, category)| NoteDraft {
        title: text(title),
        content: text(content),
        category: text(category),
    })
    .collect()
}

fn events() -> Vec<(EventDraft, Vec<(&'static str, &'static str)>)> {
    vec![
        (
            EventDraft {
                title: text("Eid al-Fitr Celebration"),
                description: text("Annual Eid al-Fitr celebration marking the end of Ramadan."),
                category: text("Religious"),
                date: text("2025-04-01"),
                start_time: text("10:00 AM"),
                end_time: text("3:00 PM"),
                location: text("Hall 123"),
                invited: text("Everyone can attend"),
                expectations: text("There will be prayers, food, and community activities."),
                contact_email: text("eid@campus.edu"),
                registration_link: None,
            },
            vec![
                ("Khalid Hassan", "Will there be a separate area for families?"),
                ("Omar Youssef", "What kind of traditional food will be served?"),
            ],
        ),
        (
            EventDraft {
                title: text("Final Exam Review Session"),
                description: text("Comprehensive review session covering all topics for the upcoming final exam."),
                category: text("Academic"),
                date: text("2025-05-01"),
                start_time: text("4:00 PM"),
                end_time: text("6:00 PM"),
                location: text("Room A101"),
                invited: text("All enrolled students"),
                expectations: text("Bring your textbooks, notes, and questions."),
                contact_email: text("academics@campus.edu"),
                registration_link: text("https://forms.example.com/review"),
            },
            vec![
                ("Sami Ahmed", "Will this session be recorded for later viewing?"),
                ("Yasir Khalid", "Are practice exams provided?"),
            ],
        ),
        (
            EventDraft {
                title: text("National Day"),
                description: text("Celebrate National Day with music, fireworks, and cultural performances."),
                category: text("Government"),
                date: text("2025-12-16"),
                start_time: text("5:00 PM"),
                end_time: text("10:00 PM"),
                location: text("University Stadium"),
                invited: text("All students and faculty"),
                expectations: None,
                contact_email: None,
                registration_link: None,
            },
            vec![("Ali Kareem", "Can we bring small flags or banners?")],
        ),
        (
            EventDraft {
                title: text("Research Symposium"),
                description: text("Annual showcase of student and faculty research projects."),
                category: text("Academic"),
                date: text("2025-07-23"),
                start_time: text("1:00 PM"),
                end_time: text("5:00 PM"),
                location: text("Science Building"),
                invited: text("All academic staff and students"),
                expectations: None,
                contact_email: None,
                registration_link: None,
            },
            vec![],
        ),
    ]
}

/// Load the sample records into the host's collections
pub async fn seed_sample_data(host: &CampusHost) -> CampusResult<()> {
    for draft in news() {
        host.news.create(draft).await?;
    }

    for (draft, registered) in activities() {
        let mut activity = Activity::from_draft(draft, host.activities.settings())?;
        activity.registrations = registered;
        host.activities.import(activity).await?;
    }

    for draft in notes() {
        let note = host.notes.create(draft).await?;
        host.notes
            .add_comment(
                &note.id,
                CommentDraft::new("Study Group", "This is a helpful note. Thanks for sharing!"),
            )
            .await?;
    }

    for (draft, comments) in events() {
        let event = host.events.create(draft).await?;
        for (author, body) in comments {
            host.events
                .add_comment(&event.id, CommentDraft::new(author, body))
                .await?;
        }
    }

    tracing::info!("sample data loaded");
    Ok(())
}
