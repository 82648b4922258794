//! Test utilities shared across unit tests, integration tests, benches and
//! fuzz targets.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::Document;

/// Create a document whose id and URL derive from `id`.
pub fn make_doc(id: &str, title: &str, content: &str) -> Document {
    Document::new(id, title, format!("https://wasilah.example/{}", id), content)
}

/// The seed answer for "What is Wasilah?".
pub const ABOUT_CONTENT: &str = "Wasilah is a community service organization that connects \
    volunteers with local projects. We run food drives, blood donation camps and tutoring \
    programs across Karachi and Lahore.";

/// A small but realistic knowledge base, in a fixed order.
pub fn sample_corpus() -> Vec<Document> {
    vec![
        make_doc("about", "About Wasilah", ABOUT_CONTENT),
        make_doc(
            "volunteer",
            "Volunteer With Us",
            "Volunteering with Wasilah is open to everyone above sixteen. \
             To volunteer, fill in the registration form and join an orientation session. \
             Volunteers help at weekend drives, participate in tutoring programs \
             and contribute to relief work.",
        ),
        make_doc(
            "donate",
            "Donations",
            "Donations keep every program running. You can donate online by card or bank transfer. \
             Every donation receives a receipt by email.",
        ),
        make_doc(
            "events",
            "Upcoming Events",
            "Upcoming events: our next food drive is on Saturday in Clifton. \
             Blood donation camps are held on the first Sunday of every month.",
        ),
        make_doc(
            "contact",
            "Contact Us",
            "Contact the head office at Shahrah-e-Faisal, Karachi. \
             Reach the team by email or phone.",
        ),
        make_doc(
            "membership",
            "Membership Plans",
            "Membership plans: monthly membership supports our running costs. \
             Members get event updates and a yearly impact report. \
             Subscription payment is by card.",
        ),
    ]
}
