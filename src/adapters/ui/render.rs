//! Plain-text page rendering for the kiosk. No terminal I/O here.

use crate::domain::clinic::{
    ABOUT_STORY, ACHIEVEMENTS, ADDRESS_LINES, CLINIC_NAME, EMAIL, HOURS, Highlight, MISSION,
    PHONES, PRICING_BENEFITS, PRICING_NOTES, STATS, TAGLINE, TOURISM_BENEFITS, TOURISM_PACKAGES,
    TOURISM_PROCESS, VALUES,
};
use crate::domain::{ChatMessage, Role, Testimonial, Treatment, TreatmentWithPricing};
use crate::usecases::{CategoryFilter, FaqBoard, HomeContent};
use std::fmt::Write;

/// Column width used for wrapping body text.
pub const WIDTH: usize = 78;

/// Greedy word wrap; every line is prefixed with `indent`.
pub fn wrap(text: &str, indent: &str) -> String {
    let limit = WIDTH.saturating_sub(indent.chars().count()).max(20);
    let mut out = String::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > limit {
            let _ = writeln!(out, "{indent}{line}");
            line.clear();
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        let _ = writeln!(out, "{indent}{line}");
    }
    out
}

/// `★★★★☆` for a 1-5 rating; out-of-range ratings are clamped.
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// `orthodontics` -> `Orthodontics`.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn highlights(out: &mut String, items: &[Highlight]) {
    for item in items {
        let _ = writeln!(out, "  • {}", item.title);
        out.push_str(&wrap(item.description, "    "));
    }
}

fn treatment_card(out: &mut String, t: &Treatment) {
    let badge = if t.featured { "  [Popular]" } else { "" };
    let _ = writeln!(out, "  {}{}", t.name, badge);
    if !t.description.is_empty() {
        out.push_str(&wrap(&t.description, "    "));
    }
    let _ = writeln!(out, "    Category: {}", t.category);
    out.push('\n');
}

fn testimonial_card(out: &mut String, t: &Testimonial) {
    let _ = writeln!(out, "  {}  {}", stars(t.rating), t.patient_name);
    let _ = writeln!(out, "    {}", t.treatment);
    out.push_str(&wrap(&format!("\"{}\"", t.review), "    "));
    out.push('\n');
}

pub fn home(content: &HomeContent) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{CLINIC_NAME}");
    out.push_str(&wrap(TAGLINE, "  "));
    out.push('\n');
    for (label, value) in STATS {
        let _ = writeln!(out, "  {value:>8}  {label}");
    }
    out.push('\n');

    let _ = writeln!(out, "Featured Treatments");
    if content.featured_treatments.is_empty() {
        let _ = writeln!(out, "  (none available right now)\n");
    }
    for t in &content.featured_treatments {
        treatment_card(&mut out, t);
    }

    let _ = writeln!(out, "What Our Patients Say");
    if content.testimonials.is_empty() {
        let _ = writeln!(out, "  (none available right now)\n");
    }
    for t in &content.testimonials {
        testimonial_card(&mut out, t);
    }
    out
}

pub fn about() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "About {CLINIC_NAME}");
    out.push_str(&wrap(TAGLINE, "  "));
    out.push('\n');
    for paragraph in ABOUT_STORY {
        out.push_str(&wrap(paragraph, "  "));
        out.push('\n');
    }
    let _ = writeln!(out, "Achievements");
    for a in ACHIEVEMENTS {
        let _ = writeln!(out, "  ✓ {a}");
    }
    let _ = writeln!(out, "\nOur Values");
    highlights(&mut out, &VALUES);
    let _ = writeln!(out, "\nOur Mission");
    out.push_str(&wrap(MISSION, "  "));
    let _ = writeln!(out, "\nOur Location");
    for line in ADDRESS_LINES {
        let _ = writeln!(out, "  {line}");
    }
    out
}

/// Treatments page body for the current filter.
pub fn treatments(rows: &[&Treatment], filter: &CategoryFilter) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Dental Treatments ({})\n", capitalize(filter.label()));
    if rows.is_empty() {
        let _ = writeln!(out, "  No treatments found in this category.");
        return out;
    }
    for t in rows {
        treatment_card(&mut out, t);
    }
    out
}

pub fn pricing(rows: &[TreatmentWithPricing]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Treatment Pricing\n");
    let _ = writeln!(out, "  {}\n", PRICING_BENEFITS.join(" · "));
    if rows.is_empty() {
        let _ = writeln!(out, "  Pricing is unavailable right now. Please call us.\n");
    }
    for row in rows {
        let t = &row.treatment;
        let badge = if t.featured { "  [Popular]" } else { "" };
        let _ = writeln!(out, "  {}{}", t.name, badge);
        let _ = writeln!(out, "    {}", t.category);
        if let Some(p) = row.primary_pricing() {
            let _ = writeln!(out, "    Starting from {}", p.display());
        }
        if !t.description.is_empty() {
            out.push_str(&wrap(&t.description, "    "));
        }
        out.push('\n');
    }
    let _ = writeln!(out, "Important Information");
    highlights(&mut out, &PRICING_NOTES);
    out
}

pub fn dental_tourism() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Dental Tourism in Hyderabad\n");
    let _ = writeln!(out, "Why Choose Us");
    highlights(&mut out, &TOURISM_BENEFITS);
    let _ = writeln!(out, "\nPackages");
    for p in TOURISM_PACKAGES {
        let _ = writeln!(out, "  • {} ({})", p.title, p.duration);
        for t in p.treatments {
            let _ = writeln!(out, "      - {t}");
        }
        let _ = writeln!(out, "    {}", p.ideal_for);
    }
    let _ = writeln!(out, "\nHow It Works");
    for (i, step) in TOURISM_PROCESS.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, step.title);
        out.push_str(&wrap(step.description, "     "));
    }
    out
}

/// FAQ page: category headings with the open entry's answer expanded.
pub fn faqs(board: &FaqBoard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Frequently Asked Questions\n");
    if board.is_empty() {
        let _ = writeln!(out, "  No questions available right now.");
        return out;
    }
    for group in board.groups() {
        let _ = writeln!(out, "{} Questions", capitalize(group.category));
        for entry in group.entries {
            let marker = if entry.open { "▾" } else { "▸" };
            let _ = writeln!(out, "  {marker} {}", entry.faq.question);
            if entry.open {
                out.push_str(&wrap(&entry.faq.answer, "      "));
            }
        }
        out.push('\n');
    }
    out
}

pub fn contact_info() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Contact Us\n");
    let _ = writeln!(out, "  Visit Us");
    for line in ADDRESS_LINES {
        let _ = writeln!(out, "    {line}");
    }
    let _ = writeln!(out, "  Call Us");
    for phone in PHONES {
        let _ = writeln!(out, "    {phone}");
    }
    let _ = writeln!(out, "  Email Us\n    {EMAIL}");
    let _ = writeln!(out, "  Working Hours");
    for h in HOURS {
        let _ = writeln!(out, "    {h}");
    }
    out
}

pub fn chat_turn(message: &ChatMessage) -> String {
    let speaker = match message.role {
        Role::User => "You",
        Role::Assistant => "Assistant",
        Role::System => "System",
    };
    format!("{speaker}:\n{}", wrap(&message.content, "  "))
}

pub fn footer() -> String {
    format!(
        "{CLINIC_NAME} · {} · {} · {}",
        ADDRESS_LINES.join(", "),
        PHONES[0],
        EMAIL
    )
}
