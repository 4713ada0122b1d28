//! Career analysis — skill-gap roadmaps, ATS keyword scoring, and career
//! projections. All functions here are pure; the handlers module wires them
//! to the HTTP surface.

pub mod ats;
pub mod handlers;
pub mod projection;
pub mod skill_gap;

/// Renders a lowercase catalog entry for display: first letter of each word
/// uppercased ("machine learning" → "Machine Learning", "sql" → "Sql").
///
/// Lossless against the catalog: lowercasing the result returns the original
/// entry, so clients can map rendered names back to table entries.
pub fn title_case(entry: &str) -> String {
    entry
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
