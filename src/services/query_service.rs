//! Keyword lookup behind `POST /api/query`.

pub const RELIANCE_ANSWER: &str = "Reliance Industries is a major Indian conglomerate with interests in energy, petrochemicals, retail, and telecom.";
pub const PC_JEWELLER_ANSWER: &str =
    "PC Jeweller Q1 results: Revenue increased by 8% year-on-year, with net profit up 5%.";
pub const TESLA_ANSWER: &str =
    "Tesla's stock is volatile. Consider your risk tolerance before buying or selling.";
pub const DEFAULT_ANSWER: &str = "Sorry, I don't have information on that.";

// checked in order; first hit wins
const KEYWORDS: [(&str, &str); 3] = [
    ("reliance", RELIANCE_ANSWER),
    ("pc jeweller", PC_JEWELLER_ANSWER),
    ("tesla", TESLA_ANSWER),
];

pub fn answer_for(query: &str) -> &'static str {
    let q = query.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(needle, _)| q.contains(needle))
        .map(|(_, answer)| *answer)
        .unwrap_or(DEFAULT_ANSWER)
}
