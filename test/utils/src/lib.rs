/// Stand-in bytes for an uploaded pitch deck. The front end never looks
/// inside a deck, so plain ASCII is enough.
pub fn deck_fixture() -> &'static [u8] {
    return b"%PDF-1.4 Acme Analytics pitch deck. Seed round, 2 slides.";
}

pub fn review_fixture() -> &'static str {
    return r#"
Strengths:
- Strong team with prior exits.

Weaknesses:
- Weak market.

Suggestions:
- Narrow the beachhead.
"#
    .trim();
}
