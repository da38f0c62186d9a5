pub const MOTIVATION_QUOTES: &[&str] = &[
    "Your body can stand almost anything. It's your mind you have to convince.",
    "Success starts with self-discipline. Let's crush today's goals!",
    "The only bad workout is the one that didn't happen.",
    "Don't wish for it, work for it. Every rep counts!",
    "Strength doesn't come from what you can do. It comes from overcoming what you thought you couldn't.",
];

/// Quote for an explicit index; wraps past the end of the list.
pub fn quote_at(index: usize) -> &'static str {
    MOTIVATION_QUOTES[index % MOTIVATION_QUOTES.len()]
}

pub fn random_quote() -> &'static str {
    quote_at(rand::random_range(0..MOTIVATION_QUOTES.len()))
}
