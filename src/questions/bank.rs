//! Static fallback question bank.

/// Look up the canned question list for a lower-cased technology keyword.
///
/// The shipped bank covers `python` and `mysql` as reference entries; an
/// extended deployment would load further entries from configuration rather
/// than growing this match.
fn bank_entry(tech: &str) -> Option<&'static [&'static str]> {
    const PYTHON: &[&str] = &[
        "1. Explain the difference between lists and tuples in Python. When would you use each?",
        "2. What are decorators in Python? Provide an example of how you would use them.",
        "3. Explain the concept of generators in Python and when you would use them.",
        "4. How do you handle exceptions in Python? Provide an example.",
        "5. What is the difference between 'is' and '==' in Python?",
    ];
    const MYSQL: &[&str] = &[
        "1. Explain the difference between INNER JOIN and LEFT JOIN in MySQL.",
        "2. What are indexes in MySQL and when would you use them?",
        "3. How do you optimize a slow-running query in MySQL?",
        "4. Explain the concept of transactions in MySQL.",
        "5. What are the different types of MySQL storage engines and their use cases?",
    ];

    match tech {
        "python" => Some(PYTHON),
        "mysql" => Some(MYSQL),
        _ => None,
    }
}

/// Select canned questions for a comma-separated tech stack.
///
/// Tokens are trimmed and lower-cased before lookup; tokens with no bank
/// entry contribute nothing. Matches are concatenated preserving input order
/// and bank order. The result is empty when nothing matches — callers treat
/// that as "no technical questions".
pub fn fallback_questions(tech_stack: &str) -> Vec<String> {
    tech_stack
        .split(',')
        .map(|tech| tech.trim().to_lowercase())
        .filter_map(|tech| bank_entry(&tech))
        .flat_map(|entries| entries.iter().map(|q| q.to_string()))
        .collect()
}
