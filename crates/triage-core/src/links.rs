//! Research link helpers.

/// Encode a search query for a URL query string. Spaces become `+`.
pub fn encode_query(query: &str) -> String {
    let mut encoded = String::with_capacity(query.len());
    for word in query.split_whitespace() {
        if !encoded.is_empty() {
            encoded.push('+');
        }
        for byte in word.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                    encoded.push(char::from(byte));
                }
                _ => encoded.push_str(&format!("%{byte:02X}")),
            }
        }
    }
    encoded
}

/// Part search links offered when a component is not in the knowledge base.
pub fn component_research_links(part_number: &str) -> Vec<(&'static str, String)> {
    let query = encode_query(part_number);
    vec![
        ("Octopart", format!("https://octopart.com/search?q={query}")),
        (
            "Digi-Key",
            format!("https://www.digikey.com/en/products/result?s={query}"),
        ),
        (
            "Mouser",
            format!("https://www.mouser.com/Search/Refine?Keyword={query}"),
        ),
        (
            "Wikipedia",
            format!("https://en.wikipedia.org/wiki/Special:Search?search={query}"),
        ),
    ]
}
