//! Edge-list input parsing.

/// Parse whitespace-separated integer pairs from raw input bytes.
///
/// Reading stops at the first token that is not an integer (including tokens
/// that are not valid UTF-8); a trailing unpaired token is dropped.
pub fn parse_edge_pairs(input: &[u8]) -> Vec<(i64, i64)> {
    let mut values = input
        .split(u8::is_ascii_whitespace)
        .filter(|tok| !tok.is_empty())
        .map_while(|tok| std::str::from_utf8(tok).ok()?.parse::<i64>().ok());
    let mut pairs = Vec::new();
    while let (Some(v), Some(w)) = (values.next(), values.next()) {
        pairs.push((v, w));
    }
    pairs
}
