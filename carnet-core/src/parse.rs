use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NOTE_RE: Regex = Regex::new(r"\(([^)]*)\)").unwrap();
}

/// Splits a batch-import blob into `(address, note)` pairs.
///
/// Items are comma-separated; an item may carry a parenthesized note,
/// e.g. `"Tour Eiffel (vue), Louvre"`. The first parenthesized group of
/// a fragment becomes the note and is stripped from the address along
/// with any whitespace immediately before it. Fragments that reduce to
/// an empty address are dropped.
///
/// Known limitation of the format: neither an address nor a note may
/// contain a comma, since the comma is the item separator.
pub fn parse_batch_input(input: &str) -> Vec<(String, String)> {
    input
        .split(',')
        .filter_map(|fragment| {
            let (address, note) = match NOTE_RE.captures(fragment) {
                Some(caps) => {
                    let whole = caps.get(0).unwrap();
                    let note = caps.get(1).unwrap().as_str().trim().to_string();
                    let mut address =
                        String::with_capacity(fragment.len() - whole.as_str().len());
                    address.push_str(fragment[..whole.start()].trim_end());
                    address.push_str(&fragment[whole.end()..]);
                    (address, note)
                }
                None => (fragment.to_string(), String::new()),
            };
            let address = address.trim().to_string();
            if address.is_empty() {
                None
            } else {
                Some((address, note))
            }
        })
        .collect()
}
