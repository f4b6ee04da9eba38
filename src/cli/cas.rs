use anyhow::Result;

use msl::cas::hyphenate_digits;

/// Print the hyphenated form of a raw CAS number
pub fn run(number: &str) -> Result<()> {
    match normalize(number) {
        Some(cas) => {
            println!("{}", cas);
            Ok(())
        }
        None => anyhow::bail!("Not a valid CAS registry number: {}", number),
    }
}

/// Hyphenate digits, ignoring any hyphens already present
fn normalize(number: &str) -> Option<String> {
    let digits: String = number.chars().filter(|c| *c != '-').collect();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    hyphenate_digits(&digits)
}
