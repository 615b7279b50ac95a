/// Canonical comparison form for queries and catalog names alike.
///
/// Lower-cases, folds the German special characters (ä→a, ö→o, ü→u, ß→ss —
/// the table is fixed and exhaustive for German), and collapses surrounding
/// and internal whitespace runs. Every comparison in the matcher runs on two
/// normalized strings; raw forms never mix with normalized ones.
pub fn normalize(value: &str) -> String {
    let mut folded = String::with_capacity(value.len());
    for ch in value.to_lowercase().chars() {
        match ch {
            'ä' => folded.push('a'),
            'ö' => folded.push('o'),
            'ü' => folded.push('u'),
            'ß' => folded.push_str("ss"),
            _ => folded.push(ch),
        }
    }
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_umlauts_and_case() {
        assert_eq!(normalize("Müsli"), "musli");
        assert_eq!(normalize("WEISSKOHL"), "weisskohl");
        assert_eq!(normalize("Maß"), "mass");
    }

    #[test]
    fn trims_and_collapses_whitespace() {
        assert_eq!(normalize("  Käse  "), "kase");
        assert_eq!(normalize("saft \t orange"), "saft orange");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize("   "), "");
    }
}
