const LIST_SEPARATORS: [char; 3] = [',', ';', '\n'];

/// Splits raw shopping-list text into candidate item queries.
///
/// When the text carries any list separator (comma, semicolon, newline) it is
/// split on those; otherwise single-line input like "milch eier brot" is
/// split on whitespace. Tokens are trimmed, empties dropped, order preserved.
/// Repeats are kept on purpose: entering an item twice means buying two.
pub fn tokenize(raw: &str) -> Vec<String> {
    let tokens: Vec<&str> = if raw.contains(&LIST_SEPARATORS[..]) {
        raw.split(&LIST_SEPARATORS[..]).collect()
    } else {
        raw.split_whitespace().collect()
    };

    tokens
        .into_iter()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_comma_separated_lists() {
        assert_eq!(tokenize("milch, eier, brot"), vec!["milch", "eier", "brot"]);
    }

    #[test]
    fn splits_single_line_on_whitespace() {
        assert_eq!(tokenize("milch eier brot"), vec!["milch", "eier", "brot"]);
    }

    #[test]
    fn separator_mode_keeps_multi_word_items() {
        assert_eq!(
            tokenize("tiefkühl pizza; olivenöl 1l\nsaft orange"),
            vec!["tiefkühl pizza", "olivenöl 1l", "saft orange"]
        );
    }

    #[test]
    fn blank_input_yields_nothing() {
        assert_eq!(tokenize("  "), Vec::<String>::new());
        assert_eq!(tokenize(",,;\n,"), Vec::<String>::new());
    }

    #[test]
    fn repeated_items_are_kept() {
        assert_eq!(tokenize("milch, milch"), vec!["milch", "milch"]);
    }
}
