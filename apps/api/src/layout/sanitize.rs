//! Text clean-up before drawing with the built-in (WinAnsi) fonts.

/// Longest string, in characters, drawn for a single field or bullet.
pub const MAX_FIELD_CHARS: usize = 400;

const ELLIPSIS: &str = "...";

/// Maps common typographic characters and Latin-1 letters to ASCII and drops
/// anything else outside printable ASCII. Newlines and tabs become spaces.
pub fn to_printable_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ' '..='~' => out.push(c),
            '\n' | '\r' | '\t' => out.push(' '),
            '\u{2018}' | '\u{2019}' | '\u{201B}' | '\u{2032}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201F}' | '\u{2033}' => out.push('"'),
            '\u{2010}'..='\u{2015}' | '\u{2212}' => out.push('-'),
            '\u{2022}' | '\u{25CF}' | '\u{00B7}' => out.push('-'),
            '\u{2026}' => out.push_str(ELLIPSIS),
            '\u{00A0}' | '\u{2002}'..='\u{200A}' => out.push(' '),
            _ => {
                if let Some(folded) = fold_latin1_letter(c) {
                    out.push_str(folded);
                }
            }
        }
    }
    out
}

/// Base letter(s) for an accented Latin-1 letter, e.g. 'é' -> "e".
fn fold_latin1_letter(c: char) -> Option<&'static str> {
    let folded = match c {
        'À'..='Å' => "A",
        'Æ' => "AE",
        'Ç' => "C",
        'È'..='Ë' => "E",
        'Ì'..='Ï' => "I",
        'Ð' => "D",
        'Ñ' => "N",
        'Ò'..='Ö' | 'Ø' => "O",
        'Ù'..='Ü' => "U",
        'Ý' => "Y",
        'Þ' => "Th",
        'ß' => "ss",
        'à'..='å' => "a",
        'æ' => "ae",
        'ç' => "c",
        'è'..='ë' => "e",
        'ì'..='ï' => "i",
        'ð' => "d",
        'ñ' => "n",
        'ò'..='ö' | 'ø' => "o",
        'ù'..='ü' => "u",
        'ý' | 'ÿ' => "y",
        'þ' => "th",
        _ => return None,
    };
    Some(folded)
}

/// Truncates to at most `max_chars` characters, ending with `...` when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.truncate(out.trim_end().len());
    out.push_str(ELLIPSIS);
    out
}

/// Full preparation applied to every string the renderer draws.
pub fn prepare_field(text: &str) -> String {
    let ascii = to_printable_ascii(text);
    truncate_chars(ascii.trim(), MAX_FIELD_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typographic_characters_are_mapped() {
        assert_eq!(
            to_printable_ascii("\u{2022} Led \u{201C}core\u{201D} team \u{2014} 30%"),
            "- Led \"core\" team - 30%"
        );
    }

    #[test]
    fn test_unmappable_characters_are_dropped() {
        assert_eq!(to_printable_ascii("\u{1F680} \u{4E2D}\u{6587} \u{00D7}"), "  ");
    }

    #[test]
    fn test_accented_letters_fold_to_base_letters() {
        assert_eq!(to_printable_ascii("r\u{00E9}sum\u{00E9}"), "resume");
        assert_eq!(
            to_printable_ascii("Fran\u{00E7}ois M\u{00FC}ller, \u{00C5}se \u{00D8}stergaard, Stra\u{00DF}e"),
            "Francois Muller, Ase Ostergaard, Strasse"
        );
        assert_eq!(prepare_field("Jos\u{00E9} Pe\u{00F1}a"), "Jose Pena");
    }

    #[test]
    fn test_truncate_leaves_short_text_alone() {
        assert_eq!(truncate_chars("Rust", 10), "Rust");
    }

    #[test]
    fn test_truncate_marks_cut_text() {
        let long = "a".repeat(MAX_FIELD_CHARS + 50);
        let cut = truncate_chars(&long, MAX_FIELD_CHARS);
        assert_eq!(cut.chars().count(), MAX_FIELD_CHARS);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_prepare_field_trims_whitespace() {
        assert_eq!(prepare_field("  Jordan Smith \n"), "Jordan Smith");
    }
}
