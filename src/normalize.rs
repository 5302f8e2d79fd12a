// src/normalize.rs
//
// Repairs the spacing/encoding artifacts that PDF extraction and OCR leave
// behind, so the entity extractors can run against predictable text. Pass
// order matters: letter re-gluing must see the original single-space runs
// before wider whitespace is collapsed, and the artifact strips must happen
// before the collapse so they cannot leave double spaces behind.
//
// Never fails. Worst case the input comes back unchanged, and
// normalize(normalize(x)) == normalize(x).

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

pub fn normalize(raw_text: &str) -> String {
    // Unicode-normalize so visually identical characters compare equal
    let mut text: String = raw_text.nfkc().collect();

    text = reglue_spaced_letters(&text);

    // Strip decorative bullet characters
    if let Ok(re) = Regex::new(r"[_•·●◆▶]+") {
        text = re.replace_all(&text, "").into_owned();
    }

    // Dash runs are artifacts only in bullet position. Hyphens inside words
    // and phone numbers stay.
    if let Ok(re) = Regex::new(r"(?m)^[ \t]*[-–—]+[ \t]*") {
        text = re.replace_all(&text, "").into_owned();
    }

    // Collapse runs of horizontal whitespace to a single space
    if let Ok(re) = Regex::new(r"[ \t]{2,}") {
        text = re.replace_all(&text, " ").into_owned();
    }

    // The strips and the collapse can expose new single-space letter runs
    text = reglue_spaced_letters(&text);

    // Re-glue split email addresses: "a n i s @ g m a i l . c o m". The
    // single-letter pieces are already rejoined by this point, so this pass
    // only has to heal the spaces left around "@" and the domain dots.
    if let Ok(re) =
        Regex::new(r"\b(?:[A-Za-z0-9] )*[A-Za-z0-9]+ ?@ ?(?:[A-Za-z] )*[A-Za-z]+ ?\. ?[A-Za-z]{2,}")
    {
        text = re
            .replace_all(&text, |caps: &regex::Captures| caps[0].replace(' ', ""))
            .into_owned();
    }

    // Remove internal whitespace from phone-shaped digit runs; hyphens stay
    // as originally present
    if let Ok(re) = Regex::new(r"\+?\d[\d \-]{7,}\d") {
        text = re
            .replace_all(&text, |caps: &regex::Captures| {
                let span = &caps[0];
                if span.chars().filter(|c| c.is_ascii_digit()).count() >= 9 {
                    span.replace(' ', "")
                } else {
                    span.to_string()
                }
            })
            .into_owned();
    }

    // No space before punctuation
    if let Ok(re) = Regex::new(r"[ \t]+([,.;:!?])") {
        text = re.replace_all(&text, "$1").into_owned();
    }

    // Trim each line, then squeeze paragraph gaps down to one blank line
    text = text.lines().map(str::trim).collect::<Vec<_>>().join("\n");
    if let Ok(re) = Regex::new(r"\n{3,}") {
        text = re.replace_all(&text, "\n\n").into_owned();
    }

    text.trim().to_string()
}

// Rejoins letter-spaced words: "M A C H I N E" -> "MACHINE",
// "M a c h i n e" -> "Machine". The threshold is three or more single
// letters each separated by exactly one space; two-letter runs like "I T"
// are left alone because they are ambiguous with genuine short words.
fn reglue_spaced_letters(text: &str) -> String {
    match Regex::new(r"\b(?:[A-Za-z] ){2,}[A-Za-z]\b") {
        Ok(re) => re
            .replace_all(text, |caps: &regex::Captures| caps[0].replace(' ', ""))
            .into_owned(),
        Err(_) => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reglues_all_caps_letter_spacing() {
        assert_eq!(normalize("M A C H I N E   L E A R N I N G"), "MACHINE LEARNING");
    }

    #[test]
    fn reglues_mixed_case_letter_spacing() {
        assert_eq!(normalize("M a c h i n e"), "Machine");
    }

    #[test]
    fn two_letter_runs_are_left_alone() {
        // Two single letters are ambiguous with real short words, so the
        // repair threshold starts at three.
        assert_eq!(normalize("worked in I T support"), "worked in I T support");
    }

    #[test]
    fn reglues_split_email() {
        assert_eq!(
            normalize("reach me at a n i s @ g m a i l . c o m today"),
            "reach me at anis@gmail.com today"
        );
    }

    #[test]
    fn reglues_split_phone() {
        assert_eq!(normalize("+91 98765 43210"), "+919876543210");
    }

    #[test]
    fn phone_hyphens_survive() {
        assert_eq!(normalize("+91-98765-43210"), "+91-98765-43210");
    }

    #[test]
    fn short_digit_runs_keep_their_spacing() {
        assert_eq!(normalize("May 2023 to Sep 2023"), "May 2023 to Sep 2023");
    }

    #[test]
    fn removes_space_before_punctuation() {
        assert_eq!(normalize("Pune , India . Hello !"), "Pune, India. Hello!");
    }

    #[test]
    fn strips_bullet_characters() {
        assert_eq!(normalize("• Built a chatbot"), "Built a chatbot");
        assert_eq!(normalize("Python ● Flask ● SQL"), "Python Flask SQL");
    }

    #[test]
    fn strips_leading_dash_bullets_only() {
        assert_eq!(normalize("- Built a chatbot"), "Built a chatbot");
        assert_eq!(normalize("co-founder of a start-up"), "co-founder of a start-up");
    }

    #[test]
    fn collapses_paragraph_gaps() {
        assert_eq!(normalize("Summary\n\n\n\nExperience"), "Summary\n\nExperience");
        assert_eq!(normalize("Summary\n\nExperience"), "Summary\n\nExperience");
    }

    #[test]
    fn collapses_repeated_spaces() {
        assert_eq!(normalize("Machine    Learning   Engineer"), "Machine Learning Engineer");
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(
            normalize("Anis Shaikh\nMachine Learning Engineer"),
            "Anis Shaikh\nMachine Learning Engineer"
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\n  "), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        let samples = [
            "M A C H I N E   L E A R N I N G",
            "a n i s @ g m a i l . c o m",
            "+91 98765 43210",
            "• Python ● Flask\n\n\n- SQL",
            "A • B • C",
            "Anis Shaikh\nMohol Maharastra | anis@example.com | +91 98765 43210",
            "Pune , India",
            "",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }
}
