//! Sanitization of free text into constrained resource identifiers.

/// Rewrite `input` into the constrained resource-name form: lower-case
/// ASCII alphanumerics and single hyphens, no leading or trailing hyphen,
/// truncated to `max_length` characters.
///
/// Every run of characters outside `[a-z0-9]` collapses into one hyphen.
/// Truncation happens before the trailing-hyphen trim, so a cut never
/// leaves a dangling hyphen. An input with no alphanumeric characters
/// sanitizes to the empty string; rejecting or replacing an empty
/// identifier is left to component derive hooks, which know whether a
/// fallback name can be derived instead.
pub(super) fn resource_name(input: &str, max_length: Option<usize>) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_hyphen = false;
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    if let Some(limit) = max_length
        && out.len() > limit
    {
        // Output is pure ASCII, so byte truncation is character truncation.
        out.truncate(limit);
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::resource_name;

    #[rstest]
    #[case::mixed_case_and_punctuation("My Custom Name!", None, "my-custom-name")]
    #[case::symbol_runs_collapse("a__--b", None, "a-b")]
    #[case::leading_symbols_trimmed("--edge", None, "edge")]
    #[case::already_sanitized("my-custom-name", None, "my-custom-name")]
    #[case::truncation_drops_dangling_hyphen("My Custom Name!", Some(10), "my-custom")]
    #[case::truncation_mid_word("My Custom Name!", Some(4), "my-c")]
    #[case::all_symbols_sanitize_to_empty("!!!", None, "")]
    #[case::unicode_is_not_a_name_character("café crème", None, "caf-cr-me")]
    fn sanitizes_into_resource_names(
        #[case] input: &str,
        #[case] max_length: Option<usize>,
        #[case] expected: &str,
    ) {
        assert_eq!(resource_name(input, max_length), expected);
    }

    #[rstest]
    #[case("My Custom Name!", Some(10))]
    #[case("--edge case--", None)]
    fn sanitization_is_idempotent(#[case] input: &str, #[case] max_length: Option<usize>) {
        let once = resource_name(input, max_length);
        assert_eq!(resource_name(&once, max_length), once);
    }
}
