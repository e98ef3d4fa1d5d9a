//! Required-field validation for modal forms.

/// A required control fails validation when its value is blank after trim.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// True when every required value is non-blank, i.e. submission may proceed.
pub fn all_present<'a, I>(values: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().all(|value| !is_blank(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_counts_as_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   \t"));
        assert!(!is_blank(" hello "));
    }

    #[test]
    fn submission_gate_needs_every_field() {
        assert!(all_present(["a", "b"]));
        assert!(!all_present(["", "hello"]));
        assert!(all_present([]));
    }
}
