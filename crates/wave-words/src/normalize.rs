/// Case-fold a submitted word into its record key.
///
/// Whitespace is kept and empty input yields an empty key.
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}
