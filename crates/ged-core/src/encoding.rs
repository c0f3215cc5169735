//! Character-set names a GEDCOM header may declare.

/// Names accepted in the header's character-set field. Comparison is exact.
pub const SUPPORTED_CHARACTER_SETS: [&str; 4] = ["ANSEL", "ASCII", "UNICODE", "UTF-8"];

/// The encoding a repaired header falls back to.
pub const DEFAULT_CHARACTER_SET: &str = "ANSEL";

/// Whether `name` is one of [`SUPPORTED_CHARACTER_SETS`].
pub fn is_valid_character_set_name(name: &str) -> bool {
    SUPPORTED_CHARACTER_SETS.contains(&name)
}

/// The supported names joined for use in messages.
pub fn supported_character_set_names() -> String {
    SUPPORTED_CHARACTER_SETS.join(", ")
}
