//! Configuration access port trait.

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;

    /// All `key = value` pairs of a section, in key order. Keys without a
    /// value are skipped.
    fn section_entries(&self, section: &str) -> Vec<(String, String)>;
}
