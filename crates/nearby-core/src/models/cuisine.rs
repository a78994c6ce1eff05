/// Cuisine keys the filter control offers, with their display names
pub const CUISINES: [(&str, &str); 5] = [
    ("plov", "Osh (Plov)"),
    ("lagman", "Lagʻmon"),
    ("somsa", "Somsa"),
    ("shashlik", "Shashlik"),
    ("international", "International"),
];

/// Display name for a known cuisine key
pub fn cuisine_display_name(key: &str) -> Option<&'static str> {
    CUISINES.iter().find(|(k, _)| *k == key).map(|(_, name)| *name)
}
