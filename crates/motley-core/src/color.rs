//! The color catalog — the closed set of favorite-color codes.
//!
//! Codes 1 through 7 map to German display names. The catalog is built once
//! at startup and shared by `Arc` into every component that needs it; it is
//! immutable for the process lifetime.

/// Sentinel name returned by [`ColorCatalog::name_for`] for any code
/// outside the closed set.
pub const UNKNOWN_COLOR: &str = "unbekannt";

/// Immutable bidirectional mapping between color codes and display names.
#[derive(Debug, Clone)]
pub struct ColorCatalog {
  entries: Vec<(i64, &'static str)>,
}

impl Default for ColorCatalog {
  fn default() -> Self { Self::standard() }
}

impl ColorCatalog {
  /// The seven colors of the registry.
  pub fn standard() -> Self {
    Self {
      entries: vec![
        (1, "blau"),
        (2, "grün"),
        (3, "violett"),
        (4, "rot"),
        (5, "gelb"),
        (6, "türkis"),
        (7, "weiß"),
      ],
    }
  }

  /// Display name for `code`.
  ///
  /// Total: any code outside the set yields [`UNKNOWN_COLOR`], so callers
  /// can always render a value.
  pub fn name_for(&self, code: i64) -> &'static str {
    self
      .entries
      .iter()
      .find(|(c, _)| *c == code)
      .map(|(_, name)| *name)
      .unwrap_or(UNKNOWN_COLOR)
  }

  /// Case-insensitive reverse lookup.
  ///
  /// `None` when no entry matches, so a filter on an unrecognized name
  /// degrades to "no matches" rather than an error.
  pub fn code_for(&self, name: &str) -> Option<i64> {
    let wanted = name.trim().to_lowercase();
    self
      .entries
      .iter()
      .find(|(_, n)| n.to_lowercase() == wanted)
      .map(|(code, _)| *code)
  }

  /// True iff `code` is a member of the closed set.
  pub fn is_valid(&self, code: i64) -> bool {
    self.entries.iter().any(|(c, _)| *c == code)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn name_for_known_codes() {
    let catalog = ColorCatalog::standard();
    assert_eq!(catalog.name_for(1), "blau");
    assert_eq!(catalog.name_for(2), "grün");
    assert_eq!(catalog.name_for(7), "weiß");
  }

  #[test]
  fn name_for_out_of_set_codes_is_sentinel() {
    let catalog = ColorCatalog::standard();
    assert_eq!(catalog.name_for(0), UNKNOWN_COLOR);
    assert_eq!(catalog.name_for(8), UNKNOWN_COLOR);
    assert_eq!(catalog.name_for(-3), UNKNOWN_COLOR);
    assert_eq!(catalog.name_for(999), UNKNOWN_COLOR);
  }

  #[test]
  fn code_for_is_case_insensitive() {
    let catalog = ColorCatalog::standard();
    assert_eq!(catalog.code_for("blau"), Some(1));
    assert_eq!(catalog.code_for("BLAU"), Some(1));
    assert_eq!(catalog.code_for("Blau"), Some(1));
    // Unicode case folding must cover the umlaut names too.
    assert_eq!(catalog.code_for("GRÜN"), Some(2));
    assert_eq!(catalog.code_for("TÜRKIS"), Some(6));
  }

  #[test]
  fn code_for_unknown_name_is_none() {
    let catalog = ColorCatalog::standard();
    assert_eq!(catalog.code_for("orange"), None);
    assert_eq!(catalog.code_for(""), None);
  }

  #[test]
  fn code_for_trims_surrounding_whitespace() {
    let catalog = ColorCatalog::standard();
    assert_eq!(catalog.code_for("  rot "), Some(4));
  }

  #[test]
  fn is_valid_matches_the_closed_set() {
    let catalog = ColorCatalog::standard();
    for code in 1..=7 {
      assert!(catalog.is_valid(code));
    }
    assert!(!catalog.is_valid(0));
    assert!(!catalog.is_valid(8));
  }
}
