//! Lookup: resolves a profile against the catalog and fills placeholders.

use crate::recommendation::catalog::Catalog;
use crate::recommendation::profile::Profile;

/// Used when the manufacturer has no entry for the requested style.
pub const MANUFACTURER_FALLBACK: &str = "Sorry, we couldn’t find a {gaya} style EV from {manufacturer} that matches your preferences. \
    Please explore more options within the brand or try another style or manufacturer.";

/// Used when the brand-agnostic table has no entry for the requested style.
pub const WILDCARD_FALLBACK: &str = "Sorry, we couldn’t find a {gaya} style EV from any manufacturer that matches your preferences. \
    Please try another style.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Catalog,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub text: String,
    pub resolution: Resolution,
}

/// Picks the sentence for `profile` and substitutes its placeholders.
pub fn recommend(catalog: &Catalog, profile: &Profile) -> Recommendation {
    let (template, resolution) = if profile.is_wildcard() {
        match catalog.for_any_manufacturer(&profile.style) {
            Some(sentence) => (sentence, Resolution::Catalog),
            None => (WILDCARD_FALLBACK, Resolution::Fallback),
        }
    } else {
        match catalog.for_manufacturer(&profile.manufacturer, &profile.style) {
            Some(sentence) => (sentence, Resolution::Catalog),
            None => (MANUFACTURER_FALLBACK, Resolution::Fallback),
        }
    };

    Recommendation {
        text: fill_placeholders(template, profile),
        resolution,
    }
}

/// Replaces `{umur}`, `{gaya}`, `{pekerjaan}` and `{manufacturer}` in one pass.
///
/// Inserted values are never re-scanned. Unknown tokens and unmatched braces
/// are copied through unchanged.
pub fn fill_placeholders(template: &str, profile: &Profile) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];

        let Some(close) = tail.find('}') else {
            rest = tail;
            break;
        };

        match placeholder_value(&tail[1..close], profile) {
            Some(value) => {
                out.push_str(&value);
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn placeholder_value(token: &str, profile: &Profile) -> Option<String> {
    match token {
        "umur" => Some(profile.age.clone()),
        "gaya" => Some(profile.style.clone()),
        "pekerjaan" => Some(profile.occupation.clone()),
        "manufacturer" => Some(profile.manufacturer_label()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(manufacturer: &str, style: &str) -> Profile {
        Profile {
            age: "30".to_string(),
            style: style.to_string(),
            occupation: "Software engineer".to_string(),
            manufacturer: manufacturer.to_string(),
        }
    }

    #[test]
    fn test_exact_match_returns_table_sentence() {
        let catalog = Catalog::builtin();
        for (manufacturer, style) in [
            ("chery", "sporty"),
            ("chery", "luxury"),
            ("tesla", "sporty"),
            ("tesla", "luxury"),
            ("bmw", "sporty"),
            ("bmw", "luxury"),
        ] {
            let rec = recommend(&catalog, &profile(manufacturer, style));
            assert_eq!(rec.resolution, Resolution::Catalog);
            assert_eq!(
                rec.text,
                catalog.for_manufacturer(manufacturer, style).unwrap()
            );
        }
    }

    #[test]
    fn test_wuling_economic() {
        let rec = recommend(&Catalog::builtin(), &profile("wuling", "economic"));
        assert!(rec.text.contains("Wuling Air EV"));
    }

    #[test]
    fn test_wildcard_luxury() {
        let rec = recommend(&Catalog::builtin(), &profile("all", "luxury"));
        assert!(rec.text.contains("BMW iX"));
        assert_eq!(rec.resolution, Resolution::Catalog);
    }

    #[test]
    fn test_unknown_style_uses_manufacturer_fallback() {
        let rec = recommend(&Catalog::builtin(), &profile("tesla", "offroad"));
        assert_eq!(rec.resolution, Resolution::Fallback);
        assert_eq!(
            rec.text,
            "Sorry, we couldn’t find a offroad style EV from Tesla that matches your preferences. \
             Please explore more options within the brand or try another style or manufacturer."
        );
    }

    #[test]
    fn test_unknown_manufacturer_uses_manufacturer_fallback() {
        let rec = recommend(&Catalog::builtin(), &profile("rivian", "sporty"));
        assert_eq!(rec.resolution, Resolution::Fallback);
        assert!(rec.text.contains("from Rivian"));
    }

    #[test]
    fn test_wildcard_miss_uses_wildcard_fallback() {
        let rec = recommend(&Catalog::builtin(), &profile("all", "offroad"));
        assert_eq!(rec.resolution, Resolution::Fallback);
        assert!(rec.text.contains("offroad style EV from any manufacturer"));
    }

    #[test]
    fn test_fill_placeholders_all_tokens() {
        let text = fill_placeholders(
            "{pekerjaan}, {umur}, likes {gaya} cars from {manufacturer}",
            &profile("bmw", "sporty"),
        );
        assert_eq!(text, "Software engineer, 30, likes sporty cars from Bmw");
    }

    #[test]
    fn test_fill_placeholders_leaves_unknown_tokens_and_braces() {
        let p = profile("bmw", "sporty");
        assert_eq!(fill_placeholders("{nama} {gaya}", &p), "{nama} sporty");
        assert_eq!(fill_placeholders("{{gaya}}", &p), "{sporty}");
        assert_eq!(fill_placeholders("open { only", &p), "open { only");
        assert_eq!(fill_placeholders("no tokens", &p), "no tokens");
    }

    #[test]
    fn test_fill_placeholders_does_not_rescan_values() {
        let p = profile("tesla", "{umur}");
        let rec = recommend(&Catalog::builtin(), &p);
        assert!(rec.text.contains("a {umur} style EV"));
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let catalog = Catalog::builtin();
        let p = profile("all", "sporty");
        assert_eq!(recommend(&catalog, &p), recommend(&catalog, &p));
    }
}
