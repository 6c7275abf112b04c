//! The map header: first line of a map file, mapping entity kinds to token specs.
//!
//! ```plaintext
//! {"Wall": {"name": "w", "hp": 10, "damage": 0, "speed": 0},
//!  "EnemyTank": [{"name": "e1", "hp": 50, "damage": 50, "speed": 5, "image": "images/Enemy1.png"}]}
//! ```
//!
//! Kinds whose value is a list describe typed variants (enemy tanks).

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use tankwar_core::constants::STAT_LIMIT;

/// Stats for one map token.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenSpec {
    /// Token as it appears in the grid rows.
    pub name: String,
    #[serde(deserialize_with = "int_like")]
    pub hp: i32,
    #[serde(deserialize_with = "int_like")]
    pub damage: i32,
    #[serde(default, deserialize_with = "int_like")]
    pub speed: i32,
    /// Sprite reference, only used by variant lists.
    #[serde(default)]
    pub image: Option<String>,
}

/// Either a single token or a list of typed variants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum KindSpec {
    Single(TokenSpec),
    Variants(Vec<TokenSpec>),
}

/// Parsed header: kind name -> spec.
pub type MapHeader = BTreeMap<String, KindSpec>;

impl KindSpec {
    pub fn tokens(&self) -> &[TokenSpec] {
        match self {
            KindSpec::Single(spec) => std::slice::from_ref(spec),
            KindSpec::Variants(specs) => specs,
        }
    }
}

/// Parse the header line. Python-style single-quoted literals are accepted.
pub fn parse_header(line: &str) -> Result<MapHeader, serde_json::Error> {
    match serde_json::from_str(line) {
        Ok(header) => Ok(header),
        Err(err) => {
            if !line.contains('\'') {
                return Err(err);
            }
            serde_json::from_str(&line.replace('\'', "\""))
        }
    }
}

/// Accept numbers written as integers, floats or numeric strings; truncate like `int()`.
/// Magnitudes past [`STAT_LIMIT`] are clamped.
fn int_like<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = serde_json::Value::deserialize(deserializer)?;
    let number = match &value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number
        .map(|n| n.trunc().clamp(-STAT_LIMIT as f64, STAT_LIMIT as f64) as i32)
        .ok_or_else(|| D::Error::custom(format!("expected a number, found {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_header() {
        let header = parse_header(
            r#"{"Wall": {"name": "w", "hp": 10, "damage": 0, "speed": 0},
                "EnemyTank": [{"name": "e1", "hp": 50, "damage": 50, "speed": 5, "image": "a.png"},
                              {"name": "e2", "hp": 100, "damage": 25, "speed": 3, "image": "b.png"}]}"#,
        )
        .unwrap();
        assert_eq!(header["Wall"].tokens()[0].name, "w");
        assert_eq!(header["EnemyTank"].tokens().len(), 2);
        assert_eq!(header["EnemyTank"].tokens()[1].image.as_deref(), Some("b.png"));
    }

    #[test]
    fn test_python_literal_header() {
        let header =
            parse_header("{'MetalWall': {'name': 'm', 'hp': -1, 'damage': 0, 'speed': '0'}}")
                .unwrap();
        let spec = &header["MetalWall"].tokens()[0];
        assert_eq!(spec.hp, -1);
        assert_eq!(spec.speed, 0);
    }

    #[test]
    fn test_float_speed_truncates() {
        let header =
            parse_header(r#"{"FriendlyTank": {"name": "p", "hp": 100, "damage": 50, "speed": 5.9}}"#)
                .unwrap();
        assert_eq!(header["FriendlyTank"].tokens()[0].speed, 5);
    }

    #[test]
    fn test_huge_stats_are_clamped() {
        let header = parse_header(
            r#"{"FriendlyTank": {"name": "p", "hp": 1e12, "damage": -2147483648, "speed": 2147483647}}"#,
        )
        .unwrap();
        let spec = &header["FriendlyTank"].tokens()[0];
        assert_eq!(spec.hp, STAT_LIMIT);
        assert_eq!(spec.damage, -STAT_LIMIT);
        assert_eq!(spec.speed, STAT_LIMIT);
    }

    #[test]
    fn test_garbage_header_fails() {
        assert!(parse_header("w,w,m").is_err());
        assert!(parse_header(r#"{"Wall": {"name": "w", "hp": "lots", "damage": 0}}"#).is_err());
    }
}
