//! Numeric value and parameter-list parsing.
//!
//! Values accept an optional SPICE-style unit suffix (`10k`, `100n`,
//! `4.7u`). Parameter lists are `key=value` pairs separated by commas or
//! whitespace, e.g. `Is=1e-12,n=1.0,Rs=10,Nd=1e17`.

use std::fmt;

use crate::error::{JunctionError, Result};

/// Parse a number string with optional unit suffix.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let (num_str, multiplier) = if let Some(last) = text.chars().last() {
        let mult = match last {
            'f' => 1e-15,
            'p' => 1e-12,
            'n' => 1e-9,
            'u' | 'µ' => 1e-6,
            'm' => 1e-3,
            'k' | 'K' => 1e3,
            'M' => 1e6,
            'G' => 1e9,
            _ => 1.0,
        };
        if mult != 1.0 {
            (&text[..text.len() - last.len_utf8()], mult)
        } else {
            (text, 1.0)
        }
    } else {
        (text, 1.0)
    };

    num_str
        .parse::<f64>()
        .ok()
        .map(|v| v * multiplier)
        .filter(|v| v.is_finite())
}

/// An ordered list of `key=value` parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamList {
    entries: Vec<(String, f64)>,
}

impl ParamList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `key=value` pairs separated by commas or whitespace.
    pub fn parse(input: &str) -> Result<Self> {
        let mut list = Self::new();
        for item in input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
        {
            let (key, value) = item
                .split_once('=')
                .ok_or_else(|| JunctionError::parse(item, "expected key=value"))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(JunctionError::parse(item, "missing parameter name"));
            }
            let value = parse_value(value)
                .ok_or_else(|| JunctionError::parse(item, format!("invalid number '{value}'")))?;
            list.set(key, value);
        }
        Ok(list)
    }

    /// Set a parameter, replacing any earlier value under the same name.
    pub fn set(&mut self, key: impl Into<String>, value: f64) {
        let key = key.into();
        match self
            .entries
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&key))
        {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a parameter by case-insensitive name.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for ParamList {
    /// Writes the list back in `key=value,key=value` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{key}={value:e}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Option<f64>, b: Option<f64>) -> bool {
        match (a, b) {
            (Some(x), Some(y)) => (x - y).abs() < x.abs() * 1e-10 + 1e-15,
            (None, None) => true,
            _ => false,
        }
    }

    #[test]
    fn test_parse_value() {
        assert!(approx_eq(parse_value("10k"), Some(10_000.0)));
        assert!(approx_eq(parse_value("100n"), Some(100e-9)));
        assert!(approx_eq(parse_value("4.7u"), Some(4.7e-6)));
        assert!(approx_eq(parse_value("1M"), Some(1_000_000.0)));
        assert!(approx_eq(parse_value("-0.35"), Some(-0.35)));
        assert!(approx_eq(parse_value("1e17"), Some(1e17)));
        assert!(approx_eq(parse_value("1e-12"), Some(1e-12)));
        assert!(approx_eq(parse_value("abc"), None));
        assert!(approx_eq(parse_value(""), None));
        assert!(approx_eq(parse_value("inf"), None));
        assert!(approx_eq(parse_value("1e308G"), None));
        assert!(approx_eq(parse_value("1e308"), Some(1e308)));
    }

    #[test]
    fn test_parse_preset_format() {
        let list = ParamList::parse("Is=1e-12,n=1.0,Rs=10,Nd=1e17,Na=1e18,ni=1e10").unwrap();
        assert_eq!(list.len(), 6);
        assert_eq!(list.get("is"), Some(1e-12));
        assert_eq!(list.get("NA"), Some(1e18));
        assert_eq!(list.get("Vapp"), None);
    }

    #[test]
    fn test_parse_whitespace_and_override() {
        let list = ParamList::parse("Rs=10  Rs=22 vapp=-0.5").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get("rs"), Some(22.0));
        assert_eq!(list.get("Vapp"), Some(-0.5));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            ParamList::parse("Is"),
            Err(JunctionError::ParseError { .. })
        ));
        assert!(ParamList::parse("=5").is_err());
        assert!(ParamList::parse("Rs=ten").is_err());
        assert!(ParamList::parse("").unwrap().is_empty());
    }

    #[test]
    fn test_display_parses_back() {
        let list = ParamList::parse("Is=1e-12,n=1.2,Rs=0.5").unwrap();
        assert_eq!(list.to_string(), "Is=1e-12,n=1.2e0,Rs=5e-1");
        assert_eq!(ParamList::parse(&list.to_string()).unwrap(), list);
    }
}
