use std::collections::BTreeMap;

/// Display names for currency pairs, used when recording quotes.
#[derive(Clone, Debug, PartialEq)]
pub struct Labels {
    names: BTreeMap<String, String>,
    default: String,
}

impl Labels {
    pub fn new(names: BTreeMap<String, String>, default: String) -> Labels {
        Labels { names, default }
    }

    pub fn label(&self, pair: Option<&str>) -> &str {
        pair.and_then(|pair| self.names.get(pair))
            .map(String::as_str)
            .unwrap_or(self.default.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::Labels;

    fn labels() -> Labels {
        let names = vec![
            ("USD-BRL".to_string(), "Dólar".to_string()),
            ("BTC-BRL".to_string(), "Bitcoin".to_string()),
        ];
        Labels::new(names.into_iter().collect(), "Dólar".into())
    }

    #[test]
    fn known_pair() {
        assert_eq!("Bitcoin", labels().label(Some("BTC-BRL")));
    }

    #[test]
    fn unknown_pair_falls_back() {
        assert_eq!("Dólar", labels().label(Some("XYZ-ABC")));
    }

    #[test]
    fn absent_pair_falls_back() {
        assert_eq!("Dólar", labels().label(None));
    }
}
