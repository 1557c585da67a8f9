pub mod classify;
pub mod evaluate;
pub mod init;
pub mod strength;
pub mod validate;

/// A `key=value` argument.
#[derive(Debug, Clone)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

pub fn parse_pair(s: &str) -> Result<Pair, String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() && !value.is_empty() => Ok(Pair {
            key: key.to_string(),
            value: value.to_string(),
        }),
        _ => Err(format!("expected key=value, got '{s}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pair_splits_on_first_equals() {
        let pair = parse_pair("superExcavation=value3").unwrap();
        assert_eq!(pair.key, "superExcavation");
        assert_eq!(pair.value, "value3");

        let pair = parse_pair("igneous=a=b").unwrap();
        assert_eq!(pair.value, "a=b");

        assert!(parse_pair("novalue=").is_err());
        assert!(parse_pair("missing").is_err());
    }
}
