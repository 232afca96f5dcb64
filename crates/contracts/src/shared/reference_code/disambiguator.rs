use rand::Rng;
use serde::{Deserialize, Serialize};

/// Случайная 4-значная часть номера (0000–9999)
///
/// Значение выбирается один раз на сессию редактирования и хранится
/// вызывающей стороной (см. [`super::CodeBuilderSession`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Disambiguator(u16);

impl Disambiguator {
    pub const MAX: u16 = 9999;

    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..=Self::MAX))
    }

    pub fn from_value(value: u16) -> Result<Self, String> {
        if value > Self::MAX {
            return Err(format!("Random code out of range: {}", value));
        }
        Ok(Self(value))
    }

    /// Ровно четыре ASCII-цифры
    pub fn parse(s: &str) -> Result<Self, String> {
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("Random code must be 4 digits: '{}'", s));
        }
        s.parse::<u16>()
            .map(Self)
            .map_err(|e| format!("Invalid random code '{}': {}", s, e))
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    pub fn as_string(&self) -> String {
        format!("{:04}", self.0)
    }
}

impl std::fmt::Display for Disambiguator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl TryFrom<String> for Disambiguator {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Disambiguator> for String {
    fn from(value: Disambiguator) -> Self {
        value.as_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_padding() {
        assert_eq!(Disambiguator::from_value(0).unwrap().as_string(), "0000");
        assert_eq!(Disambiguator::from_value(42).unwrap().to_string(), "0042");
        assert_eq!(Disambiguator::from_value(9999).unwrap().as_string(), "9999");
    }

    #[test]
    fn test_from_value_rejects_out_of_range() {
        assert!(Disambiguator::from_value(10000).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Disambiguator::parse("1234").unwrap().value(), 1234);
        assert_eq!(Disambiguator::parse("0007").unwrap().value(), 7);
        assert!(Disambiguator::parse("123").is_err());
        assert!(Disambiguator::parse("12345").is_err());
        assert!(Disambiguator::parse("12a4").is_err());
        assert!(Disambiguator::parse("+123").is_err());
    }

    #[test]
    fn test_draw_always_four_digits() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let d = Disambiguator::draw(&mut rng);
            assert!(d.value() <= Disambiguator::MAX);
            assert_eq!(d.as_string().len(), 4);
        }
    }

    #[test]
    fn test_serde_as_string() {
        let d = Disambiguator::from_value(56).unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"0056\"");
        let back: Disambiguator = serde_json::from_str("\"0056\"").unwrap();
        assert_eq!(back, d);
        assert!(serde_json::from_str::<Disambiguator>("\"56\"").is_err());
    }
}
