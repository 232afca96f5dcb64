use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Код для организаций, отсутствующих в таблице
pub const UNKNOWN_ORG_CODE: &str = "99";

/// Таблица двузначных кодов организаций для номеров NRE
///
/// Поиск точный и чувствителен к регистру. Каждый код ровно из двух
/// ASCII-цифр, иначе номер NRE не разберётся обратно.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct OrgCodeTable {
    codes: BTreeMap<String, String>,
}

/// Проверка кода организации: две ASCII-цифры
pub fn validate_org_code(org: &str, code: &str) -> Result<(), String> {
    if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!(
            "Organization code for '{}' must be exactly 2 digits: '{}'",
            org, code
        ));
    }
    Ok(())
}

impl OrgCodeTable {
    pub fn new(codes: BTreeMap<String, String>) -> Result<Self, String> {
        for (org, code) in &codes {
            validate_org_code(org, code)?;
        }
        Ok(Self { codes })
    }

    /// Пустая таблица: любой код даёт `99`
    pub fn empty() -> Self {
        Self {
            codes: BTreeMap::new(),
        }
    }

    pub fn with_entry(
        mut self,
        org: impl Into<String>,
        code: impl Into<String>,
    ) -> Result<Self, String> {
        let (org, code) = (org.into(), code.into());
        validate_org_code(&org, &code)?;
        self.codes.insert(org, code);
        Ok(self)
    }

    pub fn lookup(&self, org: &str) -> &str {
        self.codes
            .get(org)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_ORG_CODE)
    }

    pub fn contains(&self, org: &str) -> bool {
        self.codes.contains_key(org)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.codes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for OrgCodeTable {
    fn default() -> Self {
        let codes = [
            ("MTN", "10"),
            ("CBN", "20"),
            ("ASK", "30"),
            ("ATL", "40"),
            ("GPN", "70"),
            ("CAT", "80"),
            ("BDI", "90"),
        ]
        .into_iter()
        .map(|(org, code)| (org.to_string(), code.to_string()))
        .collect();
        Self { codes }
    }
}

impl TryFrom<BTreeMap<String, String>> for OrgCodeTable {
    type Error = String;

    fn try_from(codes: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        Self::new(codes)
    }
}

impl From<OrgCodeTable> for BTreeMap<String, String> {
    fn from(table: OrgCodeTable) -> Self {
        table.codes
    }
}
