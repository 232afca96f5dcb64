//! Генератор справочных номеров документов
//!
//! Два шаблона одного вида «категории + дата + случайная часть»:
//! - номер NRE-бюджета: `NRE-[орг 2][дни от эпохи 4][случайные 4]`
//! - код SKU: `MNQ1525-30W-U[-T][(A1)]`
//!
//! Функции чистые: таблицы кодов и замороженная случайная часть
//! передаются вызывающей стороной.

pub mod disambiguator;
pub mod epoch;
pub mod nre_number;
pub mod org_codes;
pub mod session;
pub mod sku_code;

pub use disambiguator::Disambiguator;
pub use epoch::{epoch_days, format_epoch_days, REFERENCE_EPOCH};
pub use nre_number::{build_nre_number, parse_nre_number, NreNumberInputs, NreNumberParts};
pub use org_codes::{OrgCodeTable, UNKNOWN_ORG_CODE};
pub use session::CodeBuilderSession;
pub use sku_code::{build_sku_code, CatalogOption, SkuCodeCatalog, SkuCodeInputs};

use serde::{Deserialize, Serialize};

/// Результат построения кода
///
/// Незаполненные обязательные поля: штатная ситуация во время ввода формы,
/// поэтому это не ошибка, а отдельный вариант.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CodeOutcome {
    Ready { code: String },
    Incomplete { missing: Vec<String> },
}

impl CodeOutcome {
    pub fn ready(code: impl Into<String>) -> Self {
        CodeOutcome::Ready { code: code.into() }
    }

    pub fn incomplete(missing: &[&str]) -> Self {
        CodeOutcome::Incomplete {
            missing: missing.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, CodeOutcome::Ready { .. })
    }

    /// Готовый код, если все обязательные поля заполнены
    pub fn code(&self) -> Option<&str> {
        match self {
            CodeOutcome::Ready { code } => Some(code),
            CodeOutcome::Incomplete { .. } => None,
        }
    }

    /// Текст для предпросмотра: код или подсказка
    pub fn display(&self, placeholder: &str) -> String {
        match self {
            CodeOutcome::Ready { code } => code.clone(),
            CodeOutcome::Incomplete { .. } => placeholder.to_string(),
        }
    }
}
