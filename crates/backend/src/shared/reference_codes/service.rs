use crate::shared::config::ReferenceCodesConfig;
use chrono::NaiveDate;
use contracts::shared::reference_code::nre_number::NRE_PLACEHOLDER;
use contracts::shared::reference_code::sku_code::SKU_PLACEHOLDER;
use contracts::shared::reference_code::{
    build_sku_code, CodeBuilderSession, CodeOutcome, Disambiguator, NreNumberInputs,
    SkuCodeCatalog, SkuCodeInputs,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Запрос предпросмотра номера NRE
///
/// `random_code`: значение, замороженное клиентом для текущей формы.
/// Если его нет, начинается новая сессия.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NrePreviewRequest {
    #[serde(default)]
    pub vendor_org: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub random_code: Option<Disambiguator>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NrePreview {
    pub outcome: CodeOutcome,
    pub display: String,
    pub random_code: Disambiguator,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkuPreview {
    pub outcome: CodeOutcome,
    pub display: String,
    /// Значения, которых нет в справочнике конструктора
    pub unknown_selections: Vec<String>,
}

/// Начать сессию редактирования: выбрать случайную часть номера
pub fn start_session<R: Rng + ?Sized>(rng: &mut R) -> CodeBuilderSession {
    let session = CodeBuilderSession::start(rng);
    tracing::debug!("NRE builder session started, random code {}", session.disambiguator());
    session
}

pub fn preview_nre<R: Rng + ?Sized>(
    config: &ReferenceCodesConfig,
    request: &NrePreviewRequest,
    rng: &mut R,
) -> NrePreview {
    let session = match request.random_code {
        Some(random) => CodeBuilderSession::resume(random),
        None => start_session(rng),
    };

    if !request.vendor_org.is_empty() && !config.org_codes.contains(&request.vendor_org) {
        tracing::warn!(
            "preview_nre: organization '{}' not in org code table, using fallback code",
            request.vendor_org
        );
    }

    let inputs = NreNumberInputs {
        vendor_org: request.vendor_org.clone(),
        date: request.date,
    };
    let outcome = session.nre_number(&inputs, &config.org_codes, config.epoch);

    NrePreview {
        display: outcome.display(NRE_PLACEHOLDER),
        outcome,
        random_code: session.disambiguator(),
    }
}

pub fn preview_sku(catalog: &SkuCodeCatalog, inputs: &SkuCodeInputs) -> SkuPreview {
    let outcome = build_sku_code(inputs);
    let unknown_selections = catalog.unknown_selections(inputs);
    if !unknown_selections.is_empty() {
        tracing::warn!("preview_sku: values outside catalog: {}", unknown_selections.join(", "));
    }

    SkuPreview {
        display: outcome.display(SKU_PLACEHOLDER),
        outcome,
        unknown_selections,
    }
}
