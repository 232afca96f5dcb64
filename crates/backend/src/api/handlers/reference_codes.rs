use axum::Json;
use contracts::shared::reference_code::{
    CodeBuilderSession, OrgCodeTable, SkuCodeCatalog, SkuCodeInputs,
};

use crate::shared::config;
use crate::shared::reference_codes::service::{self, NrePreview, NrePreviewRequest, SkuPreview};

/// GET /api/reference-codes/org-codes
pub async fn org_codes() -> Json<OrgCodeTable> {
    Json(config::get().reference_codes.org_codes.clone())
}

/// POST /api/reference-codes/nre/session
///
/// Новая сессия формы: клиент хранит `random` до сброса формы.
pub async fn start_nre_session() -> Json<CodeBuilderSession> {
    let session = {
        let mut rng = rand::thread_rng();
        service::start_session(&mut rng)
    };
    Json(session)
}

/// POST /api/reference-codes/nre/preview
pub async fn preview_nre(Json(request): Json<NrePreviewRequest>) -> Json<NrePreview> {
    let preview = {
        let mut rng = rand::thread_rng();
        service::preview_nre(&config::get().reference_codes, &request, &mut rng)
    };
    Json(preview)
}

/// GET /api/reference-codes/sku/options
pub async fn sku_options() -> Json<SkuCodeCatalog> {
    Json(SkuCodeCatalog::default())
}

/// POST /api/reference-codes/sku/preview
pub async fn preview_sku(Json(inputs): Json<SkuCodeInputs>) -> Json<SkuPreview> {
    Json(service::preview_sku(&SkuCodeCatalog::default(), &inputs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::shared::reference_code::{CodeOutcome, Disambiguator};

    #[tokio::test]
    async fn test_org_codes() {
        let Json(table) = org_codes().await;
        assert_eq!(table.lookup("MTN"), "10");
        assert_eq!(table.lookup("BDI"), "90");
    }

    #[tokio::test]
    async fn test_session_then_preview() {
        let Json(session) = start_nre_session().await;
        let request = NrePreviewRequest {
            vendor_org: "CAT".into(),
            date: NaiveDate::from_ymd_opt(2025, 9, 28),
            random_code: Some(session.disambiguator()),
        };
        let Json(preview) = preview_nre(Json(request)).await;
        assert_eq!(
            preview.outcome,
            CodeOutcome::Ready {
                code: format!("NRE-800270{}", session.disambiguator())
            }
        );
    }

    #[tokio::test]
    async fn test_preview_incomplete() {
        let request = NrePreviewRequest {
            vendor_org: "MTN".into(),
            date: None,
            random_code: Some(Disambiguator::from_value(7).unwrap()),
        };
        let Json(preview) = preview_nre(Json(request)).await;
        assert_eq!(
            preview.outcome,
            CodeOutcome::Incomplete {
                missing: vec!["date".into()]
            }
        );
        assert_eq!(preview.random_code.as_string(), "0007");
    }

    #[tokio::test]
    async fn test_sku_preview_with_sub_code() {
        let inputs = SkuCodeInputs {
            brand: "MN".into(),
            product_type: "Q".into(),
            model_number: "15".into(),
            model_year: "25".into(),
            region: "30".into(),
            color: "W".into(),
            charger: "U".into(),
            sub_code: Some("A".into()),
            ..SkuCodeInputs::default()
        };
        let Json(preview) = preview_sku(Json(inputs)).await;
        assert_eq!(preview.display, "MNQ1525-30W-U(A)");

        let Json(catalog) = sku_options().await;
        assert!(!catalog.brands.is_empty());
    }
}
