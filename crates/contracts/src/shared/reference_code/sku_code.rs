use super::CodeOutcome;
use serde::{Deserialize, Serialize};

/// Подсказка вместо кода, пока не заполнены обязательные поля
pub const SKU_PLACEHOLDER: &str = "Select options above to generate SKU";

/// Поля конструктора SKU
///
/// Формат: `[бренд][тип][модель][год][вариант]-[регион][цвет]-[зарядка][-оператор][(подкод)]`,
/// например `MNQ1525-30W-U-T`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuCodeInputs {
    pub brand: String,
    pub product_type: String,
    pub model_number: String,
    pub model_year: String,
    #[serde(default)]
    pub variant: Option<String>,
    pub region: String,
    pub color: String,
    pub charger: String,
    #[serde(default)]
    pub carrier: Option<String>,
    #[serde(default)]
    pub sub_code: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Построить код SKU из выбранных значений
pub fn build_sku_code(inputs: &SkuCodeInputs) -> CodeOutcome {
    let required = [
        ("brand", &inputs.brand),
        ("product_type", &inputs.product_type),
        ("model_number", &inputs.model_number),
        ("model_year", &inputs.model_year),
        ("region", &inputs.region),
        ("color", &inputs.color),
        ("charger", &inputs.charger),
    ];
    let missing: Vec<&str> = required
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return CodeOutcome::incomplete(&missing);
    }

    let mut code = format!(
        "{}{}{}{}{}-{}{}-{}",
        inputs.brand,
        inputs.product_type,
        inputs.model_number,
        inputs.model_year,
        present(&inputs.variant).unwrap_or_default(),
        inputs.region,
        inputs.color,
        inputs.charger,
    );
    if let Some(carrier) = present(&inputs.carrier) {
        code.push('-');
        code.push_str(carrier);
    }
    if let Some(sub_code) = present(&inputs.sub_code) {
        code.push('(');
        code.push_str(sub_code);
        code.push(')');
    }

    CodeOutcome::ready(code)
}

/// Вариант выбора в списке конструктора
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogOption {
    pub code: String,
    pub name: String,
}

impl CatalogOption {
    fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }
}

/// Справочник значений для конструктора SKU
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuCodeCatalog {
    pub brands: Vec<CatalogOption>,
    pub product_types: Vec<CatalogOption>,
    pub regions: Vec<CatalogOption>,
    pub colors: Vec<CatalogOption>,
    pub chargers: Vec<CatalogOption>,
    pub carriers: Vec<CatalogOption>,
}

impl SkuCodeCatalog {
    /// Проверить, что выбранные коды есть в справочнике
    ///
    /// Возвращает список полей с неизвестными значениями. Пустые поля
    /// не проверяются, для них есть [`build_sku_code`].
    pub fn unknown_selections(&self, inputs: &SkuCodeInputs) -> Vec<String> {
        fn known(options: &[CatalogOption], value: &str) -> bool {
            value.is_empty() || options.iter().any(|o| o.code == value)
        }

        let mut unknown = Vec::new();
        let checks = [
            ("brand", &self.brands, inputs.brand.as_str()),
            ("product_type", &self.product_types, inputs.product_type.as_str()),
            ("region", &self.regions, inputs.region.as_str()),
            ("color", &self.colors, inputs.color.as_str()),
            ("charger", &self.chargers, inputs.charger.as_str()),
            ("carrier", &self.carriers, inputs.carrier.as_deref().unwrap_or("")),
        ];
        for (field, options, value) in checks {
            if !known(options, value) {
                unknown.push(format!("{}: '{}'", field, value));
            }
        }
        unknown
    }
}

impl Default for SkuCodeCatalog {
    fn default() -> Self {
        Self {
            brands: vec![
                CatalogOption::new("MN", "Motorola"),
                CatalogOption::new("BDI", "Boundless Devices"),
                CatalogOption::new("CU", "Custom"),
            ],
            product_types: vec![
                CatalogOption::new("B", "Bridge"),
                CatalogOption::new("G", "Gateway"),
                CatalogOption::new("Q", "Router/Wifi"),
                CatalogOption::new("F", "FWA"),
                CatalogOption::new("P", "HotSpot"),
                CatalogOption::new("X", "PON"),
                CatalogOption::new("A", "Accessories"),
                CatalogOption::new("R", "Red Cap"),
            ],
            regions: vec![
                CatalogOption::new("30", "Local (30)"),
                CatalogOption::new("80", "Global (80)"),
            ],
            colors: vec![
                CatalogOption::new("W", "White"),
                CatalogOption::new("B", "Black"),
            ],
            chargers: vec![
                CatalogOption::new("U", "US Plug"),
                CatalogOption::new("K", "UK Plug"),
                CatalogOption::new("E", "EU Plug"),
                CatalogOption::new("A", "ANZ Plug"),
                CatalogOption::new("C", "China Plug"),
                CatalogOption::new("J", "Japan Plug"),
                CatalogOption::new("B", "Brazil Plug"),
                CatalogOption::new("N", "No Charger"),
            ],
            carriers: vec![
                CatalogOption::new("T", "T-Mobile"),
                CatalogOption::new("U", "Universal"),
                CatalogOption::new("V", "Verizon"),
                CatalogOption::new("E", "Europe"),
                CatalogOption::new("A", "AT&T"),
            ],
        }
    }
}
