use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::cost_rollup::{CostRollup, CostWorksheet};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор сценария
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkuScenarioId(pub Uuid);

impl SkuScenarioId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for SkuScenarioId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SkuScenarioId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Каналы продаж
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelGroup {
    /// Direct to Consumer
    D2C,
    /// Business to Business
    B2B,
}

/// Стандартные каналы продаж (можно указать и произвольный канал)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesChannel {
    AmazonFba,
    Shopify,
    BestBuyDirect,
    CostcoDirect,
    WalmartDirect,
    Tekpoint,
    Emg,
}

impl SalesChannel {
    pub fn code(&self) -> &'static str {
        match self {
            SalesChannel::AmazonFba => "amazon_fba",
            SalesChannel::Shopify => "shopify",
            SalesChannel::BestBuyDirect => "best_buy_direct",
            SalesChannel::CostcoDirect => "costco_direct",
            SalesChannel::WalmartDirect => "walmart_direct",
            SalesChannel::Tekpoint => "tekpoint",
            SalesChannel::Emg => "emg",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SalesChannel::AmazonFba => "Amazon (FBA)",
            SalesChannel::Shopify => "Shopify",
            SalesChannel::BestBuyDirect => "Best Buy (Direct)",
            SalesChannel::CostcoDirect => "Costco (Direct)",
            SalesChannel::WalmartDirect => "Walmart (Direct)",
            SalesChannel::Tekpoint => "Tekpoint (Distributor)",
            SalesChannel::Emg => "EMG (Distributor)",
        }
    }

    pub fn group(&self) -> ChannelGroup {
        match self {
            SalesChannel::AmazonFba | SalesChannel::Shopify => ChannelGroup::D2C,
            _ => ChannelGroup::B2B,
        }
    }

    pub fn all() -> Vec<SalesChannel> {
        vec![
            SalesChannel::AmazonFba,
            SalesChannel::Shopify,
            SalesChannel::BestBuyDirect,
            SalesChannel::CostcoDirect,
            SalesChannel::WalmartDirect,
            SalesChannel::Tekpoint,
            SalesChannel::Emg,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Сценарий расчёта себестоимости и маржи SKU
///
/// `rollup`: снимок расчёта на момент последнего изменения листа,
/// напрямую не редактируется. При десериализации пересчитывается из листа,
/// присланный снимок игнорируется.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "StoredScenario")]
pub struct SkuFinancialScenario {
    #[serde(flatten)]
    pub base: BaseAggregate<SkuScenarioId>,

    pub sku_name: String,
    /// Код [`SalesChannel`] или название пользовательского канала
    pub channel: String,
    pub country_code: String,
    pub is_template: bool,
    worksheet: CostWorksheet,
    rollup: CostRollup,
}

/// Сохранённый сценарий без производных полей
#[derive(Deserialize)]
struct StoredScenario {
    #[serde(flatten)]
    base: BaseAggregate<SkuScenarioId>,
    sku_name: String,
    channel: String,
    country_code: String,
    is_template: bool,
    worksheet: CostWorksheet,
}

impl From<StoredScenario> for SkuFinancialScenario {
    fn from(stored: StoredScenario) -> Self {
        Self {
            base: stored.base,
            sku_name: stored.sku_name,
            channel: stored.channel,
            country_code: stored.country_code,
            is_template: stored.is_template,
            rollup: CostRollup::compute(&stored.worksheet),
            worksheet: stored.worksheet,
        }
    }
}

/// Данные формы сценария
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkuScenarioDto {
    pub id: Option<String>,
    pub scenario_name: String,
    pub description: Option<String>,
    pub sku_name: String,
    pub channel: String,
    pub country_code: String,
    pub is_template: bool,
    pub worksheet: CostWorksheet,
}

impl SkuFinancialScenario {
    pub fn from_dto(dto: &SkuScenarioDto) -> Result<Self, String> {
        let id = match dto.id.as_deref().filter(|s| !s.is_empty()) {
            Some(s) => SkuScenarioId::from_string(s)?,
            None => SkuScenarioId::new_v4(),
        };

        let mut base = BaseAggregate::new(id, dto.scenario_name.clone(), dto.scenario_name.clone());
        base.comment = dto.description.clone();

        Ok(Self {
            base,
            sku_name: dto.sku_name.clone(),
            channel: dto.channel.clone(),
            country_code: dto.country_code.trim().to_uppercase(),
            is_template: dto.is_template,
            rollup: CostRollup::compute(&dto.worksheet),
            worksheet: dto.worksheet.clone(),
        })
    }

    pub fn scenario_name(&self) -> &str {
        &self.base.code
    }

    pub fn worksheet(&self) -> &CostWorksheet {
        &self.worksheet
    }

    pub fn rollup(&self) -> &CostRollup {
        &self.rollup
    }

    /// Заменить лист и пересчитать показатели
    pub fn set_worksheet(&mut self, worksheet: CostWorksheet) {
        self.rollup = CostRollup::compute(&worksheet);
        self.worksheet = worksheet;
        self.base.touch();
    }

    /// Изменить лист на месте и пересчитать показатели
    pub fn edit_worksheet<F: FnOnce(&mut CostWorksheet)>(&mut self, edit: F) {
        edit(&mut self.worksheet);
        self.rollup = CostRollup::compute(&self.worksheet);
        self.base.touch();
    }

    pub fn standard_channel(&self) -> Option<SalesChannel> {
        SalesChannel::from_code(&self.channel)
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Scenario name is required".into());
        }
        if self.sku_name.trim().is_empty() {
            return Err("SKU name is required".into());
        }
        if self.channel.trim().is_empty() {
            return Err("Channel is required".into());
        }
        let len = self.country_code.chars().count();
        if !(len == 2 || len == 3) || !self.country_code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!(
                "Country code must be 2 or 3 letters: '{}'",
                self.country_code
            ));
        }
        Ok(())
    }
}

impl AggregateRoot for SkuFinancialScenario {
    type Id = SkuScenarioId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a026"
    }

    fn collection_name() -> &'static str {
        "sku_scenario"
    }

    fn element_name() -> &'static str {
        "SKU Financial Scenario"
    }

    fn list_name() -> &'static str {
        "SKU Financial Scenarios"
    }
}
