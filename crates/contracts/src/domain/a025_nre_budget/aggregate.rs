use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор NRE-бюджета
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NreBudgetId(pub Uuid);

impl NreBudgetId {
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

impl AggregateId for NreBudgetId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(NreBudgetId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Справочники
// ============================================================================

/// Категории затрат NRE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NreCategory {
    NreGeneral,
    NreDesign,
    Tooling,
    Samples,
    Certifications,
    FieldTesting,
    OdmSetup,
    Firmware,
    ApplicationSoftware,
    LogisticsSamples,
    WarrantyReliability,
    #[serde(rename = "DEVOPS")]
    DevOps,
    NreFw,
    NreSpecialProject,
    NreWeekly,
    NreIosAndroid,
    NreQaTest,
    NreProjectMgt,
    Others,
    Custom,
}

impl NreCategory {
    pub fn code(&self) -> &'static str {
        match self {
            NreCategory::NreGeneral => "NRE_GENERAL",
            NreCategory::NreDesign => "NRE_DESIGN",
            NreCategory::Tooling => "TOOLING",
            NreCategory::Samples => "SAMPLES",
            NreCategory::Certifications => "CERTIFICATIONS",
            NreCategory::FieldTesting => "FIELD_TESTING",
            NreCategory::OdmSetup => "ODM_SETUP",
            NreCategory::Firmware => "FIRMWARE",
            NreCategory::ApplicationSoftware => "APPLICATION_SOFTWARE",
            NreCategory::LogisticsSamples => "LOGISTICS_SAMPLES",
            NreCategory::WarrantyReliability => "WARRANTY_RELIABILITY",
            NreCategory::DevOps => "DEVOPS",
            NreCategory::NreFw => "NRE_FW",
            NreCategory::NreSpecialProject => "NRE_SPECIAL_PROJECT",
            NreCategory::NreWeekly => "NRE_WEEKLY",
            NreCategory::NreIosAndroid => "NRE_IOS_ANDROID",
            NreCategory::NreQaTest => "NRE_QA_TEST",
            NreCategory::NreProjectMgt => "NRE_PROJECT_MGT",
            NreCategory::Others => "OTHERS",
            NreCategory::Custom => "CUSTOM",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            NreCategory::NreGeneral => "NRE (General)",
            NreCategory::NreDesign => "NRE Design",
            NreCategory::Tooling => "Tooling",
            NreCategory::Samples => "Samples (EVT/DVT/PVT)",
            NreCategory::Certifications => "Certifications",
            NreCategory::FieldTesting => "Field Testing",
            NreCategory::OdmSetup => "ODM Setup",
            NreCategory::Firmware => "Firmware",
            NreCategory::ApplicationSoftware => "Application Software",
            NreCategory::LogisticsSamples => "Logistics Samples",
            NreCategory::WarrantyReliability => "Warranty / Reliability",
            NreCategory::DevOps => "DevOps",
            NreCategory::NreFw => "NRE (FW)",
            NreCategory::NreSpecialProject => "NRE (Special Project)",
            NreCategory::NreWeekly => "NRE (Weekly)",
            NreCategory::NreIosAndroid => "NRE (iOS/Android)",
            NreCategory::NreQaTest => "NRE (QA Test)",
            NreCategory::NreProjectMgt => "NRE (Project Mgt)",
            NreCategory::Others => "Others",
            NreCategory::Custom => "Custom (Enter Below)",
        }
    }

    pub fn all() -> Vec<NreCategory> {
        vec![
            NreCategory::NreGeneral,
            NreCategory::NreDesign,
            NreCategory::Tooling,
            NreCategory::Samples,
            NreCategory::Certifications,
            NreCategory::FieldTesting,
            NreCategory::OdmSetup,
            NreCategory::Firmware,
            NreCategory::ApplicationSoftware,
            NreCategory::LogisticsSamples,
            NreCategory::WarrantyReliability,
            NreCategory::DevOps,
            NreCategory::NreFw,
            NreCategory::NreSpecialProject,
            NreCategory::NreWeekly,
            NreCategory::NreIosAndroid,
            NreCategory::NreQaTest,
            NreCategory::NreProjectMgt,
            NreCategory::Others,
            NreCategory::Custom,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

/// Статус оплаты бюджета
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    NotPaid,
    PartiallyPaid,
    Paid,
    /// Есть неоплаченный платёж с прошедшей датой
    Overdue,
}

impl PaymentStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentStatus::NotPaid => "Not Paid",
            PaymentStatus::PartiallyPaid => "Partially Paid",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Overdue => "Overdue",
        }
    }
}

/// Состояние отдельного платежа на заданную дату
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentState {
    Paid,
    Overdue,
    Pending,
}

impl PaymentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentState::Paid => "PAID",
            PaymentState::Overdue => "OVERDUE",
            PaymentState::Pending => "PENDING",
        }
    }
}

// ============================================================================
// Строки бюджета
// ============================================================================

/// Строка затрат NRE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NreLineItem {
    pub line_item_number: u32,
    pub description: String,
    /// Код категории (`NreCategory::code`) или произвольное название
    pub category: String,
    #[serde(default)]
    pub custom_category: Option<String>,
    pub quantity: f64,
    pub unit_price: f64,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NreLineItem {
    pub fn new(line_item_number: u32) -> Self {
        Self {
            line_item_number,
            description: String::new(),
            category: NreCategory::Others.code().to_string(),
            custom_category: None,
            quantity: 1.0,
            unit_price: 0.0,
            total_amount: 0.0,
            notes: None,
        }
    }

    pub fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
        self.recalculate();
    }

    pub fn set_unit_price(&mut self, unit_price: f64) {
        self.unit_price = unit_price;
        self.recalculate();
    }

    pub fn recalculate(&mut self) {
        self.total_amount = self.quantity * self.unit_price;
    }

    /// Категория для сохранения: `CUSTOM` заменяется введённым названием
    pub fn resolved_category(&self) -> String {
        match self.custom_category.as_deref() {
            Some(custom) if self.category == NreCategory::Custom.code() && !custom.is_empty() => {
                custom.to_string()
            }
            _ => self.category.clone(),
        }
    }
}

/// Плановый платёж по бюджету
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLineItem {
    pub payment_number: u32,
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
    pub amount: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_paid: bool,
}

impl PaymentLineItem {
    pub fn new(payment_number: u32) -> Self {
        Self {
            payment_number,
            payment_date: None,
            amount: 0.0,
            notes: None,
            is_paid: false,
        }
    }

    /// Оплачен / просрочен / ожидается относительно `today`
    pub fn state(&self, today: NaiveDate) -> PaymentState {
        if self.is_paid {
            return PaymentState::Paid;
        }
        match self.payment_date {
            Some(date) if date < today => PaymentState::Overdue,
            _ => PaymentState::Pending,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// NRE-бюджет (котировка поставщика на разовые инженерные работы)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NreBudget {
    #[serde(flatten)]
    pub base: BaseAggregate<NreBudgetId>,

    pub vendor_name: String,
    pub project_name: Option<String>,
    pub sku_code: String,
    pub sku_name: Option<String>,
    pub quote_number: String,
    pub quote_date: Option<NaiveDate>,
    pub payment_terms: Option<String>,
    pub payment_status: PaymentStatus,
    pub payment_date: Option<NaiveDate>,
    pub line_items: Vec<NreLineItem>,
    pub payment_line_items: Vec<PaymentLineItem>,
    pub total_amount: f64,
}

/// Данные формы создания/редактирования бюджета
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NreBudgetDto {
    pub id: Option<String>,
    pub nre_reference_number: String,
    pub vendor_name: String,
    pub project_name: Option<String>,
    pub sku_code: String,
    pub sku_name: Option<String>,
    pub quote_number: String,
    pub quote_date: Option<NaiveDate>,
    pub payment_terms: Option<String>,
    pub payment_status: PaymentStatus,
    pub payment_date: Option<NaiveDate>,
    pub line_items: Vec<NreLineItem>,
    pub payment_line_items: Vec<PaymentLineItem>,
    pub comment: Option<String>,
}

impl NreBudget {
    /// Создать бюджет из DTO: категории нормализуются, суммы пересчитываются
    pub fn from_dto(dto: &NreBudgetDto) -> Result<Self, String> {
        let id = match dto.id.as_deref().filter(|s| !s.is_empty()) {
            Some(s) => NreBudgetId::from_string(s)?,
            None => NreBudgetId::new_v4(),
        };

        let mut base = BaseAggregate::new(
            id,
            dto.nre_reference_number.clone(),
            Self::describe(&dto.vendor_name, dto.project_name.as_deref()),
        );
        base.comment = dto.comment.clone();

        let mut budget = Self {
            base,
            vendor_name: dto.vendor_name.clone(),
            project_name: dto.project_name.clone(),
            sku_code: dto.sku_code.clone(),
            sku_name: dto.sku_name.clone(),
            quote_number: dto.quote_number.clone(),
            quote_date: dto.quote_date,
            payment_terms: dto.payment_terms.clone(),
            payment_status: dto.payment_status,
            payment_date: dto.payment_date,
            line_items: dto.line_items.clone(),
            payment_line_items: dto.payment_line_items.clone(),
            total_amount: 0.0,
        };
        budget.normalize();
        Ok(budget)
    }

    fn describe(vendor_name: &str, project_name: Option<&str>) -> String {
        match project_name.filter(|p| !p.is_empty()) {
            Some(project) => format!("{} / {}", vendor_name, project),
            None => vendor_name.to_string(),
        }
    }

    /// Пересчитать строки и итог, подставить пользовательские категории
    pub fn normalize(&mut self) {
        for item in &mut self.line_items {
            item.recalculate();
            item.category = item.resolved_category();
            item.custom_category = None;
        }
        self.recalculate_total();
    }

    pub fn nre_reference_number(&self) -> &str {
        &self.base.code
    }

    pub fn grand_total(&self) -> f64 {
        self.line_items.iter().map(|item| item.total_amount).sum()
    }

    /// Сумма всех платежей графика
    pub fn scheduled_total(&self) -> f64 {
        self.payment_line_items.iter().map(|p| p.amount).sum()
    }

    /// Сумма платежей, отмеченных как оплаченные
    pub fn paid_amount(&self) -> f64 {
        self.payment_line_items
            .iter()
            .filter(|p| p.is_paid)
            .map(|p| p.amount)
            .sum()
    }

    /// Статус оплаты по графику платежей на дату `today`
    ///
    /// Просрочка важнее остальных статусов. Иначе оплаченная сумма
    /// сравнивается с суммой графика; пустой график не считается оплаченным.
    pub fn derived_payment_status(&self, today: NaiveDate) -> PaymentStatus {
        let overdue = self
            .payment_line_items
            .iter()
            .any(|p| p.state(today) == PaymentState::Overdue);
        if overdue {
            return PaymentStatus::Overdue;
        }

        let scheduled = self.scheduled_total();
        let paid = self.paid_amount();
        if scheduled > 0.0 && paid >= scheduled {
            PaymentStatus::Paid
        } else if paid > 0.0 {
            PaymentStatus::PartiallyPaid
        } else {
            PaymentStatus::NotPaid
        }
    }

    /// Статус оплаты относительно итога бюджета (для аналитики)
    pub fn settlement_status(&self) -> PaymentStatus {
        let paid = self.paid_amount();
        if paid >= self.total_amount {
            PaymentStatus::Paid
        } else if paid > 0.0 {
            PaymentStatus::PartiallyPaid
        } else {
            PaymentStatus::NotPaid
        }
    }

    /// Дата первого платежа, у которого она указана
    pub fn first_payment_date(&self) -> Option<NaiveDate> {
        self.payment_line_items.iter().find_map(|p| p.payment_date)
    }

    pub fn recalculate_total(&mut self) {
        self.total_amount = self.grand_total();
    }

    /// Добавить пустую строку затрат, номер = количество строк + 1
    pub fn add_line_item(&mut self) -> &mut NreLineItem {
        let number = self.line_items.len() as u32 + 1;
        self.line_items.push(NreLineItem::new(number));
        let last = self.line_items.len() - 1;
        &mut self.line_items[last]
    }

    /// Удалить строку по позиции (номера оставшихся строк не меняются)
    pub fn remove_line_item(&mut self, index: usize) -> Option<NreLineItem> {
        if index >= self.line_items.len() {
            return None;
        }
        let removed = self.line_items.remove(index);
        self.recalculate_total();
        Some(removed)
    }

    pub fn add_payment_line_item(&mut self) -> &mut PaymentLineItem {
        let number = self.payment_line_items.len() as u32 + 1;
        self.payment_line_items.push(PaymentLineItem::new(number));
        let last = self.payment_line_items.len() - 1;
        &mut self.payment_line_items[last]
    }

    pub fn remove_payment_line_item(&mut self, index: usize) -> Option<PaymentLineItem> {
        if index >= self.payment_line_items.len() {
            return None;
        }
        Some(self.payment_line_items.remove(index))
    }

    /// Список незаполненных обязательных полей для отправки формы
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();

        if self.vendor_name.trim().is_empty() {
            missing.push("Vendor Name".to_string());
        }
        if self.sku_code.trim().is_empty() {
            missing.push("SKU Code (select from dropdown or enter manually)".to_string());
        }
        if self.quote_number.trim().is_empty() {
            missing.push("Quote Number".to_string());
        }
        if self.line_items.is_empty() {
            missing.push("At least one Line Item".to_string());
        }

        for item in &self.line_items {
            let n = item.line_item_number;
            if item.description.trim().is_empty() {
                missing.push(format!("Line Item #{}: Description", n));
            }
            if item.category.is_empty() {
                missing.push(format!("Line Item #{}: Category", n));
            }
            if item.unit_price <= 0.0 {
                missing.push(format!("Line Item #{}: Unit Price (must be greater than 0)", n));
            }
        }

        for payment in &self.payment_line_items {
            let n = payment.payment_number;
            if payment.payment_date.is_none() {
                missing.push(format!("Payment #{}: Payment Date", n));
            }
            if payment.amount <= 0.0 {
                missing.push(format!("Payment #{}: Amount (must be greater than 0)", n));
            }
        }

        missing
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!("Please fill in the required fields: {}", missing.join(", ")))
        }
    }
}

impl AggregateRoot for NreBudget {
    type Id = NreBudgetId;

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
        "a025"
    }

    fn collection_name() -> &'static str {
        "nre_budget"
    }

    fn element_name() -> &'static str {
        "NRE Budget"
    }

    fn list_name() -> &'static str {
        "NRE Budgets"
    }
}
