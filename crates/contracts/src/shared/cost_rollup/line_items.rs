use serde::{Deserialize, Serialize};

/// Произвольная строка затрат ("Other product costs", "Other CoGS")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLineItem {
    pub label: String,
    pub amount: f64,
}

impl CostLineItem {
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Упорядоченный список строк затрат
///
/// Строки адресуются позицией, стабильных идентификаторов нет.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItems {
    items: Vec<CostLineItem>,
}

impl LineItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить строку в конец, вернуть её позицию
    pub fn push(&mut self, item: CostLineItem) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    pub fn set_label(&mut self, index: usize, label: impl Into<String>) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.label = label.into();
                true
            }
            None => false,
        }
    }

    pub fn set_amount(&mut self, index: usize, amount: f64) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.amount = amount;
                true
            }
            None => false,
        }
    }

    /// Удалить строку; последующие сдвигаются на одну позицию
    pub fn remove(&mut self, index: usize) -> Option<CostLineItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&CostLineItem> {
        self.items.get(index)
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.amount).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CostLineItem> {
        self.items.iter()
    }
}

impl From<Vec<CostLineItem>> for LineItems {
    fn from(items: Vec<CostLineItem>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_update_remove() {
        let mut items = LineItems::new();
        assert_eq!(items.push(CostLineItem::new("Packaging", 1.5)), 0);
        assert_eq!(items.push(CostLineItem::new("Manual", 0.25)), 1);
        assert_eq!(items.total(), 1.75);

        assert!(items.set_amount(1, 0.5));
        assert!(items.set_label(0, "Box"));
        assert_eq!(items.get(0).unwrap().label, "Box");
        assert_eq!(items.total(), 2.0);

        let removed = items.remove(0).unwrap();
        assert_eq!(removed.label, "Box");
        assert_eq!(items.len(), 1);
        assert_eq!(items.get(0).unwrap().label, "Manual");
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut items = LineItems::from(vec![CostLineItem::new("A", 1.0)]);
        assert!(!items.set_amount(3, 9.0));
        assert!(!items.set_label(3, "X"));
        assert!(items.remove(3).is_none());
        assert_eq!(items.total(), 1.0);
    }

    #[test]
    fn test_negative_amounts_are_credits() {
        let items = LineItems::from(vec![
            CostLineItem::new("Cost", 5.0),
            CostLineItem::new("Credit", -2.0),
        ]);
        assert_eq!(items.total(), 3.0);
    }

    #[test]
    fn test_serializes_as_array() {
        let items = LineItems::from(vec![CostLineItem::new("A", 1.0)]);
        let json = serde_json::to_string(&items).unwrap();
        assert_eq!(json, r#"[{"label":"A","amount":1.0}]"#);
    }
}
