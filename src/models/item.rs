use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,    // Unique ID for the item
    pub qty: u32,      // Quantity ordered
    pub name: String,  // Item name
    pub price: f64,    // Unit price in dollars
    pub image: String, // Product image URL
}

impl Item {
    pub fn new(id: &str, qty: u32, name: &str, price: f64, image: &str) -> Self {
        Item {
            id: id.to_string(),
            qty,
            name: name.to_string(),
            price,
            image: image.to_string(),
        }
    }

    /// Price formatted the way the UI shows it, e.g. "$3.15".
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// The fixed catalog of purchasable items. Defined at startup, never mutated.
pub fn catalog() -> Vec<Item> {
    vec![
        Item::new(
            "cap-001",
            1,
            "Cappuccino",
            3.15,
            "https://images.unsplash.com/photo-1504754524776-8f4f37790ca0?q=80&w=600&auto=format&fit=crop",
        ),
        Item::new(
            "mal-002",
            1,
            "Milkshake",
            3.10,
            "https://images.unsplash.com/photo-1460306855393-0410f61241c7?q=80&w=600&auto=format&fit=crop",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_non_empty_with_unique_ids() {
        let items = catalog();
        assert!(!items.is_empty());
        let mut ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn price_label_has_two_decimals() {
        let item = Item::new("x", 1, "Espresso", 2.5, "");
        assert_eq!(item.price_label(), "$2.50");
    }
}
