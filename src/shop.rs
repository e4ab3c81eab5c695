//! Shop stock. Purchases themselves live with the caller; the core tracks
//! stock and restores it to the daily limit at day rollover.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopItem {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub stock: u32,
    pub daily_limit: u32,
}

impl ShopItem {
    pub fn new(id: &str, name: &str, price: u64, daily_limit: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            stock: daily_limit,
            daily_limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Shop {
    pub items: Vec<ShopItem>,
}

impl Shop {
    pub fn new(items: Vec<ShopItem>) -> Self {
        Self { items }
    }

    /// Default stock list for a fresh game.
    pub fn default_stock() -> Self {
        Self::new(vec![
            ShopItem::new("enhance_stone", "Enhancement Stone", 120, 10),
            ShopItem::new("protection_charm", "Protection Charm", 800, 2),
            ShopItem::new("iron_normal", "Iron", 30, 20),
            ShopItem::new("timber_normal", "Timber", 20, 20),
            ShopItem::new("hide_normal", "Hide", 25, 20),
        ])
    }

    pub fn get(&self, id: &str) -> Option<&ShopItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut ShopItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// Day rollover: every item's stock returns to its daily limit.
    pub fn restock(&mut self) {
        for item in &mut self.items {
            item.stock = item.daily_limit;
        }
    }
}
