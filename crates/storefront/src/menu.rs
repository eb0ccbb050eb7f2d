//! The menu catalogue.
//!
//! A fixed set of dishes served from memory. Orders never reference these
//! entries directly; checkout snapshots the item into the order record so
//! history is unaffected by menu edits.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde::Serialize;

use quickbite_core::ItemId;

/// A dish on the menu.
#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    /// Stable handle, used in checkout requests.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Unit price in Naira.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Image URL.
    pub image: String,
}

static MENU: LazyLock<Vec<MenuItem>> = LazyLock::new(|| {
    vec![
        MenuItem {
            id: ItemId::from("jollof-rice"),
            name: "Jollof Rice".to_owned(),
            description: "Delicious West African rice dish cooked with tomatoes, peppers, and spices".to_owned(),
            price: Decimal::from(1500),
            image: "https://images.unsplash.com/photo-1633321702518-7feccafb94d5?q=80&w=1974&auto=format&fit=crop".to_owned(),
        },
        MenuItem {
            id: ItemId::from("beef-burger"),
            name: "Beef Burger".to_owned(),
            description: "Juicy beef patty with fresh vegetables and special sauce".to_owned(),
            price: Decimal::from(2000),
            image: "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?q=80&w=1899&auto=format&fit=crop".to_owned(),
        },
        MenuItem {
            id: ItemId::from("chicken-suya"),
            name: "Chicken Suya".to_owned(),
            description: "Grilled chicken skewers marinated in spicy peanut mix".to_owned(),
            price: Decimal::from(1800),
            image: "https://images.unsplash.com/photo-1626804475297-41608ea09aeb?q=80&w=2070&auto=format&fit=crop".to_owned(),
        },
    ]
});

/// All menu items.
#[must_use]
pub fn items() -> &'static [MenuItem] {
    &MENU
}

/// Look up a menu item by its handle.
#[must_use]
pub fn find(id: &ItemId) -> Option<&'static MenuItem> {
    MENU.iter().find(|item| &item.id == id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_has_three_dishes() {
        assert_eq!(items().len(), 3);
    }

    #[test]
    fn test_find_known_item() {
        let item = find(&ItemId::from("jollof-rice")).unwrap();
        assert_eq!(item.name, "Jollof Rice");
        assert_eq!(item.price, Decimal::from(1500));
    }

    #[test]
    fn test_find_unknown_item() {
        assert!(find(&ItemId::from("egusi-soup")).is_none());
    }

    #[test]
    fn test_handles_are_unique() {
        let mut handles: Vec<_> = items().iter().map(|i| i.id.as_str()).collect();
        handles.sort_unstable();
        handles.dedup();
        assert_eq!(handles.len(), items().len());
    }
}
