//! Static read-only menu data, grouped by category.
//!
//! The catalog is loaded once at startup and never mutated afterwards;
//! orders denormalize the name and price of each item at order time, so
//! the core only ever reads from here.

use crate::model::{MenuItem, MenuItemId, MenuSection};

/// The menu offered to customers, fixed for the session.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Groups the menu by category, in first-appearance order.
    pub fn by_category(&self) -> Vec<MenuSection> {
        let mut sections: Vec<MenuSection> = Vec::new();
        for item in &self.items {
            match sections.iter_mut().find(|s| s.category == item.category) {
                Some(section) => section.items.push(item.clone()),
                None => sections.push(MenuSection {
                    category: item.category.clone(),
                    items: vec![item.clone()],
                }),
            }
        }
        sections
    }

    /// The house menu: burgers, sides and drinks.
    pub fn sample() -> Self {
        Self::new(vec![
            MenuItem::new(
                1,
                "X-Burger",
                "Burger with cheese, lettuce, tomato and house sauce",
                18.9,
                "Burgers",
            ),
            MenuItem::new(
                2,
                "X-Bacon",
                "Burger with cheese, bacon, lettuce, tomato and house sauce",
                22.9,
                "Burgers",
            ),
            MenuItem::new(
                3,
                "X-Salad",
                "Burger with cheese, lettuce, tomato, onion and house sauce",
                19.9,
                "Burgers",
            ),
            MenuItem::new(4, "Small Fries", "Small portion of crispy fries", 8.9, "Sides"),
            MenuItem::new(5, "Large Fries", "Large portion of crispy fries", 14.9, "Sides"),
            MenuItem::new(6, "Canned Soda", "350 ml can (cola, guarana, lemon-lime)", 5.9, "Drinks"),
            MenuItem::new(7, "Fresh Juice", "300 ml glass (orange, lime, pineapple)", 7.9, "Drinks"),
            MenuItem::new(8, "Milk Shake", "400 ml cup (chocolate, strawberry, vanilla)", 12.9, "Drinks"),
        ])
    }
}
