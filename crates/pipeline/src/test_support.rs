//! Drink builders shared by the unit tests in this crate.

use catalog::{Drink, DrinkCategory, HealthFocus, Ingredient, IngredientIcon};

pub(crate) fn drink(id: &str, category: DrinkCategory) -> Drink {
    Drink {
        id: id.to_string(),
        category,
        name: id.to_string(),
        description: String::new(),
        image: None,
        flavor_notes: vec![],
        ingredients: vec![],
        preparation: vec![],
        health_benefits: vec![],
    }
}

pub(crate) fn with_ingredients(mut drink: Drink, names: &[&str]) -> Drink {
    drink.ingredients = names
        .iter()
        .map(|name| Ingredient {
            name: name.to_string(),
            description: String::new(),
            benefits: vec![],
            icon: IngredientIcon::Leaf,
        })
        .collect();
    drink
}

pub(crate) fn with_benefits(mut drink: Drink, benefits: &[&str]) -> Drink {
    drink.health_benefits = benefits.iter().map(|b| b.to_string()).collect();
    drink
}

pub(crate) fn focus(benefits: &[&str]) -> HealthFocus {
    HealthFocus {
        id: "test-focus".to_string(),
        label: "Test Focus".to_string(),
        tagline: String::new(),
        benefits: benefits.iter().map(|b| b.to_string()).collect(),
    }
}
