use serde::Serialize;

use crate::registry::core::Entity;
use super::value_objects::{CoffeeId, CoffeeName};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coffee {
    id: CoffeeId,
    name: CoffeeName,
}

impl Coffee {
    pub(crate) fn new(id: CoffeeId, name: CoffeeName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> CoffeeId {
        self.id
    }

    pub fn name(&self) -> &CoffeeName {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: CoffeeName) {
        self.name = name;
    }
}

impl Entity for Coffee {
    type Id = CoffeeId;

    fn id(&self) -> CoffeeId {
        self.id
    }

    fn kind() -> &'static str {
        "coffee"
    }
}
