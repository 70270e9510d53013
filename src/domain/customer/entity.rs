use serde::Serialize;

use crate::registry::core::Entity;
use super::value_objects::{CustomerId, CustomerName};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    id: CustomerId,
    name: CustomerName,
}

impl Customer {
    pub(crate) fn new(id: CustomerId, name: CustomerName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &CustomerName {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: CustomerName) {
        self.name = name;
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> CustomerId {
        self.id
    }

    fn kind() -> &'static str {
        "customer"
    }
}
