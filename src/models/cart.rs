use crate::core::config::CartConfig;

/// Fixed demo selection shown in the order panel
#[derive(Clone, Debug, PartialEq)]
pub struct Cart {
    pub items: Vec<String>,
    /// Whole rupees
    pub total: u32,
}

impl Cart {
    pub fn new(items: Vec<String>, total: u32) -> Self {
        Self { items, total }
    }
}

impl From<&CartConfig> for Cart {
    fn from(config: &CartConfig) -> Self {
        Self::new(config.items.clone(), config.total)
    }
}
