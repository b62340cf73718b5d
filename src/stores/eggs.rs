use crate::content::EasterEgg;
use crate::utils::sync::lock;
use std::sync::Mutex;

/// Easter-egg strip: which quote, if any, is showing
pub struct EggBoard {
    eggs: &'static [EasterEgg],
    message: Mutex<Option<&'static str>>,
}

impl EggBoard {
    pub fn new(eggs: &'static [EasterEgg]) -> Self {
        Self {
            eggs,
            message: Mutex::new(None),
        }
    }

    pub fn eggs(&self) -> &'static [EasterEgg] {
        self.eggs
    }

    /// Show the quote of egg `index`. Out-of-range leaves the message as is.
    pub fn select(&self, index: usize) -> Option<&'static EasterEgg> {
        let egg = self.eggs.get(index)?;
        *lock(&self.message) = Some(egg.quote);
        Some(egg)
    }

    pub fn message(&self) -> Option<&'static str> {
        *lock(&self.message)
    }
}
