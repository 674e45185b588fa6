use crate::domain::{cta::CtaAction, deck::CtaButton};

/// Handlers bound to the final slide's CTA controls, one per button.
///
/// Binding replaces the whole set, so re-entering the final slide any number
/// of times leaves exactly one handler per control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CtaBindings {
    handlers: Vec<CtaAction>,
    binds: u32,
}

impl CtaBindings {
    pub fn bind(&mut self, buttons: &[CtaButton]) -> usize {
        self.handlers = buttons
            .iter()
            .map(|button| CtaAction::parse(&button.action))
            .collect();
        self.binds += 1;
        self.handlers.len()
    }

    pub fn handler(&self, index: usize) -> Option<&CtaAction> {
        self.handlers.get(index)
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_bound(&self) -> bool {
        self.binds > 0
    }

    /// Number of bind passes so far.
    pub fn binds(&self) -> u32 {
        self.binds
    }
}
