use crate::core::{DeliveryReport, Mediator, Reaction};
use crate::utils::error::{MediatorError, Result};
use std::fmt;
use std::rc::Rc;

/// A participant that sends and receives messages only through its mediator.
///
/// The mediator reference is fixed at construction. Colleagues are owned by
/// whoever built them; the mediator only keeps weak references.
pub struct Colleague {
    name: String,
    mediator: Rc<dyn Mediator>,
    reaction: Box<dyn Reaction>,
}

impl Colleague {
    pub fn new(
        name: impl Into<String>,
        mediator: Rc<dyn Mediator>,
        reaction: Box<dyn Reaction>,
    ) -> Result<Rc<Self>> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MediatorError::construction("colleague name cannot be empty"));
        }

        tracing::debug!("Constructed colleague '{}' ({})", name, reaction.label());
        Ok(Rc::new(Self {
            name,
            mediator,
            reaction,
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        self.reaction.label()
    }

    pub fn mediator(&self) -> &Rc<dyn Mediator> {
        &self.mediator
    }

    /// Broadcast `message` to every other colleague registered with the mediator.
    pub fn send(&self, message: &str) -> Result<DeliveryReport> {
        self.mediator.send(message, self)
    }

    pub fn receive(&self, message: &str) -> Result<()> {
        self.reaction.react(message)
    }

    /// Pointer identity, the notion of "same colleague" the mediator uses.
    pub fn is(&self, other: &Colleague) -> bool {
        std::ptr::eq(self, other)
    }
}

impl fmt::Debug for Colleague {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Colleague")
            .field("name", &self.name)
            .field("kind", &self.reaction.label())
            .finish()
    }
}
