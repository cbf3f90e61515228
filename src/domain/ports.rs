use crate::core::colleague::Colleague;
use crate::domain::model::DeliveryReport;
use crate::utils::error::Result;

/// Central coordinator. Colleagues talk to each other only through this.
pub trait Mediator {
    /// Deliver `message` to every registered colleague except `originator`,
    /// in registration order.
    fn send(&self, message: &str, originator: &Colleague) -> Result<DeliveryReport>;
}

/// How a colleague reacts to a message it receives.
///
/// Colleague variants differ only in their `Reaction`; adding a variant means
/// adding an implementation here, never touching the mediator.
pub trait Reaction {
    /// Short label identifying the variant in logs.
    fn label(&self) -> &str;

    fn react(&self, message: &str) -> Result<()>;
}
