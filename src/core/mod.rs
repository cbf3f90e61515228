pub mod colleague;
pub mod mediator;
pub mod scenario;
pub mod variants;

pub use crate::domain::model::{ColleagueKind, DeliveryPolicy, DeliveryReport, RegistrationPolicy};
pub use crate::domain::ports::{Mediator, Reaction};
pub use crate::utils::error::Result;
pub use colleague::Colleague;
pub use mediator::ApplicationMediator;
