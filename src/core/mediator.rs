use crate::core::colleague::Colleague;
use crate::core::{DeliveryPolicy, DeliveryReport, Mediator, RegistrationPolicy};
use crate::utils::error::{DeliveryFailure, MediatorError, Result};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Broadcast coordinator: holds the registry and fans messages out to
/// everyone except the sender.
///
/// The registry is append-only and keeps registration order. Entries are weak,
/// so the mediator never extends a colleague's lifetime.
#[derive(Debug, Default)]
pub struct ApplicationMediator {
    colleagues: RefCell<Vec<Weak<Colleague>>>,
    registration: RegistrationPolicy,
    delivery: DeliveryPolicy,
}

impl ApplicationMediator {
    pub fn new(registration: RegistrationPolicy, delivery: DeliveryPolicy) -> Self {
        Self {
            colleagues: RefCell::new(Vec::new()),
            registration,
            delivery,
        }
    }

    /// Default policies, wrapped for sharing with colleagues.
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn with_policies(registration: RegistrationPolicy, delivery: DeliveryPolicy) -> Rc<Self> {
        Rc::new(Self::new(registration, delivery))
    }

    pub fn registration_policy(&self) -> RegistrationPolicy {
        self.registration
    }

    pub fn delivery_policy(&self) -> DeliveryPolicy {
        self.delivery
    }

    pub fn add_colleague(&self, colleague: &Rc<Colleague>) -> Result<()> {
        let mut colleagues = self.colleagues.borrow_mut();

        let already_registered = colleagues
            .iter()
            .any(|entry| std::ptr::eq(entry.as_ptr(), Rc::as_ptr(colleague)));

        if already_registered {
            match self.registration {
                RegistrationPolicy::Reject => {
                    tracing::warn!("Rejected duplicate registration of '{}'", colleague.name());
                    return Err(MediatorError::DuplicateRegistration {
                        name: colleague.name().to_string(),
                    });
                }
                RegistrationPolicy::AllowDuplicates => {
                    tracing::debug!(
                        "'{}' registered again; it will receive each broadcast once per entry",
                        colleague.name()
                    );
                }
            }
        }

        colleagues.push(Rc::downgrade(colleague));
        tracing::debug!(
            "Registered '{}' at position {}",
            colleague.name(),
            colleagues.len() - 1
        );
        Ok(())
    }

    /// Number of registry entries, duplicates and dropped colleagues included.
    pub fn len(&self) -> usize {
        self.colleagues.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.colleagues.borrow().is_empty()
    }

    /// Names of live registry entries, in registration order.
    pub fn colleague_names(&self) -> Vec<String> {
        self.colleagues
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .map(|c| c.name().to_string())
            .collect()
    }
}

impl Mediator for ApplicationMediator {
    fn send(&self, message: &str, originator: &Colleague) -> Result<DeliveryReport> {
        // Snapshot so reactions may send or register without touching a live borrow.
        let registry: Vec<Weak<Colleague>> = self.colleagues.borrow().clone();

        tracing::info!(
            "'{}' broadcasting to {} registry entries",
            originator.name(),
            registry.len()
        );

        let mut report = DeliveryReport::new(originator.name(), message);
        let mut failures = Vec::new();

        for (position, entry) in registry.iter().enumerate() {
            let Some(colleague) = entry.upgrade() else {
                report.stale += 1;
                tracing::debug!("Skipping dropped colleague at position {}", position);
                continue;
            };

            if colleague.is(originator) {
                report.skipped_originator += 1;
                continue;
            }

            match colleague.receive(message) {
                Ok(()) => {
                    tracing::debug!(
                        "Delivered to '{}' ({}) at position {}",
                        colleague.name(),
                        colleague.label(),
                        position
                    );
                    report.delivered.push(colleague.name().to_string());
                }
                Err(e) => {
                    tracing::warn!("'{}' failed to receive: {}", colleague.name(), e);
                    failures.push(DeliveryFailure {
                        colleague: colleague.name().to_string(),
                        position,
                        reason: e.to_string(),
                    });
                    if self.delivery == DeliveryPolicy::FailFast {
                        break;
                    }
                }
            }
        }

        if failures.is_empty() {
            Ok(report)
        } else {
            Err(MediatorError::DeliveryError {
                originator: originator.name().to_string(),
                delivered: report.delivered_count(),
                failures,
            })
        }
    }
}
