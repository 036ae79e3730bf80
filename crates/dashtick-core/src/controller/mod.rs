//! Refresh interval controller.
//!
//! Holds the selected [`RefreshInterval`](crate::interval::RefreshInterval)
//! and whether the user may change it, and tells subscribers about every
//! selection change. The controller never touches a timer: each
//! notification tells the host to cancel its current periodic refresh and,
//! when the new interval has a duration, schedule a new one.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use dashtick_core::{RefreshController, RefreshInterval};
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//!
//! let mut controller = RefreshController::initialize(RefreshInterval::OneMin, false);
//! controller.subscribe(move |interval| sink.borrow_mut().push(interval));
//! controller.mount();
//! controller.select(RefreshInterval::FiveMin);
//!
//! assert_eq!(*seen.borrow(), vec![RefreshInterval::OneMin, RefreshInterval::FiveMin]);
//! ```

pub mod handler;
pub mod subscribers;
pub mod types;

pub use handler::RefreshController;
pub use subscribers::SubscriptionId;
pub use types::{ControllerState, SelectOutcome};
