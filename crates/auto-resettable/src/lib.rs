//! Generate an `auto_reset()` method that puts a struct's fields back to
//! their declared defaults.
//!
//! ```
//! use auto_resettable::auto_resettable;
//!
//! #[auto_resettable]
//! struct Fixture {
//!     #[reset(default = String::from("id"))]
//!     id: String,
//!     token: Option<u32>,
//!     // no default and not optional: reset by hand
//!     attempts: u32,
//!     #[reset(skip)]
//!     name: &'static str,
//! }
//!
//! impl Fixture {
//!     fn reset(&mut self) {
//!         self.auto_reset();
//!         self.attempts = 0;
//!     }
//! }
//!
//! let mut fixture = Fixture {
//!     id: "other".to_owned(),
//!     token: Some(42),
//!     attempts: 3,
//!     name: "fixture",
//! };
//! fixture.reset();
//!
//! assert_eq!(fixture.id, "id");
//! assert_eq!(fixture.token, None);
//! assert_eq!(fixture.attempts, 0);
//! assert_eq!(fixture.name, "fixture");
//! ```
//!
//! Defaults are expressions, not values: they run again on every call to
//! `auto_reset()`, side effects included.
//!
//! Attaching the attribute to anything but a struct is an error. The item is
//! kept as written and no method is generated:
//!
//! ```compile_fail
//! use auto_resettable::auto_resettable;
//!
//! #[auto_resettable]
//! enum State {
//!     Idle,
//!     Busy { retries: u32 },
//! }
//! ```
//!
//! Without the attribute the same enum compiles:
//!
//! ```
//! enum State {
//!     Idle,
//!     Busy { retries: u32 },
//! }
//! # let _ = State::Busy { retries: 0 };
//! # let _ = State::Idle;
//! ```

pub use auto_resettable_core::RESET_METHOD_NAME;
pub use auto_resettable_macros::auto_resettable;
