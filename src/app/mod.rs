//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the front end (main.rs, or any embedding UI) and
//! the domain layer. It owns the resume store and the transient builder state
//! and implements the event-driven flow that drives the live preview.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → Store Operations → Actions → Side Effects
//!                                             ↓
//!                                  Observers + Preview Render
//! ```
//!
//! # Modules
//!
//! - [`store`]: The resume store, its operations and observers
//! - [`forms`]: Unsaved form buffers for skills, experience, and education
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Builder tab state
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use cvforge::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::default();
//! let (render, _actions) = handle_event(
//!     &mut state,
//!     &Event::SelectTemplate { template: "classic".to_string() },
//! );
//! assert!(render);
//! assert_eq!(state.store.resume().selected_template, "classic");
//! ```

pub mod actions;
pub mod forms;
pub mod handler;
pub mod modes;
pub mod state;
pub mod store;

pub use actions::Action;
pub use forms::FormBuffers;
pub use handler::{handle_event, Event};
pub use modes::BuilderTab;
pub use state::AppState;
pub use store::{Clock, ResumeStore, SubscriptionId};
