//! Canvas document and editing engine for the proposal builder.
//!
//! This crate owns the in-memory model of a proposal canvas: the positioned
//! element collection, the mutation protocol that keeps it consistent, the
//! linear undo/redo history, and the geometric algorithms (alignment,
//! distribution, collision, grid snapping, z-order layering) that operate on
//! element snapshots. The host UI wires user input to [`engine::CanvasEngine`]
//! methods and forwards the returned [`engine::Action`]s to the persistence
//! gateway; the gateway itself is an external collaborator reached through
//! [`gateway::Gateway`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine tying store, selection and history together |
//! | [`element`] | Element model: kinds, typed properties, sparse updates |
//! | [`store`] | In-memory element store with z-order management |
//! | [`selection`] | Ephemeral selection set |
//! | [`layout`] | Stateless geometry: align, distribute, collide, snap |
//! | [`history`] | Bounded linear undo/redo over document snapshots |
//! | [`template`] | Template metadata, page formats, grid configuration |
//! | [`validate`] | Advisory per-kind element validation |
//! | [`gateway`] | Persistence gateway contract and HTTP client |
//! | [`config`] | Environment-variable overrides for defaults |
//! | [`consts`] | Shared numeric and color constants |

pub mod config;
pub mod consts;
pub mod element;
pub mod engine;
pub mod gateway;
pub mod history;
pub mod layout;
pub mod selection;
pub mod store;
pub mod template;
pub mod validate;
