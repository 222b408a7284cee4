//! Repeated simultaneous rolls of a fixed set of dice.
//!
//! A [`Trial`] shares its dice with whoever built them and owns the
//! accumulated [`Results`]. Results reshape into either [`Form`] of [`Table`].

mod form;
mod record;
mod results;
mod table;
mod trial;

pub use form::*;
pub use record::*;
pub use results::*;
pub use table::*;
pub use trial::*;
