//! Flick panels
//!
//! One renderer per region of the frame:
//! - Controls: minimum-rating gauge and language selector
//! - Movie list: one card per visible record
//! - Watch modal: blocking notice raised by the watch action

pub mod controls;
pub mod movie_list;
pub mod watch_modal;
