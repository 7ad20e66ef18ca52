// Student profile: form parsing at the HTTP boundary and the save/load handlers.

pub mod form;
pub mod handlers;
