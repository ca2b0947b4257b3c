pub mod auth;
pub mod invitation;
pub mod project;
pub mod status;
pub mod task;
