pub mod category;
pub mod location;
pub mod status;
