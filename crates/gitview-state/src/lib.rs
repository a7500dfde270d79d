pub mod model;
pub mod msg;
pub mod session;
pub mod store;
