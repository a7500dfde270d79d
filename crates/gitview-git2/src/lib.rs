mod backend;

pub use backend::Git2Backend;
