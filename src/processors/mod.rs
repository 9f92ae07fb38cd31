mod contracts;
mod proxy;

pub use contracts::Contracts;
pub use proxy::Proxy;
