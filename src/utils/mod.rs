pub mod fields;
pub mod hex;
pub mod response;
