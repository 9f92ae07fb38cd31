mod cli;
mod contracts;
mod proxy;

pub use cli::{Cli, Commands, ConnectionArgs};
pub use contracts::ContractSourceCode;
pub use proxy::{BlockInfo, TransactionByHashInfo, TransactionReceipt, TransactionReceiptLog};
