pub mod canister;
pub mod result;
