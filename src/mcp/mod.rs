pub mod handlers;
pub mod server;
pub mod tools;

pub use server::SkeletonGenServer;
