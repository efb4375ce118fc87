// 上游员工目录接口
mod client;
mod model;

pub use client::UpstreamClient;
pub use model::{Employee, Envelope};
