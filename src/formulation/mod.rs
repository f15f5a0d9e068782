//! 비누 배합 계산 모듈 모음.

pub mod additives;
pub mod batch;
pub mod cost;
pub mod lye;
pub mod mode;
pub mod oils;
pub mod profiles;
pub mod recipe;
pub mod safety;
pub mod water;

pub use additives::*;
pub use batch::*;
pub use cost::*;
pub use lye::*;
pub use mode::ProductMode;
pub use oils::*;
pub use recipe::*;
pub use safety::*;
pub use water::*;
