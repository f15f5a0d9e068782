//! 핵심 계산 로직을 라이브러리로 분리하여 대화형 CLI와 하위 명령이 같은 엔진을 쓰도록 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod formulation;
pub mod i18n;
pub mod input;
pub mod oil_db;
pub mod safety_db;
pub mod session;
pub mod storage;
pub mod ui_cli;
pub mod units;
