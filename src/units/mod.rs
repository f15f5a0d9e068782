//! 단위 정의 및 변환 모듈 모음.

pub mod mass;

pub use mass::{convert_mass, MassUnit, GRAMS_PER_OUNCE, GRAMS_PER_POUND};
