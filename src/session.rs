//! 호출자가 들고 다니는 계산 컨텍스트.
//!
//! 오일 입력 기준(백분율/질량), 입력 단위, 제품 모드, 마지막 계산 결과를 한곳에 묶는다.
//! 엔진 함수는 이 값을 인자로만 받으며 전역 상태를 두지 않는다.

use serde::{Deserialize, Serialize};

use crate::formulation::oils::{scale_oils, OilBasis, OilEntry};
use crate::formulation::profiles::Profile;
use crate::formulation::recipe::{calculate, RecipeInput, RecipeResult};
use crate::formulation::ProductMode;
use crate::units::MassUnit;

/// 이름을 붙여 저장하는 레시피. 입력 당시의 기준/단위를 함께 보관한다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedRecipe {
    pub basis: OilBasis,
    pub unit: MassUnit,
    pub mode: ProductMode,
    pub input: RecipeInput,
}

/// 계산 호출 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome<'a> {
    Calculated(&'a RecipeResult),
    /// 아직 지원하지 않는 비누 외 제품 모드
    ComingSoon(ProductMode),
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub basis: OilBasis,
    pub unit: MassUnit,
    mode: ProductMode,
    last_result: Option<RecipeResult>,
}

impl Session {
    pub fn new(unit: MassUnit) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> ProductMode {
        self.mode
    }

    /// 제품 모드를 바꾼다. 비누 모드면 해당 가성소다 종류를 입력에 반영한다.
    pub fn set_mode(&mut self, mode: ProductMode, input: &mut RecipeInput) {
        self.mode = mode;
        if let Some(kind) = mode.lye() {
            input.lye.kind = kind;
        }
        self.last_result = None;
        tracing::debug!(mode = mode.key(), soap = mode.is_soap(), "product mode changed");
    }

    /// 현재 컨텍스트로 레시피를 다시 계산하고 결과를 보관한다.
    pub fn recalculate(&mut self, input: &RecipeInput) -> Outcome<'_> {
        if !self.mode.is_soap() {
            self.last_result = None;
            return Outcome::ComingSoon(self.mode);
        }
        let result = calculate(input, self.basis, self.unit);
        Outcome::Calculated(self.last_result.insert(result))
    }

    pub fn last_result(&self) -> Option<&RecipeResult> {
        self.last_result.as_ref()
    }

    /// 프로파일을 적용한다. 입력은 백분율 기준으로 전환된다.
    pub fn apply_profile(&mut self, profile: &Profile, input: &mut RecipeInput) {
        input.oils = profile.entries();
        self.basis = OilBasis::Percent;
        self.last_result = None;
    }

    /// 마지막 계산 결과의 오일 구성을 새 목표 총량(g)으로 조정한다.
    /// 결과는 g 기준 입력으로 바뀐다. 계산 결과가 없으면 아무것도 하지 않고 false.
    pub fn scale_to(&mut self, new_target_g: f64, input: &mut RecipeInput) -> bool {
        let Some(result) = self.last_result.take() else {
            return false;
        };
        input.oils = scale_oils(&result.oils, new_target_g);
        input.target_oil_g = new_target_g;
        self.basis = OilBasis::Weight;
        self.unit = MassUnit::Gram;
        true
    }

    /// 저장용 스냅샷을 만든다.
    pub fn snapshot(&self, input: &RecipeInput) -> SavedRecipe {
        SavedRecipe {
            basis: self.basis,
            unit: self.unit,
            mode: self.mode,
            input: input.clone(),
        }
    }

    /// 저장된 레시피의 기준/단위/모드를 복원하고 입력을 돌려준다.
    /// 가성소다 종류가 고정된 모드(액체, 카스틸)는 그 종류를 입력에 다시 반영한다.
    pub fn restore(&mut self, saved: SavedRecipe) -> RecipeInput {
        self.basis = saved.basis;
        self.unit = saved.unit;
        self.mode = saved.mode;
        self.last_result = None;
        let mut input = saved.input;
        if saved.mode.locks_lye() {
            if let Some(kind) = saved.mode.lye() {
                input.lye.kind = kind;
            }
        }
        input
    }

    /// 오일 목록을 교체한다. 기준/단위는 그대로 둔다.
    pub fn set_oils(&mut self, oils: Vec<OilEntry>, input: &mut RecipeInput) {
        input.oils = oils;
        self.last_result = None;
    }
}
