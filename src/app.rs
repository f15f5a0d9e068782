use std::path::PathBuf;

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::formulation::recipe::RecipeInput;
use crate::i18n::{self, Translator};
use crate::session::{Outcome, SavedRecipe, Session};
use crate::storage::{PriceBook, RecipeBook, StoreError};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;
use crate::units::MassUnit;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/터미널 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 레시피/가격표 저장소 오류
    #[error("저장소 오류: {0}")]
    Store(#[from] StoreError),
    /// 레시피 파일 파싱 오류
    #[error("레시피 파일 오류: {0}")]
    RecipeFile(#[from] toml::de::Error),
}

/// 대화형 실행 중 유지되는 상태.
pub struct Workspace {
    pub config: Config,
    pub config_path: PathBuf,
    pub session: Session,
    pub input: RecipeInput,
    pub recipes: RecipeBook,
    pub prices: PriceBook,
}

impl Workspace {
    /// 설정에 적힌 경로로 저장소를 열고 새 작업 공간을 만든다.
    pub fn open(config: Config, config_path: PathBuf) -> Result<Self, AppError> {
        let recipes = RecipeBook::open(&config.recipe_file)?;
        let prices = PriceBook::open(&config.price_file)?;
        let session = Session::new(config.display_unit);
        let input = config.new_recipe();
        Ok(Self {
            config,
            config_path,
            session,
            input,
            recipes,
            prices,
        })
    }
}

/// 저장 형식의 레시피 하나를 계산해 출력한다. 비누 외 모드는 준비 중 안내만 한다.
pub fn report_saved(tr: &Translator, saved: SavedRecipe, display_unit: MassUnit) {
    let mut session = Session::new(display_unit);
    let input = session.restore(saved);
    match session.recalculate(&input) {
        Outcome::Calculated(result) => ui_cli::print_result(tr, result, display_unit),
        Outcome::ComingSoon(_) => println!("{}", tr.t(i18n::keys::MODE_COMING_SOON)),
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(ws: &mut Workspace, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::ProductMode => ui_cli::handle_product_mode(tr, ws)?,
            MenuChoice::Recipe => ui_cli::handle_recipe(tr, ws)?,
            MenuChoice::SavedRecipes => ui_cli::handle_saved_recipes(tr, ws)?,
            MenuChoice::Prices => ui_cli::handle_prices(tr, ws)?,
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, &mut ws.config)?;
                ws.config.save_to(&ws.config_path)?;
            }
            MenuChoice::Exit => {
                ws.config.save_to(&ws.config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
