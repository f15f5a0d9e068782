use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use lye_dye_toolbox::app::{self, AppError, Workspace};
use lye_dye_toolbox::i18n::{self, keys, Translator};
use lye_dye_toolbox::session::SavedRecipe;
use lye_dye_toolbox::storage::KeyValueStore;
use lye_dye_toolbox::{config, oil_db};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lye_dye_toolbox")]
#[command(about = "Cold process soap recipe calculator")]
struct Cli {
    /// 언어 (auto/ko/en)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,

    /// 설정 파일 경로
    #[arg(short, long, default_value = config::CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// TOML 레시피 파일을 계산해 출력한다
    Calc { file: PathBuf },
    /// 저장된 레시피 이름 목록
    List,
    /// 저장된 레시피를 계산해 출력한다
    Show { name: String },
    /// 저장된 레시피 삭제
    Delete { name: String },
    /// 검화가 테이블 출력
    Oils,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령이나 대화형 메뉴를 실행한다.
fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lye_dye_toolbox=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match try_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "run failed");
            let tr = Translator::new(&i18n::resolve_language(&cli.lang, None));
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: &Cli) -> Result<(), AppError> {
    let cfg = config::load_or_default_from(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, None);
    tracing::debug!(lang = tr.language().as_code(), config = %cli.config.display(), "translator ready");
    let mut ws = Workspace::open(cfg, cli.config.clone())?;

    match &cli.command {
        None => app::run(&mut ws, &tr)?,
        Some(Command::Calc { file }) => {
            let content = fs::read_to_string(file)?;
            let saved: SavedRecipe = toml::from_str(&content)?;
            app::report_saved(&tr, saved, ws.config.display_unit);
        }
        Some(Command::List) => {
            for name in ws.recipes.names() {
                println!("{name}");
            }
        }
        Some(Command::Show { name }) => match ws.recipes.get(name) {
            Some(saved) => app::report_saved(&tr, saved, ws.config.display_unit),
            None => println!("{} {name}", tr.t(keys::SAVED_NOT_FOUND)),
        },
        Some(Command::Delete { name }) => {
            if ws.recipes.delete(name)? {
                println!("{} {name}", tr.t(keys::SAVED_DELETED));
            } else {
                println!("{} {name}", tr.t(keys::SAVED_NOT_FOUND));
            }
        }
        Some(Command::Oils) => {
            for oil in oil_db::oils() {
                println!(
                    "{:<14} {:<22} {:.3}  {}",
                    oil.code, oil.name, oil.sap_naoh, oil.notes
                );
            }
        }
    }
    Ok(())
}
