//! relayout - 잘못된 자판으로 입력된 텍스트 교정 CLI

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use relayout::config::{load_config, load_config_from};
use relayout::phonetics::FrequencyTable;
use relayout::{Culture, LangError, LayoutCorrector, Registry};

#[derive(Parser, Debug)]
#[command(name = "relayout", version, about = "Fix text typed with the wrong keyboard layout")]
struct Cli {
    /// 설정 파일 경로 (기본: ~/.config/relayout/config.json)
    #[arg(long, env = "RELAYOUT_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// 입력 자판 문화권 (설정 파일 값을 덮어씀)
    #[arg(long, global = true)]
    from: Option<String>,

    /// 대상 자판 문화권 (설정 파일 값을 덮어씀)
    #[arg(long, global = true)]
    to: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 잘못된 자판으로 보이는 단어를 교정 (단어가 없으면 표준 입력의 각 줄)
    Correct { words: Vec<String> },
    /// 단어별 판정 결과 출력
    Probe { words: Vec<String> },
    /// 판정 없이 강제로 자판 투영
    Map { words: Vec<String> },
    /// 말뭉치 파일에서 빈도 테이블 생성
    Train {
        corpus: PathBuf,
        /// 출력 파일 (없으면 표준 출력)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("relayout: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), LangError> {
    // 학습은 등록소가 필요 없음
    if let Command::Train { corpus, output } = &cli.command {
        return train(corpus, output.as_deref());
    }

    let config = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };
    let from = cli
        .from
        .as_deref()
        .map(Culture::new)
        .unwrap_or_else(|| config.source_culture.clone());
    let to = cli
        .to
        .as_deref()
        .map(Culture::new)
        .unwrap_or_else(|| config.target_culture.clone());

    let corrector = LayoutCorrector::new(Arc::new(Registry::from_config(&config)?));

    match cli.command {
        Command::Correct { words } => for_each_input(words, |text| {
            let result = corrector.correct_layout(text, &from, &to)?;
            if result.is_succeeded() {
                println!("{}", result.text());
            } else {
                println!("{}", text);
            }
            Ok(())
        }),
        Command::Probe { words } => for_each_input(words, |text| {
            let verdict = corrector.sounds_like(text, &from)?;
            println!("{}\t{}", text, verdict);
            Ok(())
        }),
        Command::Map { words } => for_each_input(words, |text| {
            let result = corrector.try_map_layout(text, &from, &to)?;
            match result.into_option() {
                Some(mapped) => println!("{}", mapped),
                None => println!("{}\t<unmappable>", text),
            }
            Ok(())
        }),
        Command::Train { .. } => Ok(()),
    }
}

/// 인자로 받은 단어들, 없으면 표준 입력의 각 줄에 대해 실행
fn for_each_input<F>(words: Vec<String>, mut f: F) -> Result<(), LangError>
where
    F: FnMut(&str) -> Result<(), LangError>,
{
    if !words.is_empty() {
        for word in &words {
            f(word)?;
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        let text = line.trim();
        if !text.is_empty() {
            f(text)?;
        }
    }
    Ok(())
}

fn train(corpus: &std::path::Path, output: Option<&std::path::Path>) -> Result<(), LangError> {
    let text = std::fs::read_to_string(corpus)?;
    let table = FrequencyTable::train(&text);
    log::info!("{}개 바이그램 학습 완료", table.len());

    let resource = table.to_resource();
    match output {
        Some(path) => std::fs::write(path, resource)?,
        None => print!("{}", resource),
    }
    Ok(())
}
