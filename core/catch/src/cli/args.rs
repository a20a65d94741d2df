use crate::domain::search::DEFAULT_LIST_LIMIT;
use crate::domain::{CatchCommand, SortOrder};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::domain::MemoId;
use common::error::Error;
use std::path::PathBuf;

/// --update に --text が無いときの案内（stdout に出して終了コード 1）
pub const MISSING_TEXT_USAGE: &str = "No text given.\nusage: catch -u id -t text";

/// 操作フラグ（create / list / update / delete）。複数指定時はコマンドラインで最後のものが勝つ。
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Create(String),
    List(u32),
    Update(MemoId),
    Delete(MemoId),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: HTTP のリクエスト・レスポンスを stderr に出す
    pub verbose: bool,
    /// --config: 設定ファイルのパス（未指定なら CATCH_CONFIG か ~/.catchrc）
    pub config_path: Option<PathBuf>,
    pub operation: Option<Operation>,
    /// -t / --text: --update と組み合わせる本文
    pub text: Option<String>,
    /// --sort: 一覧の並び順
    pub sort: SortOrder,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

pub(crate) fn build_clap_command() -> clap::Command {
    clap::Command::new("catch")
        .about("Create, list, update and delete memos on catch.com")
        .disable_help_flag(true)
        .args_override_self(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("create")
                .short('c')
                .long("create")
                .value_name("text")
                .help("Create a memo")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("list")
                .short('l')
                .long("list")
                .value_name("limit")
                .help("Show the most recently modified memos (default 5)")
                .num_args(0..=1)
                .default_missing_value("5")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            clap::Arg::new("update")
                .short('u')
                .long("update")
                .value_name("id")
                .help("Update a memo (requires --text)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("delete")
                .short('d')
                .long("delete")
                .value_name("id")
                .help("Delete a memo")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("text")
                .short('t')
                .long("text")
                .value_name("text")
                .help("Memo body text (only used with --update)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("sort")
                .long("sort")
                .value_name("order")
                .help("Sort order for --list")
                .value_parser(SortOrder::NAMES)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print HTTP request/response details to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("config")
                .long("config")
                .value_name("path")
                .help("Read credentials from this file instead of ~/.catchrc")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

/// 指定された操作フラグのうち、コマンドライン上で最後に現れたもの
fn last_operation(matches: &clap::ArgMatches) -> Option<Operation> {
    let mut candidates: Vec<(usize, Operation)> = Vec::new();
    if let (Some(idx), Some(text)) = (matches.index_of("create"), matches.get_one::<String>("create")) {
        candidates.push((idx, Operation::Create(text.clone())));
    }
    if let (Some(idx), Some(limit)) = (matches.index_of("list"), matches.get_one::<u32>("list")) {
        candidates.push((idx, Operation::List(*limit)));
    }
    if let (Some(idx), Some(id)) = (matches.index_of("update"), matches.get_one::<String>("update")) {
        candidates.push((idx, Operation::Update(MemoId::new(id.clone()))));
    }
    if let (Some(idx), Some(id)) = (matches.index_of("delete"), matches.get_one::<String>("delete")) {
        candidates.push((idx, Operation::Delete(MemoId::new(id.clone()))));
    }
    candidates
        .into_iter()
        .max_by_key(|(idx, _)| *idx)
        .map(|(_, op)| op)
}

fn matches_to_config(matches: &clap::ArgMatches) -> Result<Config, Error> {
    let sort = match matches.get_one::<String>("sort") {
        Some(s) => s.parse::<SortOrder>()?,
        None => SortOrder::default(),
    };
    Ok(Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        config_path: matches.get_one::<PathBuf>("config").cloned(),
        operation: last_operation(matches),
        text: matches.get_one::<String>("text").cloned(),
        sort,
    })
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)?))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    matches_to_config(&matches)
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "catch", &mut std::io::stdout());
}

/// Config を CatchCommand に変換する。--update に --text が無ければ使い方エラー。
pub fn config_to_command(config: Config) -> Result<CatchCommand, Error> {
    if config.help {
        return Ok(CatchCommand::Help);
    }

    let command = match config.operation {
        Some(Operation::Create(text)) => CatchCommand::Create { text },
        Some(Operation::List(limit)) => CatchCommand::List {
            limit,
            sort: config.sort,
        },
        Some(Operation::Update(id)) => {
            let text = config.text.ok_or_else(|| Error::usage(MISSING_TEXT_USAGE))?;
            CatchCommand::Update { id, text }
        }
        Some(Operation::Delete(id)) => CatchCommand::Delete { id },
        None => CatchCommand::List {
            limit: DEFAULT_LIST_LIMIT,
            sort: config.sort,
        },
    };
    Ok(command)
}
