mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::io::{self, Write};
use std::process;

use cli::{config_to_command, parse_args, print_completion, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::{CatchCommand, SearchQuery};
use ports::inbound::UseCaseRunner;
use wiring::{wire_catch, App};

/// CatchCommand をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl Runner {
    fn execute(&self, cmd: CatchCommand, out: &mut dyn Write) -> Result<i32, Error> {
        let client = &self.app.note_client;
        match cmd {
            CatchCommand::Help => {
                print_help(out)?;
            }
            CatchCommand::Create { text } => {
                writeln!(out, "{}", text)?;
                let status = client.create(&text)?;
                writeln!(out, "{}", status)?;
            }
            CatchCommand::List { limit, sort } => {
                let memos = client.search(&SearchQuery::list(limit, sort))?;
                for (i, memo) in memos.iter().enumerate() {
                    writeln!(out, "[{}] {}", i + 1, memo.text)?;
                }
            }
            // 書き込み前に対象の本文を出す（PUT / DELETE が失敗しても何を変えようとしたか分かる）
            CatchCommand::Update { id, text } => {
                let memo = client.resolve(&id)?;
                writeln!(out, "[old]\n{}", memo.text)?;
                writeln!(out, "[new]\n{}", text)?;
                out.flush()?;
                let status = client.update_memo(&memo, &text)?;
                writeln!(out, "{}", status)?;
            }
            CatchCommand::Delete { id } => {
                let memo = client.resolve(&id)?;
                writeln!(out, "{}", memo.text)?;
                out.flush()?;
                let status = client.delete_memo(&memo)?;
                writeln!(out, "{}", status)?;
            }
        }
        Ok(0)
    }
}

impl UseCaseRunner for Runner {
    fn run(&self, cmd: CatchCommand, out: &mut dyn Write) -> Result<i32, Error> {
        let command_name = cmd.name();
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let result = self.execute(cmd, out);

        let code = match result {
            Ok(code) => code,
            Err(ref e) => e.exit_code(),
        };
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self.app.logger.log(
                &LogRecord::new(LogLevel::Error, e.to_string())
                    .layer("cli")
                    .kind("error"),
            );
        }
        result
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(Error::Usage(msg)) => {
            println!("{}", msg);
            1
        }
        Err(e) => {
            eprintln!("catch: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    // 引数の検証は設定ファイル・ネットワークより先に行う
    let cmd = config_to_command(config.clone())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cmd == CatchCommand::Help {
        print_help(&mut out)?;
        return Ok(0);
    }
    let app = wire_catch(&config)?;
    let runner = Runner { app };
    runner.run(cmd, &mut out)
}

fn print_help(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Usage: catch [options]")?;
    writeln!(out, "Options:")?;
    writeln!(out, "  -c, --create <text>       Create a memo")?;
    writeln!(out, "  -l, --list [limit]        Show the latest memos of the default stream (default 5)")?;
    writeln!(out, "  -u, --update <id>         Update a memo (requires --text)")?;
    writeln!(out, "  -d, --delete <id>         Delete a memo (prints its text first)")?;
    writeln!(out, "  -t, --text <text>         Memo body text (only used with --update)")?;
    writeln!(out, "      --sort <order>        Sort order for --list: modified_desc (default), modified_asc, created_desc, created_asc")?;
    writeln!(out, "  -v, --verbose             Print HTTP request/response details to stderr")?;
    writeln!(out, "      --config <path>       Credentials file (default: $CATCH_CONFIG or ~/.catchrc)")?;
    writeln!(out, "      --generate <shell>    Generate shell completion script (bash, zsh, fish, ...)")?;
    writeln!(out, "  -h, --help                Show this help message")?;
    writeln!(out)?;
    writeln!(out, "Configuration (~/.catchrc, chmod 600):")?;
    writeln!(out, "  @user = \"namae\"")?;
    writeln!(out, "  @password = \"oshienai\"")?;
    writeln!(out)?;
    writeln!(out, "Environment:")?;
    writeln!(out, "  CATCH_CONFIG      Credentials file path")?;
    writeln!(out, "  CATCH_LOG_FILE    JSONL log file (default: $XDG_STATE_HOME/catch/catch.jsonl)")?;
    writeln!(out)?;
    writeln!(out, "Examples:")?;
    writeln!(out, "  catch --list")?;
    writeln!(out, "  catch --create memomemo")?;
    writeln!(out, "  catch --update 2 --text mememo")?;
    writeln!(out, "  catch --delete 2")?;
    Ok(())
}
