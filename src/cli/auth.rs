//! Drives one run: prompt, exchange, persist.

use std::fmt;
use std::io::{BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::auth::{
    build_authorize_url, prompt_for_code, write_token_file, AuthError, TokenExchanger,
};
use crate::config::OAuthConfig;

/// Progress of a single run. States are only ever entered once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Start,
    AwaitingAuthCode,
    ExchangingTokens,
    Persisted,
    Done,
    Aborted,
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::AwaitingAuthCode => "awaiting-auth-code",
            Self::ExchangingTokens => "exchanging-tokens",
            Self::Persisted => "persisted",
            Self::Done => "done",
            Self::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

struct Flow {
    state: FlowState,
}

impl Flow {
    fn new() -> Self {
        Self {
            state: FlowState::Start,
        }
    }

    fn enter(&mut self, next: FlowState) {
        debug!(from = %self.state, to = %next, "flow transition");
        self.state = next;
    }
}

/// Run the whole exchange and write the token file to `output_path`.
///
/// `reader` supplies the pasted redirect URL and `writer` receives the
/// instructions and the confirmation line. Returns the terminal state
/// (`Done`) or the error that moved the run to `Aborted`.
pub async fn run<R, W>(
    config: &OAuthConfig,
    output_path: &Path,
    reader: R,
    mut writer: W,
) -> Result<FlowState, AuthError>
where
    R: BufRead,
    W: Write,
{
    let mut flow = Flow::new();
    match execute(&mut flow, config, output_path, reader, &mut writer).await {
        Ok(()) => {
            flow.enter(FlowState::Done);
            Ok(flow.state)
        }
        Err(err) => {
            flow.enter(FlowState::Aborted);
            Err(err)
        }
    }
}

async fn execute<R, W>(
    flow: &mut Flow,
    config: &OAuthConfig,
    output_path: &Path,
    reader: R,
    writer: &mut W,
) -> Result<(), AuthError>
where
    R: BufRead,
    W: Write,
{
    let authorize_url = build_authorize_url(config)?;

    flow.enter(FlowState::AwaitingAuthCode);
    let code = prompt_for_code(&authorize_url, reader, &mut *writer)?;

    flow.enter(FlowState::ExchangingTokens);
    let record = TokenExchanger::new(config).exchange_code(&code).await?;
    drop(code);

    write_token_file(output_path, &record)?;
    flow.enter(FlowState::Persisted);

    writeln!(writer, "Tokens written to {}.", output_path.display())?;
    writer.flush()?;
    Ok(())
}
