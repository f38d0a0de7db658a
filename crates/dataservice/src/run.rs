use std::io::Write;

use anyhow::Context;
use clap::CommandFactory;
use dataservice_fetch::{Actor, FetchOptions, Fetcher, StatusPolicy};
use serde_json::Value;

use crate::cli::{App, CompletionsArg, GetArg, Shape};
use crate::config::Config;

pub async fn get(arg: GetArg, config: Config) -> anyhow::Result<()> {
    let status_policy = if arg.require_success {
        StatusPolicy::RequireSuccess
    } else {
        config.status
    };
    let options = arg
        .headers
        .into_iter()
        .fold(FetchOptions::default().status_policy(status_policy), |o, (k, v)| {
            o.header(k, v)
        });

    let fetcher = Fetcher::from_setting(&config.client)
        .context("failed to build HTTP client")?
        .with_options(options);

    let fetch_context = || format!("failed to fetch {}", arg.url);
    let value = match arg.shape {
        Shape::Value => fetcher.get_value(&arg.url).await.with_context(fetch_context)?,
        Shape::Actor => {
            let actor = fetcher
                .get_data::<Actor>(&arg.url)
                .await
                .with_context(fetch_context)?;
            serde_json::to_value(actor).context("failed to encode actor")?
        }
    };

    let out = render(&value, arg.compact)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{out}").context("failed to write to stdout")?;
    Ok(())
}

pub fn completions(arg: CompletionsArg) {
    let mut cmd = App::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(arg.shell, &mut cmd, name, &mut std::io::stdout());
}

fn render(value: &Value, compact: bool) -> anyhow::Result<String> {
    let out = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    out.context("failed to render JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn render_compact_is_one_line() {
        let value = json!({"name": "Luke Skywalker", "films": ["a", "b"]});
        let out = render(&value, true).unwrap();
        assert!(!out.contains('\n'));
        assert_eq!(serde_json::from_str::<Value>(&out).unwrap(), value);
    }

    #[test]
    fn render_pretty_is_indented() {
        let out = render(&json!({"name": "Luke Skywalker"}), false).unwrap();
        assert_eq!(out, "{\n  \"name\": \"Luke Skywalker\"\n}");
    }
}
