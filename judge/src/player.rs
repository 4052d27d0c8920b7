use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{ChildStdin, ChildStdout, Command, Stdio};

use anyhow::Context;
use serde::Deserialize;
use tracing::trace;
use twixt::Request;

use crate::recording::Recorder;

/// How to start a bot, as read from a JSON file.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PlayerConfig {
    /// A short name shown in results.
    pub nick: String,
    /// The program and its arguments.
    pub cmd: Vec<String>,
}

impl PlayerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open player config '{}'", path.display()))?;
        let config: Self = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid player config '{}'", path.display()))?;
        if config.cmd.is_empty() {
            anyhow::bail!("Player config '{}' has an empty cmd", path.display());
        }
        Ok(config)
    }
}

/// A bot running as a child process.
pub struct Player {
    pub name: String,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    // A re-usable buffer for IO.
    // Should always be empty before and after perform_request().
    buf: String,
}

impl Player {
    pub fn from_config(config: &PlayerConfig) -> anyhow::Result<Self> {
        let (program, args) = config
            .cmd
            .split_first()
            .context("Player config has an empty cmd")?;
        let child_proc = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .with_context(|| format!("Could not start '{}'", program))?;

        Ok(Self {
            name: config.nick.clone(),
            stdin: child_proc.stdin.context("Could not access stdin")?,
            stdout: BufReader::new(child_proc.stdout.context("Could not access stdout")?),
            buf: String::new(),
        })
    }

    pub fn perform_request<T: serde::de::DeserializeOwned + std::fmt::Debug>(
        &mut self,
        recorder: &mut Option<Recorder>,
        req: &Request,
    ) -> anyhow::Result<T> {
        let mut req_json = serde_json::to_string(req)?;
        trace!(name: "Sending request", player = &self.name, request = %req_json);
        req_json.push('\n');
        self.stdin.write_all(req_json.as_bytes())?;
        self.stdin.flush()?;
        self.buf.clear();
        self.stdout.read_line(&mut self.buf)?;
        let serialized_response = self.buf.trim_end();
        let response = serde_json::from_str::<T>(serialized_response).with_context(|| {
            format!("Invalid response from {}: '{}'", self.name, serialized_response)
        })?;
        trace!(name: "Received response", player = &self.name, response = %serialized_response);

        if let Some(recorder) = recorder {
            recorder.store_request(&self.name, req_json, String::from(serialized_response));
        }
        self.buf.clear();
        Ok(response)
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        // The bot also exits on EOF, so a failure here is harmless
        if let Ok(mut bye) = serde_json::to_string(&Request::Bye) {
            bye.push('\n');
            let _ = self.stdin.write_all(bye.as_bytes());
            let _ = self.stdin.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "nick": "greedy", "cmd": ["target/release/greedy_bot", "--seed", "1"] }}"#
        )
        .unwrap();
        let config = PlayerConfig::load(file.path()).unwrap();
        assert_eq!(
            config,
            PlayerConfig {
                nick: String::from("greedy"),
                cmd: vec![
                    String::from("target/release/greedy_bot"),
                    String::from("--seed"),
                    String::from("1")
                ],
            }
        );
    }

    #[test]
    fn rejects_empty_command() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "nick": "nobody", "cmd": [] }}"#).unwrap();
        assert!(PlayerConfig::load(file.path()).is_err());
    }
}
