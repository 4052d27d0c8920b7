use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use twixt::Condition;

/// Writes the traffic of every game to a numbered JSON file.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    requests: Vec<RequestToPlayer>,
}

struct RequestToPlayer {
    player: String,
    request: String,
    response: String,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            requests: Vec::new(),
        })
    }

    pub fn store_request(&mut self, player: &str, request: String, response: String) {
        self.requests.push(RequestToPlayer {
            player: String::from(player),
            request: String::from(request.trim_end()),
            response,
        });
    }

    /// Drops the requests of an aborted game, keeping the numbering.
    pub fn discard_game(&mut self) {
        self.requests.clear();
    }

    /// Writes the requests stored since the last call, and how the game ended.
    //
    // The request/response are already JSON strings and would be escaped by
    // serde, so the surrounding document is written by hand.
    pub fn write_game_recording(&mut self, condition: Option<&Condition>) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let mut writer = BufWriter::new(File::create(&filepath)?);
        write!(writer, "{{\n  \"condition\": ")?;
        serde_json::to_writer(&mut writer, &condition)?;
        write!(writer, ",\n  \"requests\": [")?;
        let mut first = true;
        for req in std::mem::take(&mut self.requests) {
            if !first {
                write!(writer, ",")?;
            } else {
                first = false;
            }
            write!(
                writer,
                "\n    {{\n      \"player\": {},\n      \"request\": {},\n      \"response\": {}\n    }}",
                serde_json::to_string(&req.player)?,
                req.request,
                req.response
            )?;
        }
        write!(writer, "\n  ]\n}}\n")?;
        writer.flush()?;
        self.num += 1;
        Ok(filepath)
    }
}
