use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, StdoutLock, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use log::info;

/// Destination of a report: a file when a path is given, stdout otherwise.
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn save_json<T>(value: &T, path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = match path {
            Some(path) => Self::create(path)?,
            None => Self::Stdout(io::stdout().lock()),
        };
        output.write_json(value)
    }

    pub fn create(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(writer) => writer,
            Self::File { writer, .. } => writer,
        }
    }

    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let writer = self.writer();
        let result = serde_json::to_writer_pretty(&mut *writer, value)
            .map_err(anyhow::Error::from)
            .and_then(|()| writeln!(writer).map_err(anyhow::Error::from))
            .and_then(|()| writer.flush().map_err(anyhow::Error::from));
        result.with_context(|| format!("Failed to write JSON to {self}"))?;
        if let Self::File { path, .. } = self {
            info!("Saved report to {}", path.display());
        }
        Ok(())
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout(_) => f.write_str("stdout"),
            Self::File { path, .. } => write!(f, "{}", path.display()),
        }
    }
}
