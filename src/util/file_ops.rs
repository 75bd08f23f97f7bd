// File Operations for RSA Encryption/Decryption
// Reads plaintext or block text from a file or stdin, writes results back out

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Errors that can occur during file operations
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error on standard stream: {0}")]
    Stdio(#[from] io::Error),

    #[error("{path} is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },
}

/// Result type for file operations
pub type FileResult<T> = Result<T, FileError>;

/// Where text is read from or written to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Stdio,
    File(PathBuf),
}

impl Source {
    /// `-` selects stdin/stdout, anything else is a path
    pub fn from_arg(arg: &Path) -> Self {
        if arg == Path::new("-") {
            Source::Stdio
        } else {
            Source::File(arg.to_path_buf())
        }
    }
}

/// Read an entire text file into memory
pub fn read_file(path: &Path) -> FileResult<String> {
    let mut file = File::open(path).map_err(|source| FileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut data = Vec::new();
    file.read_to_end(&mut data).map_err(|source| FileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(data).map_err(|_| FileError::InvalidUtf8 {
        path: path.to_path_buf(),
    })
}

/// Write text to file, replacing its contents
pub fn write_file(path: &Path, data: &str) -> FileResult<()> {
    fs::write(path, data).map_err(|source| FileError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read all text from a source
pub fn read_text(source: &Source) -> FileResult<String> {
    match source {
        Source::File(path) => read_file(path),
        Source::Stdio => {
            let mut data = String::new();
            io::stdin().read_to_string(&mut data)?;
            Ok(data)
        }
    }
}

/// Write text to a destination; stdout gets a trailing newline
pub fn write_text(dest: &Source, data: &str) -> FileResult<()> {
    match dest {
        Source::File(path) => write_file(path, data),
        Source::Stdio => {
            let mut out = io::stdout().lock();
            writeln!(out, "{}", data)?;
            out.flush()?;
            Ok(())
        }
    }
}
