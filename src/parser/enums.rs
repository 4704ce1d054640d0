//! Enumeration listing reader.
//!
//! One page holds many enumerations back to back with no delimiter. The
//! reader owns the cursor and yields one [`Enumerator`] per call: a second
//! name marker ends the open record and is un-read so the next call starts
//! on it.

use super::patterns::RE_ENUM_NAME;
use crate::error::{Result, ScrapeError};
use crate::model::*;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

/// Page listing every enumeration of the API.
pub const ENUMS_FILE: &str = "group__enums.html";

/// Progress through the record being read. The stream is done once
/// `exhausted` is set.
#[derive(Debug)]
enum ReaderState {
    SeekingFirstEnum,
    AccumulatingMembers {
        name: String,
        anchor: String,
        members: Vec<EnumMember>,
    },
}

pub struct EnumStream<R> {
    reader: R,
    /// Path of the page, for record links.
    source: String,
    exhausted: bool,
}

impl EnumStream<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| ScrapeError::io(path, e))?;
        Ok(Self::new(BufReader::new(file), path.to_string_lossy()))
    }
}

impl<R: BufRead + Seek> EnumStream<R> {
    pub fn new(reader: R, source: impl Into<String>) -> Self {
        Self {
            reader,
            source: source.into(),
            exhausted: false,
        }
    }

    /// Read the next enumeration. `Ok(None)` once the page is exhausted.
    pub fn next_enum(&mut self) -> Result<Option<Enumerator>> {
        if self.exhausted {
            return Ok(None);
        }

        let mut state = ReaderState::SeekingFirstEnum;
        let mut line = String::new();
        let mut offset = self.position()?;
        loop {
            let line_start = offset;
            line.clear();
            let read = self
                .reader
                .read_line(&mut line)
                .map_err(|e| ScrapeError::io(&self.source, e))?;
            if read == 0 {
                self.exhausted = true;
                break;
            }
            offset += read as u64;

            if let Some(caps) = RE_ENUM_NAME.captures(&line) {
                if let ReaderState::AccumulatingMembers { .. } = state {
                    // the marker opens the next record: un-read it
                    self.reader
                        .seek(SeekFrom::Start(line_start))
                        .map_err(|e| ScrapeError::io(&self.source, e))?;
                    return Ok(self.finish(state));
                }
                state = ReaderState::AccumulatingMembers {
                    name: caps["name"].to_string(),
                    anchor: caps["link"].to_string(),
                    members: Vec::new(),
                };
            } else if let ReaderState::AccumulatingMembers { members, .. } = &mut state {
                if let Some(member) = EnumMember::try_parse(&line) {
                    members.push(member);
                }
            }
        }

        Ok(self.finish(state))
    }

    fn finish(&self, state: ReaderState) -> Option<Enumerator> {
        match state {
            ReaderState::AccumulatingMembers {
                name,
                anchor,
                members,
            } => {
                let link = format!("{}#{}", self.source, anchor);
                tracing::debug!(enumerator = %name, members = members.len(), "parsed enumerator");
                Some(Enumerator {
                    description: Description::new(format!("Enum {}", name), Some(link.as_str())),
                    name,
                    members,
                })
            }
            ReaderState::SeekingFirstEnum => None,
        }
    }

    fn position(&mut self) -> Result<u64> {
        self.reader
            .stream_position()
            .map_err(|e| ScrapeError::io(&self.source, e))
    }
}

impl<R: BufRead + Seek> Iterator for EnumStream<R> {
    type Item = Result<Enumerator>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_enum().transpose()
    }
}
