//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

use colored::Colorize;
use std::{fmt::Display, path::PathBuf};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("unknown board {0:?}{1}")]
    UnknownBoard(String, Hint),
    #[error("unknown design {0:?}{1}")]
    UnknownDesign(String, Hint),
    #[error("board top {0:?} does not exist at {1:?}{2}")]
    MissingBoardTop(String, PathBuf, Hint),
    #[error("no project file found in current directory or any parent directory{0}")]
    ProjectFileMissing(Hint),
    #[error("failed to read project file {0:?}: {1}")]
    ProjectFileInvalid(PathBuf, LastError),
    #[error("memory rule {0} references unknown board {1:?}")]
    MemoryRuleUnknownBoard(usize, String),
    #[error("exited with error code: {0}")]
    ChildProcErrorCode(i32),
    #[error("terminated by signal")]
    ChildProcTerminated,
    #[error("failed to execute build flow: {0}")]
    FlowProcFailed(LastError),
}

#[derive(Debug, PartialEq)]
pub struct LastError(pub String);

impl Display for LastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Error::lowerize(self.0.to_string()))
    }
}

impl Error {
    pub fn lowerize(s: String) -> String {
        // get the first word
        let first_word = match s.split_whitespace().next() {
            Some(w) => w,
            None => return s,
        };
        // retain punctuation if the first word is all-caps and longer than 1 character
        if first_word.len() > 1
            && first_word
                .chars()
                .find(|c| c.is_ascii_lowercase() == true)
                .is_none()
        {
            s.to_string()
        } else {
            s.char_indices()
                .map(|(i, c)| if i == 0 { c.to_ascii_lowercase() } else { c })
                .collect()
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Hint {
    BoardsList,
    DesignsList,
    ExamplesList,
    ProjectRoot,
    Suggestion(String),
}

impl Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::BoardsList => {
                "use `neoflow list --boards` to see the list of known boards".to_string()
            }
            Self::DesignsList => {
                "use `neoflow list --designs` to see the list of known designs".to_string()
            }
            Self::ExamplesList => {
                "the board and design are not wired together; use `neoflow list` to see the available examples".to_string()
            }
            Self::ProjectRoot => {
                "run from inside the project or set the NEOFLOW_ROOT environment variable"
                    .to_string()
            }
            Self::Suggestion(s) => format!("did you mean {:?}?", s),
        };
        write!(
            f,
            "\n\n{}: {}",
            "hint".green(),
            Error::lowerize(message)
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lowerize_first_letter() {
        assert_eq!(
            Error::lowerize(String::from("No such file or directory")),
            String::from("no such file or directory")
        );
        // acronyms are kept intact
        assert_eq!(
            Error::lowerize(String::from("TOML parse error")),
            String::from("TOML parse error")
        );
        assert_eq!(Error::lowerize(String::new()), String::new());
    }
}
