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

use serde_derive::{Deserialize, Serialize};

/// The ordered source manifest of a single design.
///
/// `verilog` distinguishes a design with no Verilog step at all (`None`) from
/// one that runs the Verilog step with nothing to read (`Some(vec![])`).
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DesignFileset {
    name: String,
    vhdl: Vec<String>,
    verilog: Option<Vec<String>>,
}

impl DesignFileset {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            vhdl: Vec::new(),
            verilog: None,
        }
    }

    /// Sets the VHDL sources, in the order they are analyzed.
    pub fn vhdl(mut self, srcs: &[&str]) -> Self {
        self.vhdl = srcs.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Sets the Verilog sources, marking them as present even if `srcs` is empty.
    pub fn verilog(mut self, srcs: &[&str]) -> Self {
        self.verilog = Some(srcs.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_vhdl(&self) -> &Vec<String> {
        &self.vhdl
    }

    pub fn get_verilog(&self) -> Option<&Vec<String>> {
        self.verilog.as_ref()
    }

    /// Displays the fileset's information in a single line for quick glance.
    pub fn quick_info(&self) -> String {
        format!(
            "{:<16}{} vhdl{}",
            self.name,
            self.vhdl.len(),
            match &self.verilog {
                Some(v) => format!(", {} verilog", v.len()),
                None => String::new(),
            }
        )
    }
}

/// Joins a list of sources into the single value of a flow assignment.
///
/// Sources are separated by one space and keep their original order.
pub fn join_sources<T: AsRef<str>>(srcs: &[T]) -> String {
    srcs.iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(" ")
}
