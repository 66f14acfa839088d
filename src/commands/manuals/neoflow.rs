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

pub const MANUAL: &str = r#"NAME
    neoflow - board and design resolution for the neorv32 osflow examples

SYNOPSIS
    neoflow [options] [command]

DESCRIPTION
    Neoflow assembles the invocation of the osflow synthesis makefile for a
    board and a design. The boards, designs, and memory sources are read from
    the 'neoflow.toml' project file found in the current directory or in one
    of its parents.

    The project root can be set explicitly with the NEOFLOW_ROOT environment
    variable.

    Setting NO_COLOR disables colored output unless '--color always' is given.

OPTIONS
    --version
        Print version information and exit.

    --color <when>
        Coloring: auto, always, never.

    --help, -h
        Print help information.

COMMANDS
    example, list, help
"#;
