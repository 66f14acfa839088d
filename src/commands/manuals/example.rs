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
    example - print or run the build for a board and design

SYNOPSIS
    neoflow example [options] <board> <design> [--] [targets]...

DESCRIPTION
    Validates the board and the design against the project file, verifies the
    board top 'neorv32_<board>_BoardTop_<design>.vhd' exists in the board tops
    directory, and then assembles the call to the flow's makefile.

    By default the command is printed as a single line. With '--run' it is
    executed through the shell from the project root. The variables
    NEOFLOW_BOARD, NEOFLOW_DESIGN, and NEOFLOW_BITSTREAM are set for the
    flow's process.

    When no targets are given the flow runs 'clean bit'.

OPTIONS
    <board>
        Board to synthesize for.

    <design>
        Design variant to place on the board.

    --run
        Execute the build instead of printing it.

    --verbose
        Display the command being executed.

    -- targets...
        Flow targets to run.

EXAMPLES
    neoflow example UPduino MinimalBoot
    neoflow example Fomu MixedLanguage --run -- synth
"#;
