/*  Library for the T-diagram simulator.
    Copyright (C) 2018 to 2019 Charles Johnson

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program. If not, see <http://www.gnu.org/licenses/>.
*/
/// The machine's native language. Always executable.
pub const LOCAL: &str = "LOCAL";

pub const DEFINE: &str = "DEFINIR";
pub const PROGRAM: &str = "PROGRAMA";
pub const INTERPRETER: &str = "INTERPRETE";
pub const TRANSLATOR: &str = "TRADUCTOR";
pub const EXECUTABLE: &str = "EJECUTABLE";
pub const EXIT: &str = "SALIR";

pub const PROGRAM_USAGE: &str = "DEFINIR PROGRAMA requiere <nombre> <lenguaje>";
pub const INTERPRETER_USAGE: &str =
    "DEFINIR INTERPRETE requiere <lenguaje_base> <lenguaje>";
pub const TRANSLATOR_USAGE: &str = "DEFINIR TRADUCTOR requiere <lenguaje_base> <lenguaje_origen> <lenguaje_destino>";
pub const EXECUTABLE_USAGE: &str = "EJECUTABLE requiere <nombre>";
