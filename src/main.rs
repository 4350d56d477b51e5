//! Convert SVG font glyphs into piecewise Bezier formulas for Desmos.

use glyph_desmos::core;

fn main() {
    let cli_args = core::platform::get_cli_args();
    match core::run_app(cli_args) {
        Ok(()) => {}
        Err(error) => core::platform::handle_error(error),
    }
}
