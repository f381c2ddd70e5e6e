//! `options` command

use crate::display::{format_option_json, format_option_table};
use crate::error::SignalResult;

/// Print the unlock option catalog
pub fn handle_options_command(json: bool) -> SignalResult<()> {
    if json {
        println!("{}", format_option_json()?);
    } else {
        println!("{}", format_option_table());
    }
    Ok(())
}
